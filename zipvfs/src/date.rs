//! Conversions between `chrono` times and the archive container's
//! timestamp format. The container stores times with two-second
//! resolution over the years 1980 through 2107; times that cannot be
//! represented are dropped rather than approximated.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

pub(crate) fn to_archive_time(time: DateTime<Utc>) -> Option<zip::DateTime> {
    let year = u16::try_from(time.year()).ok()?;
    zip::DateTime::from_date_and_time(
        year,
        time.month() as u8,
        time.day() as u8,
        time.hour() as u8,
        time.minute() as u8,
        time.second() as u8,
    )
    .ok()
}

pub(crate) fn from_archive_time(time: zip::DateTime) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(
        i32::from(time.year()),
        u32::from(time.month()),
        u32::from(time.day()),
        u32::from(time.hour()),
        u32::from(time.minute()),
        u32::from(time.second()),
    )
    .single()
}
