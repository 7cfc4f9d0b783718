//! The file-tree capability shared by archive sources and the virtual
//! filesystem: open a path, get back a handle that can be read, seeked,
//! statted, or listed.

use std::io;

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

/// Metadata for one file or directory, as reported by [`File::stat`] and
/// by directory listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Final path segment; `"."` for a filesystem root.
    pub name: String,
    /// Content length in bytes; zero for directories.
    pub size: u64,
    /// Modification time. `None` when the backing store holds no
    /// meaningful time for the entry, which is always the case for the
    /// directories a [`crate::ZipVfs`] synthesizes. Callers must not
    /// depend on a directory time being present.
    pub modified: Option<DateTime<Utc>>,
    pub is_dir: bool,
}

impl FileInfo {
    pub(crate) fn directory(name: &str) -> FileInfo {
        FileInfo {
            name: name.to_string(),
            size: 0,
            modified: None,
            is_dir: true,
        }
    }
}

/// One page of results from [`File::readdir`].
#[derive(Debug, Default)]
pub struct DirPage {
    /// Entries gathered by this call, in listing order.
    pub entries: Vec<FileInfo>,
    /// Set once a paginated listing is exhausted. Every later call on the
    /// same handle returns an empty page with this flag set again.
    pub end: bool,
    /// A per-entry failure. Entries resolved before the failure are still
    /// present in `entries`.
    pub error: Option<Error>,
}

impl DirPage {
    pub(crate) fn failed(error: Error) -> DirPage {
        DirPage {
            error: Some(error),
            ..DirPage::default()
        }
    }

    /// Names of the entries in this page, in listing order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|info| info.name.as_str()).collect()
    }
}

/// A tree of named files reachable by slash-separated relative paths.
///
/// Implemented by [`crate::OsDir`] over a host directory and by
/// [`crate::ZipVfs`] over a loaded archive, so anything consuming this
/// capability (the archiver included) works against either.
pub trait FileSystem {
    /// Opens a file or directory. Paths are cleaned before resolution;
    /// a path that names nothing, or that escapes the root, fails with
    /// [`Error::NotExist`].
    fn open(&self, path: &str) -> Result<Box<dyn File + '_>>;
}

/// An open file or directory handle.
///
/// Reading or seeking a directory handle fails with
/// [`Error::NotRegularFile`] (surfaced through `io::Error`); listing a
/// file handle yields a [`DirPage`] carrying [`Error::NotDirectory`].
pub trait File: io::Read + io::Seek {
    fn stat(&self) -> Result<FileInfo>;

    /// Lists the directory behind this handle.
    ///
    /// With `count == 0` the complete listing comes back in one page and
    /// the handle's position is left alone. With `count > 0` up to
    /// `count` entries come back starting at the current position, which
    /// advances by the number returned; `DirPage::end` is set when the
    /// listing runs out.
    fn readdir(&mut self, count: usize) -> DirPage;

    /// Releases the handle. Handles over in-memory content have nothing
    /// to release and always succeed.
    fn close(&mut self) -> Result<()>;
}
