//! Serialization of a source file tree into a single archive blob.
//!
//! The traversal is a plain recursive walk over the [`FileSystem`]
//! capability: directories are listed and recursed into, files are
//! streamed into the container writer under their slash-joined path from
//! the root. The entire archive is assembled in one in-memory buffer and
//! the first error anywhere aborts the whole build; callers never see a
//! partial archive.

use std::io;

use base64::Engine;
use zip::write::SimpleFileOptions;

use crate::date;
use crate::error::Result;
use crate::fs::{File, FileInfo, FileSystem};
use crate::path;

struct Archiver<'a> {
    source: &'a dyn FileSystem,
    writer: zip::ZipWriter<io::Cursor<Vec<u8>>>,
}

impl Archiver<'_> {
    fn add_dir(&mut self, name: &str) -> Result<()> {
        let mut dir = self.source.open(name)?;
        let page = dir.readdir(0);
        if let Some(err) = page.error {
            return Err(err);
        }
        for info in &page.entries {
            let child = path::join(name, &info.name);
            if info.is_dir {
                self.add_dir(&child)?;
            } else {
                self.add_file(&child, info)?;
            }
        }
        Ok(())
    }

    fn add_file(&mut self, name: &str, info: &FileInfo) -> Result<()> {
        let mut file = self.source.open(name)?;

        let mut options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        if let Some(time) = info.modified.and_then(date::to_archive_time) {
            options = options.last_modified_time(time);
        }

        self.writer.start_file(name, options)?;
        io::copy(&mut file, &mut self.writer)?;
        file.close()?;
        Ok(())
    }
}

/// Serializes everything reachable from `root` in `source` into one
/// self-contained archive and returns its bytes.
///
/// Entry names are the paths joined from `root` (bare relative names
/// when `root` is `"."`), each carrying the source's reported
/// modification time. No directory entries are written; loading
/// re-derives the tree from the file paths. Entry order follows the
/// source's listing order and carries no meaning.
pub fn build_archive(source: &dyn FileSystem, root: &str) -> Result<Vec<u8>> {
    let mut archiver = Archiver {
        source,
        writer: zip::ZipWriter::new(io::Cursor::new(Vec::new())),
    };
    archiver.add_dir(&path::clean(root))?;
    let cursor = archiver.writer.finish()?;
    Ok(cursor.into_inner())
}

/// Like [`build_archive`], but returns standard base64 suitable for
/// embedding as a string literal in generated source. Decode it again
/// with [`ZipVfs::from_encoded`](crate::ZipVfs::from_encoded).
pub fn build_archive_string(source: &dyn FileSystem, root: &str) -> Result<String> {
    let bytes = build_archive(source, root)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}
