//! Reconstruction of a read-only filesystem from archive bytes.
//!
//! Loading happens exactly once: the container is parsed, every file's
//! content is extracted into memory, and the directory tree is re-derived
//! from the file paths alone. The resulting [`ZipVfs`] never touches the
//! container again, so a load that succeeds can never hit a container
//! error while serving lookups, and shared references to it can serve
//! any number of callers at once.

use std::collections::{BTreeSet, HashMap};
use std::io;
use std::io::Read;
use std::sync::Arc;

use base64::Engine;
use chrono::{DateTime, Utc};

use crate::cursor::DirectoryCursor;
use crate::date;
use crate::error::{Error, Result};
use crate::file::VirtualFile;
use crate::fs::{File, FileInfo, FileSystem};
use crate::path;
use crate::path::ROOT;

/// One archived file as held by the in-memory index.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    /// Cleaned slash-separated path relative to the archive root.
    pub path: String,
    /// Extracted content, shared into every open handle.
    pub content: Arc<[u8]>,
    /// Modification time recorded when the archive was built, if the
    /// container carried one.
    pub modified: Option<DateTime<Utc>>,
}

impl ArchiveEntry {
    fn file_info(&self) -> FileInfo {
        FileInfo {
            name: path::base(&self.path).to_string(),
            size: self.content.len() as u64,
            modified: self.modified,
            is_dir: false,
        }
    }
}

/// A read-only, in-memory filesystem reconstructed from archive bytes.
///
/// Files are indexed by cleaned path. Directories are not read from the
/// container at all: every ancestor of every file is inferred, so the
/// directory index holds exactly the directories that lead to at least
/// one file, the root included, and nothing else.
#[derive(Debug)]
pub struct ZipVfs {
    files: HashMap<String, ArchiveEntry>,
    dirs: HashMap<String, Vec<String>>,
}

impl ZipVfs {
    /// Parses raw archive bytes into a virtual filesystem.
    ///
    /// A container that cannot be parsed, or that carries an entry name
    /// escaping the archive root, fails with [`Error::CorruptArchive`];
    /// a well-formed container whose content cannot be extracted fails
    /// with [`Error::IoError`]. Duplicate paths resolve to the entry
    /// appearing last.
    pub fn from_bytes<B: AsRef<[u8]>>(bytes: B) -> Result<ZipVfs> {
        let mut archive = zip::ZipArchive::new(io::Cursor::new(bytes.as_ref()))?;

        let mut files = HashMap::new();
        let mut dirs: HashMap<String, BTreeSet<String>> = HashMap::new();

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            if entry.is_dir() {
                // Directory markers are never trusted; the tree is
                // re-derived from file paths alone.
                continue;
            }

            let name = normalize_entry_name(entry.name())?;
            let mut content = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut content)?;
            let modified = entry.last_modified().and_then(date::from_archive_time);

            record_ancestors(&mut dirs, &name);
            files.insert(
                name.clone(),
                ArchiveEntry {
                    path: name,
                    content: content.into(),
                    modified,
                },
            );
        }

        let dirs = dirs
            .into_iter()
            .map(|(dir, children)| (dir, children.into_iter().collect()))
            .collect();

        Ok(ZipVfs { files, dirs })
    }

    /// Parses the base64 form produced by
    /// [`build_archive_string`](crate::build_archive_string).
    pub fn from_encoded(encoded: &str) -> Result<ZipVfs> {
        let bytes = base64::engine::general_purpose::STANDARD.decode(encoded.trim())?;
        ZipVfs::from_bytes(bytes)
    }

    /// Opens a file or directory by path.
    ///
    /// A file handle carries the full content; a directory handle is a
    /// fresh cursor positioned at the start of the listing. Paths that
    /// resolve to nothing in the archive fail with [`Error::NotExist`].
    pub fn open(&self, name: &str) -> Result<Box<dyn File + '_>> {
        let name = path::clean(name);
        if let Some(entry) = self.files.get(&name) {
            return Ok(Box::new(VirtualFile::new(
                entry.file_info(),
                Arc::clone(&entry.content),
            )));
        }
        if self.dirs.contains_key(&name) {
            return Ok(Box::new(DirectoryCursor::new(self, name)));
        }
        Err(Error::NotExist)
    }

    /// Resolves a path to its metadata without opening a handle.
    ///
    /// Files report the size and modification time captured when the
    /// archive was built. Directories exist only by inference, so their
    /// metadata is synthetic: zero size, no modification time, name
    /// equal to the final path segment.
    pub fn stat(&self, name: &str) -> Result<FileInfo> {
        let name = path::clean(name);
        if let Some(entry) = self.files.get(&name) {
            return Ok(entry.file_info());
        }
        if self.dirs.contains_key(&name) {
            return Ok(FileInfo::directory(path::base(&name)));
        }
        Err(Error::NotExist)
    }

    /// Number of files in the archive.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub(crate) fn dir_children(&self, dir: &str) -> &[String] {
        self.dirs.get(dir).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl FileSystem for ZipVfs {
    fn open(&self, path: &str) -> Result<Box<dyn File + '_>> {
        ZipVfs::open(self, path)
    }
}

/// Normalizes a container entry name into an index key. Entry names are
/// root-relative by contract; a name that resolves to the root itself or
/// climbs out of it marks the container as structurally invalid.
fn normalize_entry_name(raw: &str) -> Result<String> {
    let name = path::clean(raw.trim_start_matches('/'));
    if name == ROOT || name == ".." || name.starts_with("../") {
        return Err(Error::CorruptArchive(format!(
            "entry name escapes the archive root: {:?}",
            raw
        )));
    }
    Ok(name)
}

/// Records the `(parent, child)` edge for every ancestor of `name`,
/// walking upward until the root. The first recording of any edge walked
/// all the way up, so the climb stops as soon as it meets an edge that is
/// already known; across a whole load each edge is therefore recorded
/// exactly once.
fn record_ancestors(dirs: &mut HashMap<String, BTreeSet<String>>, name: &str) {
    let mut current = name;
    while current != ROOT {
        let (parent, child) = path::split(current);
        if !dirs
            .entry(parent.to_string())
            .or_default()
            .insert(child.to_string())
        {
            break;
        }
        current = parent;
    }
}
