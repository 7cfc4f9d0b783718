//! A [`FileSystem`] over a directory of the host filesystem, used as the
//! archive source when packing real files.

use std::fs;
use std::io;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::fs::{DirPage, File, FileInfo, FileSystem};
use crate::path;

/// The host directory serving as the tree root. Paths handed to
/// [`open`](FileSystem::open) are cleaned and resolved beneath it;
/// rooted paths and paths that climb out of the tree fail with
/// [`Error::NotExist`] without touching the host filesystem.
pub struct OsDir {
    root: PathBuf,
}

impl OsDir {
    pub fn new<P: AsRef<Path>>(root: P) -> OsDir {
        OsDir {
            root: PathBuf::from(root.as_ref()),
        }
    }

    fn resolve(&self, name: &str) -> Result<(String, PathBuf)> {
        let name = path::clean(name);
        if name.starts_with('/') || name == ".." || name.starts_with("../") {
            return Err(Error::NotExist);
        }
        let full = if name == path::ROOT {
            self.root.clone()
        } else {
            self.root.join(&name)
        };
        Ok((name, full))
    }
}

impl FileSystem for OsDir {
    fn open(&self, name: &str) -> Result<Box<dyn File + '_>> {
        let (name, full) = self.resolve(name)?;
        let metadata = match fs::metadata(&full) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(Error::NotExist),
            Err(err) => return Err(Error::IoError(err)),
        };

        if metadata.is_dir() {
            Ok(Box::new(OsDirHandle {
                info: host_file_info(path::base(&name), &metadata),
                dir_path: full,
                listing: None,
                position: 0,
            }))
        } else {
            let file = fs::File::open(&full)?;
            Ok(Box::new(OsFileHandle {
                info: host_file_info(path::base(&name), &metadata),
                file,
            }))
        }
    }
}

fn host_file_info(name: &str, metadata: &fs::Metadata) -> FileInfo {
    FileInfo {
        name: name.to_string(),
        size: if metadata.is_dir() { 0 } else { metadata.len() },
        modified: metadata.modified().ok().map(DateTime::<Utc>::from),
        is_dir: metadata.is_dir(),
    }
}

struct OsFileHandle {
    info: FileInfo,
    file: fs::File,
}

impl Read for OsFileHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Seek for OsFileHandle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

impl File for OsFileHandle {
    fn stat(&self) -> Result<FileInfo> {
        Ok(self.info.clone())
    }

    fn readdir(&mut self, _count: usize) -> DirPage {
        DirPage::failed(Error::NotDirectory)
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

struct OsDirHandle {
    info: FileInfo,
    dir_path: PathBuf,
    listing: Option<Vec<FileInfo>>,
    position: usize,
}

impl OsDirHandle {
    fn load_listing(dir_path: &Path) -> io::Result<Vec<FileInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir_path)? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            let name = entry.file_name().to_string_lossy().into_owned();
            entries.push(host_file_info(&name, &metadata));
        }
        // Host listing order is arbitrary; sort so repeated archive
        // builds see the same sequence.
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

impl File for OsDirHandle {
    fn stat(&self) -> Result<FileInfo> {
        Ok(self.info.clone())
    }

    fn readdir(&mut self, count: usize) -> DirPage {
        if count == 0 {
            return match Self::load_listing(&self.dir_path) {
                Ok(entries) => DirPage {
                    entries,
                    ..DirPage::default()
                },
                Err(err) => DirPage::failed(Error::IoError(err)),
            };
        }

        if self.listing.is_none() {
            match Self::load_listing(&self.dir_path) {
                Ok(entries) => self.listing = Some(entries),
                Err(err) => return DirPage::failed(Error::IoError(err)),
            }
        }
        let listing = self.listing.as_deref().unwrap_or(&[]);

        let mut page = DirPage::default();
        while page.entries.len() < count {
            if self.position >= listing.len() {
                page.end = true;
                return page;
            }
            page.entries.push(listing[self.position].clone());
            self.position += 1;
        }
        page
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Read for OsDirHandle {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(Error::NotRegularFile.into())
    }
}

impl Seek for OsDirHandle {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(Error::NotRegularFile.into())
    }
}
