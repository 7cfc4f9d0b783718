//! An in-memory `FileSystem` used as an archive source in tests, plus
//! the fixture tree shared across test files.

#![allow(dead_code)]

use std::io;
use std::io::{Read, Seek, SeekFrom};

use chrono::{DateTime, TimeZone, Utc};

use zipvfs::fs::{DirPage, File, FileInfo, FileSystem};
use zipvfs::{path, Error, Result};

pub enum MemEntry {
    File {
        name: String,
        content: Vec<u8>,
        modified: DateTime<Utc>,
    },
    Dir {
        name: String,
        children: Vec<MemEntry>,
    },
    /// A file whose open always fails, for exercising build aborts.
    Broken { name: String },
}

impl MemEntry {
    fn name(&self) -> &str {
        match self {
            MemEntry::File { name, .. } => name,
            MemEntry::Dir { name, .. } => name,
            MemEntry::Broken { name } => name,
        }
    }

    fn info(&self) -> FileInfo {
        match self {
            MemEntry::File {
                name,
                content,
                modified,
            } => FileInfo {
                name: name.clone(),
                size: content.len() as u64,
                modified: Some(*modified),
                is_dir: false,
            },
            MemEntry::Dir { name, .. } => FileInfo {
                name: name.clone(),
                size: 0,
                modified: None,
                is_dir: true,
            },
            MemEntry::Broken { name } => FileInfo {
                name: name.clone(),
                size: 0,
                modified: None,
                is_dir: false,
            },
        }
    }
}

pub fn file(name: &str, content: &str, modified: DateTime<Utc>) -> MemEntry {
    MemEntry::File {
        name: name.to_string(),
        content: content.as_bytes().to_vec(),
        modified,
    }
}

pub fn dir(name: &str, children: Vec<MemEntry>) -> MemEntry {
    MemEntry::Dir {
        name: name.to_string(),
        children,
    }
}

pub fn broken_file(name: &str) -> MemEntry {
    MemEntry::Broken {
        name: name.to_string(),
    }
}

pub struct MemFs {
    root: Vec<MemEntry>,
}

impl MemFs {
    pub fn new(root: Vec<MemEntry>) -> MemFs {
        MemFs { root }
    }

    fn lookup(&self, name: &str) -> Option<Located<'_>> {
        let name = path::clean(name);
        if name == path::ROOT {
            return Some(Located::Root(&self.root));
        }
        let mut children = &self.root;
        let mut segments = name.split('/').peekable();
        while let Some(segment) = segments.next() {
            let entry = children.iter().find(|e| e.name() == segment)?;
            if segments.peek().is_none() {
                return Some(Located::Entry(entry));
            }
            match entry {
                MemEntry::Dir {
                    children: grandchildren,
                    ..
                } => children = grandchildren,
                _ => return None,
            }
        }
        None
    }
}

enum Located<'a> {
    Root(&'a Vec<MemEntry>),
    Entry(&'a MemEntry),
}

impl FileSystem for MemFs {
    fn open(&self, name: &str) -> Result<Box<dyn File + '_>> {
        let located = self.lookup(name).ok_or(Error::NotExist)?;
        let info = located_info(&located);
        match located {
            Located::Root(children)
            | Located::Entry(MemEntry::Dir { children, .. }) => Ok(Box::new(MemDirHandle {
                info,
                children: children.iter().map(MemEntry::info).collect(),
                position: 0,
            })),
            Located::Entry(MemEntry::File { content, .. }) => Ok(Box::new(MemFileHandle {
                info,
                content: io::Cursor::new(content.clone()),
            })),
            Located::Entry(MemEntry::Broken { name }) => Err(Error::IoError(io::Error::new(
                io::ErrorKind::Other,
                format!("injected failure: {}", name),
            ))),
        }
    }
}

fn located_info(located: &Located<'_>) -> FileInfo {
    match located {
        Located::Root(_) => FileInfo {
            name: path::ROOT.to_string(),
            size: 0,
            modified: None,
            is_dir: true,
        },
        Located::Entry(entry) => entry.info(),
    }
}

struct MemFileHandle {
    info: FileInfo,
    content: io::Cursor<Vec<u8>>,
}

impl Read for MemFileHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.content.read(buf)
    }
}

impl Seek for MemFileHandle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.content.seek(pos)
    }
}

impl File for MemFileHandle {
    fn stat(&self) -> Result<FileInfo> {
        Ok(self.info.clone())
    }

    fn readdir(&mut self, _count: usize) -> DirPage {
        DirPage {
            error: Some(Error::NotDirectory),
            ..DirPage::default()
        }
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

struct MemDirHandle {
    info: FileInfo,
    children: Vec<FileInfo>,
    position: usize,
}

impl File for MemDirHandle {
    fn stat(&self) -> Result<FileInfo> {
        Ok(self.info.clone())
    }

    fn readdir(&mut self, count: usize) -> DirPage {
        if count == 0 {
            return DirPage {
                entries: self.children.clone(),
                ..DirPage::default()
            };
        }
        let mut page = DirPage::default();
        while page.entries.len() < count {
            if self.position >= self.children.len() {
                page.end = true;
                return page;
            }
            page.entries.push(self.children[self.position].clone());
            self.position += 1;
        }
        page
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Read for MemDirHandle {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(Error::NotRegularFile.into())
    }
}

impl Seek for MemDirHandle {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(Error::NotRegularFile.into())
    }
}

pub fn feb27() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2014, 2, 27, 0, 0, 0).unwrap()
}

pub fn feb28() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2014, 2, 28, 0, 0, 0).unwrap()
}

/// The fixture tree used throughout: a root file, a directory with both
/// nested directories and files, and a directory whose files carry two
/// different modification times.
pub fn fake_tree() -> MemFs {
    MemFs::new(vec![
        file("foo.txt", "foo", feb28()),
        dir(
            "1",
            vec![
                dir("1", vec![file("foo.txt", "1/1/foo", feb28())]),
                dir("2", vec![file("foo.txt", "1/2/foo", feb28())]),
                file("3.txt", "1/3", feb28()),
                file("4.txt", "1/4", feb28()),
                file("5.txt", "1/5", feb28()),
            ],
        ),
        dir(
            "2",
            vec![
                file("feb28.txt", "2/feb28", feb28()),
                file("feb27.txt", "2/feb27", feb27()),
            ],
        ),
    ])
}
