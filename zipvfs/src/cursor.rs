use std::io;
use std::io::{Read, Seek, SeekFrom};

use crate::error::{Error, Result};
use crate::fs::{DirPage, File, FileInfo};
use crate::path;
use crate::vfs::ZipVfs;

/// A stateful listing handle over one directory of a [`ZipVfs`].
///
/// The cursor owns only its position; the sorted child list lives in the
/// filesystem's directory index. A directory's metadata snapshot
/// ([`ZipVfs::stat`]) is a separate value, so taking one never disturbs
/// an in-progress listing, and every freshly-opened cursor starts at the
/// top of the same stable order.
pub struct DirectoryCursor<'a> {
    fs: &'a ZipVfs,
    dir_path: String,
    position: usize,
}

impl<'a> DirectoryCursor<'a> {
    pub(crate) fn new(fs: &'a ZipVfs, dir_path: String) -> DirectoryCursor<'a> {
        DirectoryCursor {
            fs,
            dir_path,
            position: 0,
        }
    }
}

impl File for DirectoryCursor<'_> {
    fn stat(&self) -> Result<FileInfo> {
        Ok(FileInfo::directory(path::base(&self.dir_path)))
    }

    fn readdir(&mut self, count: usize) -> DirPage {
        let children = self.fs.dir_children(&self.dir_path);
        let mut page = DirPage::default();

        if count == 0 {
            for child in children {
                match self.fs.stat(&path::join(&self.dir_path, child)) {
                    Ok(info) => page.entries.push(info),
                    Err(err) => {
                        page.error = Some(err);
                        return page;
                    }
                }
            }
            return page;
        }

        while page.entries.len() < count {
            if self.position >= children.len() {
                page.end = true;
                return page;
            }
            match self
                .fs
                .stat(&path::join(&self.dir_path, &children[self.position]))
            {
                Ok(info) => {
                    page.entries.push(info);
                    self.position += 1;
                }
                Err(err) => {
                    page.error = Some(err);
                    return page;
                }
            }
        }
        page
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Read for DirectoryCursor<'_> {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(Error::NotRegularFile.into())
    }
}

impl Seek for DirectoryCursor<'_> {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(Error::NotRegularFile.into())
    }
}
