use std::io;
use std::io::{Read, Seek, SeekFrom};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::fs::{DirPage, File, FileInfo};

/// An open handle to one archived file.
///
/// The content is the buffer extracted at load time, shared with the
/// owning [`crate::ZipVfs`], so opening is cheap and every handle reads
/// and seeks independently of every other.
#[derive(Debug, Clone)]
pub struct VirtualFile {
    info: FileInfo,
    content: io::Cursor<Arc<[u8]>>,
}

impl VirtualFile {
    pub(crate) fn new(info: FileInfo, content: Arc<[u8]>) -> VirtualFile {
        VirtualFile {
            info,
            content: io::Cursor::new(content),
        }
    }
}

impl Read for VirtualFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.content.read(buf)
    }
}

impl Seek for VirtualFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.content.seek(pos)
    }
}

impl File for VirtualFile {
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
