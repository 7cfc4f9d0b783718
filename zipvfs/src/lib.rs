//! Embed a directory of static assets inside a compiled program.
//!
//! zipvfs serializes a tree of named files into a single self-contained
//! archive blob, optionally base64-encoded so a generator can paste it
//! into source as a string literal, and reconstructs a read-only,
//! in-memory virtual filesystem from that blob at startup. Assets ship
//! inside the binary itself; no separate deployment step.
//!
//! Both sides of the pipeline speak the same capability: the
//! [`FileSystem`] trait (open a path, get a [`File`] handle that can be
//! statted, read, seeked, and listed). [`OsDir`] implements it over a
//! host directory for packing, and [`ZipVfs`] implements it over a
//! loaded archive for serving — so a loaded filesystem can even be
//! packed again.
//!
//! ## Packing at build time
//!
//! ```rust,no_run
//! use zipvfs::{build_archive_string, OsDir};
//!
//! fn main() -> zipvfs::Result<()> {
//!     let encoded = build_archive_string(&OsDir::new("./assets"), ".")?;
//!     println!("{}", encoded);
//!     Ok(())
//! }
//! ```
//!
//! The `zvgen` companion tool wraps this step and writes the encoded
//! string into a generated Rust source file.
//!
//! ## Serving embedded assets
//!
//! ```rust,no_run
//! use std::io::Read;
//!
//! use zipvfs::ZipVfs;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let vfs = ZipVfs::from_encoded("UEsFBgAAAAAAAAAAAAAAAAAAAAAAAA==")?;
//!
//!     let mut contents = String::new();
//!     vfs.open("index.html")?.read_to_string(&mut contents)?;
//!     Ok(())
//! }
//! ```
//!
//! The virtual filesystem is immutable once loaded: `open` and `stat`
//! take `&self` and any number of threads may call them at once. Only an
//! individual directory listing cursor carries mutable state, and each
//! `open` of a directory hands out a fresh one.

pub mod archive;
pub mod cursor;
mod date;
pub mod error;
pub mod file;
pub mod fs;
pub mod osdir;
pub mod path;
pub mod vfs;

pub use archive::{build_archive, build_archive_string};
pub use cursor::DirectoryCursor;
pub use error::{Error, Result};
pub use file::VirtualFile;
pub use fs::{DirPage, File, FileInfo, FileSystem};
pub use osdir::OsDir;
pub use path::ROOT;
pub use vfs::{ArchiveEntry, ZipVfs};
