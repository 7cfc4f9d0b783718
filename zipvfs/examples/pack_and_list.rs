//! Packs a directory into an archive string, loads it back, and prints
//! the reconstructed tree.
//!
//! Usage: `cargo run --example pack_and_list -- <directory>`

use std::env;

use zipvfs::{build_archive_string, File, OsDir, ZipVfs};

fn list_children(
    vfs: &ZipVfs,
    dir: &str,
    depth: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut handle = vfs.open(dir)?;
    let page = handle.readdir(0);
    if let Some(err) = page.error {
        return Err(err.into());
    }

    let indent = "  ".repeat(depth + 1);
    for info in &page.entries {
        if info.is_dir {
            println!("{}{}/", indent, info.name);
            list_children(vfs, &format!("{}/{}", dir, info.name), depth + 1)?;
        } else {
            println!("{}{} ({} bytes)", indent, info.name, info.size);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = env::args().nth(1).unwrap_or_else(|| "src".to_string());

    println!("Packing {}", source);
    let encoded = build_archive_string(&OsDir::new(&source), ".")?;
    println!("Encoded archive is {} characters", encoded.len());

    let vfs = ZipVfs::from_encoded(&encoded)?;
    println!("Loaded {} files:", vfs.len());
    list_children(&vfs, ".", 0)?;
    Ok(())
}
