extern crate zvgen;

use std::env;
use std::path::Path;

use zipvfs::{build_archive_string, OsDir, ZipVfs};
use zvgen::error::Error;
use zvgen::generate;

fn main() -> Result<(), Error> {
    let matches = zvgen::cli::parse_flags();

    zvgen::utils::initialize_debug_from_args(&matches);

    let source = matches
        .value_of("SOURCE")
        .ok_or_else(|| Error::CliInputError("Source directory is required.".to_string()))?;
    let output = matches
        .value_of("OUTPUT")
        .ok_or_else(|| Error::CliInputError("Output file is required.".to_string()))?;
    let var_name = matches.value_of("var").unwrap_or("FILE_SYSTEM");

    if !generate::is_valid_const_name(var_name) {
        return Err(Error::CliInputError(format!(
            "Invalid constant name: {}",
            var_name
        )));
    }

    let encoded = build_archive_string(&OsDir::new(source), ".")?;
    zvgen::debug_eprintln!("Encoded archive is {} characters", encoded.len());

    let vfs = ZipVfs::from_encoded(&encoded)?;

    let invocation: Vec<String> = env::args().collect();
    let code = generate::render_source(var_name, &encoded, &invocation.join(" "));
    generate::write_source(Path::new(output), &code)?;

    println!("Packed {} files from {}", vfs.len(), source);
    println!("Wrote {}", output);
    Ok(())
}
