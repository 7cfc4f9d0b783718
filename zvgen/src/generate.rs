use std::fs;
use std::path::Path;

use crate::error::Result;

/// A name usable as a Rust constant: an identifier that does not start
/// with a digit.
pub fn is_valid_const_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Renders the generated source file: a header comment naming the exact
/// invocation, then one `pub const` holding the encoded archive.
///
/// The generated file declares data only; calling code decides where the
/// loaded filesystem lives by constructing it explicitly.
pub fn render_source(var_name: &str, encoded: &str, invocation: &str) -> String {
    let mut code = String::new();
    code.push_str(&format!("// generated with `{}`\n\n", invocation));
    code.push_str("/// Base64-encoded archive of the embedded file tree.\n");
    code.push_str("///\n");
    code.push_str(&format!(
        "/// Load it with `zipvfs::ZipVfs::from_encoded({})`.\n",
        var_name
    ));
    code.push_str(&format!(
        "pub const {}: &str = \"{}\";\n",
        var_name, encoded
    ));
    code
}

/// Writes the generated source, creating parent directories as needed.
pub fn write_source(dest: &Path, code: &str) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, code)?;
    Ok(())
}
