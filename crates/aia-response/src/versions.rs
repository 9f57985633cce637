//! Picking the newest response table.
//!
//! Published tables are named `aia_V<version>_<stamp>_response_table.txt`,
//! e.g. `aia_V8_20171210_050627_response_table.txt`.

use aia_core::errors::{Error, Result};
use std::path::{Path, PathBuf};

const PREFIX: &str = "aia_V";
const SUFFIX: &str = "_response_table.txt";

/// Return `true` if `name` looks like a versioned response table.
pub fn is_response_table(name: &str) -> bool {
    name.starts_with(PREFIX) && name.ends_with(SUFFIX) && name.len() > PREFIX.len() + SUFFIX.len()
}

/// The version number of a response table name, if it has one.
pub fn table_version(name: &str) -> Option<u32> {
    if !is_response_table(name) {
        return None;
    }
    let digits: String = name[PREFIX.len()..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// The newest response table among `names`.
///
/// Ordered by version number, then by name, so `aia_V10_…` beats `aia_V9_…`.
/// Names that are not response tables are ignored.
///
/// # Errors
/// Returns `Error::Runtime` if no name qualifies.
pub fn latest_table_name<S: AsRef<str>>(names: &[S]) -> Result<&str> {
    names
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|name| is_response_table(name))
        .max_by(|a, b| {
            table_version(a)
                .cmp(&table_version(b))
                .then_with(|| a.cmp(b))
        })
        .ok_or_else(|| Error::Runtime("no aia_V*_response_table.txt candidates".into()))
}

/// The newest response table in a local directory.
///
/// # Errors
/// `Error::Io` if the directory cannot be listed, `Error::Runtime` if it
/// holds no response table.
pub fn latest_table_in_dir(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir)
        .map_err(|e| Error::Io(format!("{}: {e}", dir.display())))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }

    let latest = latest_table_name(&names)
        .map_err(|_| Error::Runtime(format!("no response table in {}", dir.display())))?;
    log::info!("using response table {latest}");
    Ok(dir.join(latest))
}
