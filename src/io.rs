//! JSON corpus files.
//!
//! A corpus file is a JSON array of records. Reports are single objects.
//! Output is pretty-printed so reruns on the same input diff cleanly.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Read a JSON array of records.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read and `Error::Json` if it is
/// not an array of `T`.
pub fn load_corpus<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    read_json(path)
}

/// Read any JSON value.
///
/// # Errors
///
/// Returns `Error::Io` or `Error::Json`.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write `value` as pretty JSON, creating parent directories.
///
/// # Errors
///
/// Returns `Error::Io` or `Error::Json`.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
