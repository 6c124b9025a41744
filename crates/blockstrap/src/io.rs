//! File helpers

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::data::{DataError, Format};

/// Error raised while loading or saving a data file
#[derive(Debug)]
pub enum FileError {
    Io(io::Error),
    Data(DataError),
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Io(e) => write!(f, "IO error: {}", e),
            FileError::Data(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io(e) => Some(e),
            FileError::Data(e) => Some(e),
        }
    }
}

impl From<io::Error> for FileError {
    fn from(e: io::Error) -> Self {
        FileError::Io(e)
    }
}

impl From<DataError> for FileError {
    fn from(e: DataError) -> Self {
        FileError::Data(e)
    }
}

/// Read and decode a file, picking the format from its extension.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, FileError> {
    let content = fs::read_to_string(path)?;
    Ok(Format::from_path(path).decode(&content)?)
}

/// Encode `value` and write it atomically, picking the format from the extension.
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), FileError> {
    let content = Format::from_path(path).encode(value)?;
    atomic_write(path, &content)?;
    Ok(())
}

/// Write content to a file atomically using write-then-rename pattern.
///
/// The content is first written to a sibling `.<pid>.tmp` file, then renamed
/// over the target path, so an interrupted run never leaves a truncated output.
/// The temp file is removed if the rename fails.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(format!(".{}.tmp", std::process::id()));
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, content)?;
    if let Err(e) = fs::rename(temp_path, path) {
        let _ = fs::remove_file(temp_path);
        return Err(e);
    }

    Ok(())
}
