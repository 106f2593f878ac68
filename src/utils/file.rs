use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    IoError(String),
}

pub fn ensure_dir_exists(path: &Path) -> Result<(), FileError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| FileError::IoError(e.to_string()))?;
    }
    Ok(())
}
