//! Error types for data file loading.

use thiserror::Error;

/// Errors that can occur when loading configuration or definition data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// File parsed but holds a value the game cannot use.
    #[error("Invalid value in '{path}': {details}")]
    InvalidValue { path: String, details: String },
}

/// Read a whole data file, mapping io failures onto [`DataLoadError`].
pub fn read_data_file(path: &std::path::Path) -> Result<String, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound(path.display().to_string()));
    }
    std::fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

/// Parse RON text into `T`, tagging failures with the source path.
pub fn parse_ron<T: serde::de::DeserializeOwned>(
    path: &str,
    contents: &str,
) -> Result<T, DataLoadError> {
    ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
        path: path.to_string(),
        details: e.to_string(),
    })
}
