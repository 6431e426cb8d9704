//! Error types for program encoding, decoding and storage.

use std::path::PathBuf;

use cloudseed_stereo::StereoError;
use thiserror::Error;

/// Errors that can occur while encoding, decoding, loading or applying a program.
#[derive(Debug, Error)]
pub enum PresetError {
    /// The document is not a JSON object of numbers.
    #[error("failed to decode program: {0}")]
    Decode(#[from] serde_json::Error),

    /// Serialization failed.
    #[error("failed to encode program: {0}")]
    Encode(#[source] serde_json::Error),

    /// A value cannot be represented in JSON.
    #[error("parameter '{name}' has non-finite value {value}")]
    NonFinite {
        /// Parameter name.
        name: String,
        /// The offending value.
        value: f64,
    },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Program not found
    #[error("program not found: {0}")]
    ProgramNotFound(String),

    /// The reverb refused a value while the program was applied.
    #[error("failed to apply program: {0}")]
    Apply(#[from] StereoError),
}

impl PresetError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PresetError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PresetError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PresetError::CreateDir {
            path: path.into(),
            source,
        }
    }
}
