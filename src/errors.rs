// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepclosureError {
    #[error("file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no declarations found")]
    EmptyInput,

    #[error("invalid line format: {line}")]
    InvalidLineFormat { line_number: usize, line: String },

    #[error("library '{library}' declared again on line {line_number}")]
    DuplicateDeclaration { library: String, line_number: usize },

    #[error("library not declared: {0}")]
    LibraryNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DepclosureError {
    /// Short tip shown under the error message by the CLI.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            DepclosureError::FileNotFound { .. } => {
                Some("make sure the file exists and the path is correct")
            }
            DepclosureError::EmptyInput => {
                Some("the file should contain at least one dependency declaration")
            }
            DepclosureError::InvalidLineFormat { .. } => {
                Some("each line should follow the format: \"<library> depends on <dependencies>\"")
            }
            DepclosureError::DuplicateDeclaration { .. } => Some(
                "each library may be declared once; set [parse].redeclaration = \"overwrite\" to allow it",
            ),
            DepclosureError::LibraryNotFound(_) => {
                Some("--library only accepts names that appear on the left of \"depends on\"")
            }
            DepclosureError::ConfigError(_) | DepclosureError::TomlError(_) => {
                Some("check the file passed with --config")
            }
            DepclosureError::IoError(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DepclosureError>;
