//! WorldBirds Converter Library
//!
//! A Rust library for converting bird observation records exported from the
//! WorldBirds citizen-science platform into the CSV import format accepted
//! by eBird.
//!
//! This library provides tools for:
//! - Parsing WorldBirds exports with proper metadata/data section handling
//! - Loading species and location reference tables for O(1) lookups
//! - Mapping species and location names to their eBird equivalents
//! - Reformatting dates, times, counts, and free-text fields
//! - Writing quoted, comma-separated eBird import files
//! - Strict and best-effort failure policies with per-record diagnostics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod export_reader;
        pub mod file_converter;
        pub mod record_converter;
        pub mod reference_registry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ConvertedRecord, EbirdRecord, SourceRecord};
pub use config::{Config, ConvertMode};

/// Result type alias for the WorldBirds converter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for WorldBirds conversion operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error in a reference table
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Structural error in a WorldBirds export file
    #[error("WorldBirds format error in file '{file}': {message}")]
    ExportFormat { file: String, message: String },

    /// Per-record conversion error, identified by the record's row number
    #[error("record {row}: {message}")]
    RecordFormat { row: String, message: String },

    /// Reference registry error
    #[error("Reference registry error: {message}")]
    Registry { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an export format error
    pub fn export_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExportFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a per-record format error
    pub fn record_format(row: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RecordFormat {
            row: row.into(),
            message: message.into(),
        }
    }

    /// Create a reference registry error
    pub fn registry(message: impl Into<String>) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
