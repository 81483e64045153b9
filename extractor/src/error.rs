//! Error types for the exercise extraction pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`ParseError`] - Malformed input text (JSON or localization wrapper)
//! - [`LoadError`] - Reading an input file
//! - [`TransformError`] - Decoding an individual exercise record
//! - [`WriteError`] - Serializing or writing an output file
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Parse Errors
// =============================================================================

/// Errors while parsing the content of an input file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Content is not valid JSON (or has the wrong shape).
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Content is not valid UTF-8.
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A required top-level key is absent.
    #[error("Missing required key '{0}'")]
    MissingKey(&'static str),

    /// A top-level key is present but does not hold an array.
    #[error("Key '{0}' is not an array")]
    NotAnArray(&'static str),
}

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while loading an input file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other I/O failure.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its content could not be parsed.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    /// Map an I/O error for `path`, singling out a missing file.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound(path)
        } else {
            LoadError::Io { path, source }
        }
    }
}

// =============================================================================
// Transform Errors
// =============================================================================

/// Errors while resolving a raw exercise record.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A record does not have the expected field types.
    #[error("Invalid exercise record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while producing the output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// Serialized CSV was not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Writing the file failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::transform::pipeline::run`].
/// Every variant is fatal: the run aborts on the first one.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Loading an input failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A record could not be resolved.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Writing an output failed.
    #[error(transparent)]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for output operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
