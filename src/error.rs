//! Error types for the task processor
//!
//! Validation failures and I/O failures are kept in separate enums so that
//! callers can tell a bad document apart from a bad file system.

use serde_json::Number;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a successful run
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for any validation, parse, or I/O failure
pub const EXIT_FAILURE: u8 = 1;

/// The first schema violation found in an input document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Input must be a JSON array, got {found}")]
    NotAnArray { found: &'static str },

    #[error("Item at index {index} is not an object, got {found}")]
    NotAnObject { index: usize, found: &'static str },

    #[error("Item at index {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Item at index {index}: '{field}' must be {expected}, got {found}")]
    InvalidType {
        index: usize,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Item at index {index}: 'name' must be a non-empty string")]
    EmptyName { index: usize },

    #[error("Duplicate id found: {id}")]
    DuplicateId { id: Number },
}

impl ValidationError {
    /// Position of the offending item, if the error concerns a single item
    pub fn index(&self) -> Option<usize> {
        match self {
            ValidationError::NotAnArray { .. } | ValidationError::DuplicateId { .. } => None,
            ValidationError::NotAnObject { index, .. }
            | ValidationError::MissingField { index, .. }
            | ValidationError::InvalidType { index, .. }
            | ValidationError::EmptyName { index } => Some(*index),
        }
    }
}

/// Any failure that aborts a processing run
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Permission denied reading file: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Error reading input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in input file {}: {source}", .path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Error serializing output: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Permission denied writing to file: {}", .path.display())]
    WritePermissionDenied { path: PathBuf },

    #[error("Error writing output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    /// Process exit code for this failure
    ///
    /// Every failure maps to the same code; the message carries the detail.
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}
