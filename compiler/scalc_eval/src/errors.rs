//! Runtime errors and their constructors.
//!
//! Evaluation stops at the first error; the failing leaf's error reaches
//! the caller unchanged.

use std::io;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum RuntimeError {
    #[error("source '{source_name}' not found")]
    SourceNotFound { source_name: String },
    /// `line_number` is 1-based.
    #[error("invalid integer '{line}' in source '{source_name}' at line {line_number}")]
    InvalidInteger {
        source_name: String,
        line: String,
        line_number: usize,
    },
    #[error("failed to read source '{source_name}': {message}")]
    SourceRead {
        source_name: String,
        message: String,
    },
}

#[cold]
pub fn source_not_found(source_name: &str) -> RuntimeError {
    RuntimeError::SourceNotFound {
        source_name: source_name.to_string(),
    }
}

#[cold]
pub fn invalid_integer(source_name: &str, line: &str, line_number: usize) -> RuntimeError {
    RuntimeError::InvalidInteger {
        source_name: source_name.to_string(),
        line: line.to_string(),
        line_number,
    }
}

#[cold]
pub fn source_read(source_name: &str, err: &io::Error) -> RuntimeError {
    RuntimeError::SourceRead {
        source_name: source_name.to_string(),
        message: err.to_string(),
    }
}
