//! Error handling for Mdocx operations
//!
//! The normalization core is total and never fails; errors exist only
//! at the edges - configuration loading, file handling, and the pandoc
//! bridge.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone)]
pub enum ConversionError {
    /// The pandoc binary could not be found or executed
    PandocNotFound { binary: String },
    /// Pandoc ran but reported failure
    PandocFailed {
        status: Option<i32>,
        stderr: String,
    },
    /// An external command exceeded its deadline
    Timeout { seconds: u64 },
    /// Invalid input
    InvalidInput { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::PandocNotFound { binary } => {
                write!(f, "Pandoc binary '{}' is not installed or not in PATH", binary)
            }
            ConversionError::PandocFailed { status, stderr } => {
                if let Some(code) = status {
                    write!(f, "Pandoc failed with exit code {}: {}", code, stderr.trim())
                } else {
                    write!(f, "Pandoc was terminated by a signal: {}", stderr.trim())
                }
            }
            ConversionError::Timeout { seconds } => {
                write!(f, "External command timed out after {}s", seconds)
            }
            ConversionError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// Convenience constructors for errors
impl ConversionError {
    pub fn pandoc_not_found(binary: impl Into<String>) -> Self {
        ConversionError::PandocNotFound {
            binary: binary.into(),
        }
    }

    pub fn pandoc_failed(status: Option<i32>, stderr: impl Into<String>) -> Self {
        ConversionError::PandocFailed {
            status,
            stderr: stderr.into(),
        }
    }

    pub fn timeout(seconds: u64) -> Self {
        ConversionError::Timeout { seconds }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
        }
    }
}
