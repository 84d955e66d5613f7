//! Error types for golden reference generation

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for golden reference operations
pub type Result<T> = std::result::Result<T, GoldenError>;

/// Errors that can occur while loading tables, evaluating stages or
/// writing snapshots
#[derive(Debug, Error)]
pub enum GoldenError {
    /// A memory-image line is not a valid hex word
    #[error("{}:{line}: invalid hex word {token:?}", path.display())]
    Parse {
        /// File being read
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Offending token, trimmed
        token: String,
    },

    /// A vector or table length does not match what a stage expects
    #[error("Length mismatch in {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Stage or table that detected the mismatch
        context: String,
        /// Required length
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// I/O error on an input table or output snapshot
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Fixed-point configuration outside what the datapath supports
    #[error("Invalid fixed-point configuration: {reason}")]
    InvalidConfig {
        /// Reason for rejection
        reason: String,
    },
}

/// Failure category, for callers that only branch on the kind of error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`GoldenError::Parse`]
    Parse,
    /// See [`GoldenError::LengthMismatch`]
    LengthMismatch,
    /// See [`GoldenError::Io`]
    Io,
    /// See [`GoldenError::InvalidConfig`]
    InvalidConfig,
}

impl GoldenError {
    /// Create a parse error
    pub fn parse(path: impl Into<PathBuf>, line: usize, token: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            token: token.into(),
        }
    }

    /// Create a length mismatch error
    pub fn length_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Create an I/O error bound to a path
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Failure category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::Parse,
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::Io { .. } => ErrorKind::Io,
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }
}

/// Fail with [`GoldenError::LengthMismatch`] unless `actual == expected`.
pub(crate) fn ensure_len(context: &str, expected: usize, actual: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(GoldenError::length_mismatch(context, expected, actual))
    }
}
