use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the spotstat workspace.
///
/// This covers malformed inputs to the change-interval pipeline, loader I/O and
/// parse failures, and the opt-in rejection of out-of-order timestamps.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SpotstatError {
    /// Invalid input argument (malformed series, duplicate column, unknown label).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Reading an external data file failed.
    #[error("i/o error on {path}: {msg}")]
    Io {
        /// Path of the file being read.
        path: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A referenced resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. `file "prices.csv.zip"`.
        what: String,
    },

    /// A cell of the input dataset could not be parsed.
    #[error("parse error at line {line}, column {column}: {msg}")]
    Parse {
        /// 1-based line number in the source file.
        line: u64,
        /// Header name of the offending column.
        column: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Issues with the shape of the data (missing header, empty archive, export failure).
    #[error("data issue: {0}")]
    Data(String),

    /// A series produced a negative inter-arrival time and the active policy rejects it.
    #[error("negative interval in series {series} at position {position}")]
    NegativeInterval {
        /// Name of the series that carried out-of-order timestamps.
        series: String,
        /// Position of the offending interval within the change-event sequence.
        position: usize,
    },
}

impl SpotstatError {
    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build an `Io` error for a path and message.
    pub fn io(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Parse` error.
    pub fn parse(line: u64, column: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            column: column.into(),
            msg: msg.into(),
        }
    }

    /// Returns true if the error comes from reading or decoding external input
    /// rather than from the computation itself.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::NotFound { .. } | Self::Parse { .. } | Self::Data(_)
        )
    }
}
