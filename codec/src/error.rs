//! Error types for course data decoding.

use std::fmt;

use crate::data::{DataField, REQUIRED_FIELDS};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding a data record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Record-level wire error.
    Wire(wire::DecodeError),

    /// One positional field failed to decode.
    Field {
        field: DataField,
        source: wire::DecodeError,
    },

    /// Fewer positional fields than the format requires.
    TruncatedRecord { expected: usize, found: usize },
}

impl CodecError {
    /// Returns the positional field that failed, if the error is tied to one.
    #[must_use]
    pub const fn field(&self) -> Option<DataField> {
        match self {
            Self::Field { field, .. } => Some(*field),
            _ => None,
        }
    }

    pub(crate) fn truncated(found: usize) -> Self {
        Self::TruncatedRecord {
            expected: REQUIRED_FIELDS,
            found,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(e) => write!(f, "wire error: {e}"),
            Self::Field { field, source } => write!(f, "{field}: {source}"),
            Self::TruncatedRecord { expected, found } => {
                write!(
                    f,
                    "truncated record: need {expected} fields, have {found}"
                )
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(e) | Self::Field { source: e, .. } => Some(e),
            Self::TruncatedRecord { .. } => None,
        }
    }
}

impl From<wire::DecodeError> for CodecError {
    fn from(err: wire::DecodeError) -> Self {
        Self::Wire(err)
    }
}
