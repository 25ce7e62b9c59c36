//! Error types for course records.

use std::fmt;

/// Result type for course operations.
pub type CourseResult<T> = Result<T, CourseError>;

/// Errors that can occur while parsing a course record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    /// The record is shorter than its trailing checksum.
    InvalidChecksumLength { actual: usize, required: usize },

    /// The trailing checksum is not plain ASCII.
    MalformedChecksum,

    /// A query value decodes to bytes that are not UTF-8.
    InvalidUtf8 { name: String },

    /// The trailing checksum does not match the record.
    ChecksumMismatch { expected: String, found: String },

    /// Record-level wire error.
    Wire(wire::DecodeError),

    /// A metadata value failed to parse.
    Field {
        name: &'static str,
        source: wire::DecodeError,
    },

    /// The `data` value failed to decode.
    Data(codec::CodecError),
}

impl fmt::Display for CourseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChecksumLength { actual, required } => {
                write!(
                    f,
                    "record too short: {actual} bytes, need at least {required}"
                )
            }
            Self::MalformedChecksum => write!(f, "checksum is not ASCII"),
            Self::InvalidUtf8 { name } => write!(f, "{name}: value is not valid UTF-8"),
            Self::ChecksumMismatch { expected, found } => {
                write!(f, "checksum mismatch: expected {expected}, found {found}")
            }
            Self::Wire(e) => write!(f, "wire error: {e}"),
            Self::Field { name, source } => write!(f, "{name}: {source}"),
            Self::Data(e) => write!(f, "data: {e}"),
        }
    }
}

impl std::error::Error for CourseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(e) | Self::Field { source: e, .. } => Some(e),
            Self::Data(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wire::DecodeError> for CourseError {
    fn from(err: wire::DecodeError) -> Self {
        Self::Wire(err)
    }
}

impl From<codec::CodecError> for CourseError {
    fn from(err: codec::CodecError) -> Self {
        Self::Data(err)
    }
}
