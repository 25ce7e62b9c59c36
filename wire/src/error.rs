//! Error types for delimited text decoding.

use std::fmt;

use crate::format::FormatTag;

/// Result type for wire decoding.
pub type WireResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding one delimited field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// A numeric sub-field failed to parse.
    MalformedNumber { field: &'static str, raw: String },

    /// Escaped text has a `#` that does not start a known escape.
    UnescapeFailure { raw: String },

    /// A command has fewer sub-fields than its kind requires.
    TruncatedCommand {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    /// A delta-decoded position falls outside the coordinate range.
    CoordinateOverflow { command: &'static str },

    /// A polyline has an odd number of coordinate values.
    OddPolylineFields { count: usize },

    /// The data format tag is not one this codec knows.
    UnknownFormat { tag: String },

    /// The data format tag is known but has no layer grammar.
    UnsupportedFormat { tag: FormatTag },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Specific decode limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    RecordBytes,
    CommandsPerField,
    PolylinePoints,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedNumber { field, raw } => {
                write!(f, "malformed {field}: {raw:?} is not a number")
            }
            Self::UnescapeFailure { raw } => {
                write!(f, "invalid escape sequence in {raw:?}")
            }
            Self::TruncatedCommand {
                command,
                expected,
                found,
            } => {
                write!(
                    f,
                    "truncated {command} command: need {expected} sub-fields, have {found}"
                )
            }
            Self::CoordinateOverflow { command } => {
                write!(f, "{command} position is out of coordinate range")
            }
            Self::OddPolylineFields { count } => {
                write!(f, "polyline has an odd number of values: {count}")
            }
            Self::UnknownFormat { tag } => write!(f, "unknown data format {tag:?}"),
            Self::UnsupportedFormat { tag } => {
                write!(f, "data format {tag} is not supported, only {} is", FormatTag::CURRENT)
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RecordBytes => "record bytes",
            Self::CommandsPerField => "commands per field",
            Self::PolylinePoints => "polyline points",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for DecodeError {}
