//! Data format tags.

use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;

/// Version tag at the head of a data record.
///
/// Only [`FormatTag::M3`] has a layer grammar; the older tags are recognized
/// so callers can report them precisely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    /// `o`
    Original,
    /// `m1`
    M1,
    /// `m2`
    M2,
    /// `m3`
    M3,
}

impl FormatTag {
    /// The format written by every encoder.
    pub const CURRENT: Self = Self::M3;

    /// Returns the tag as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Original => "o",
            Self::M1 => "m1",
            Self::M2 => "m2",
            Self::M3 => "m3",
        }
    }

    /// Returns `true` for tags that predate the current grammar.
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        !matches!(self, Self::M3)
    }
}

impl FromStr for FormatTag {
    type Err = DecodeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "o" => Ok(Self::Original),
            "m1" => Ok(Self::M1),
            "m2" => Ok(Self::M2),
            "m3" => Ok(Self::M3),
            _ => Err(DecodeError::UnknownFormat {
                tag: tag.to_string(),
            }),
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
