//! The backtick-delimited course data record.
//!
//! Field layout:
//!
//! | index | field                |
//! |-------|----------------------|
//! | 0     | format tag           |
//! | 1     | background color hex |
//! | 2     | blocks               |
//! | 3-5   | stamps, tiers 1-3    |
//! | 6-8   | lines, tiers 1-3     |
//! | 9     | background image     |
//! | 10-11 | stamps, tiers 0, 00  |
//! | 12-13 | lines, tiers 0, 00   |
//!
//! Records written before tiers 0 and 00 existed stop after field 9.

use std::fmt;

use layer::{BlockLayer, Color, LineLayer, StampLayer};
use wire::{
    format_hex_color, parse_hex_color, parse_int, DecodeError, FormatTag, LimitKind, Limits,
    RECORD_DELIMITER,
};

use crate::blocks::{decode_blocks, encode_blocks};
use crate::error::{CodecError, CodecResult};
use crate::lines::{decode_lines, encode_lines};
use crate::stamps::{decode_stamps, encode_stamps};

/// Number of fields every record must have.
pub const REQUIRED_FIELDS: usize = 10;

/// Number of fields in a record with every tier.
pub const FULL_FIELDS: usize = 14;

/// Background image value meaning "none".
pub const NO_BACKGROUND_IMAGE: i32 = -1;

/// A depth plane of stamps and lines, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Tier `00`, the furthest back.
    T00,
    /// Tier `0`.
    T0,
    T1,
    T2,
    T3,
}

impl Tier {
    /// Every tier, back to front.
    pub const ALL: [Self; 5] = [Self::T00, Self::T0, Self::T1, Self::T2, Self::T3];

    /// Returns the tier's position in [`Tier::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the tier's name as used in field names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::T00 => "00",
            Self::T0 => "0",
            Self::T1 => "1",
            Self::T2 => "2",
            Self::T3 => "3",
        }
    }

    const fn stamp_slot(self) -> usize {
        match self {
            Self::T1 => 3,
            Self::T2 => 4,
            Self::T3 => 5,
            Self::T0 => 10,
            Self::T00 => 11,
        }
    }

    const fn line_slot(self) -> usize {
        match self {
            Self::T1 => 6,
            Self::T2 => 7,
            Self::T3 => 8,
            Self::T0 => 12,
            Self::T00 => 13,
        }
    }

    const fn is_optional(self) -> bool {
        matches!(self, Self::T00 | Self::T0)
    }
}

/// Names a positional field of the data record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataField {
    Format,
    BackgroundColor,
    Blocks,
    Stamps(Tier),
    Lines(Tier),
    BackgroundImage,
}

impl fmt::Display for DataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "format"),
            Self::BackgroundColor => write!(f, "background color"),
            Self::Blocks => write!(f, "blocks"),
            Self::Stamps(tier) => write!(f, "stamp{}", tier.name()),
            Self::Lines(tier) => write!(f, "line{}", tier.name()),
            Self::BackgroundImage => write!(f, "background image"),
        }
    }
}

/// Everything carried by the data record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseData {
    pub background_color: Color,
    /// Background image id, or [`NO_BACKGROUND_IMAGE`].
    pub background_image: i32,
    pub blocks: BlockLayer,
    /// Stamp layers indexed by [`Tier::index`].
    pub stamps: [StampLayer; 5],
    /// Line layers indexed by [`Tier::index`].
    pub lines: [LineLayer; 5],
}

impl CourseData {
    /// Returns the stamp layer of a tier.
    #[must_use]
    pub fn stamps(&self, tier: Tier) -> &StampLayer {
        &self.stamps[tier.index()]
    }

    /// Returns the stamp layer of a tier for editing.
    pub fn stamps_mut(&mut self, tier: Tier) -> &mut StampLayer {
        &mut self.stamps[tier.index()]
    }

    /// Returns the line layer of a tier.
    #[must_use]
    pub fn lines(&self, tier: Tier) -> &LineLayer {
        &self.lines[tier.index()]
    }

    /// Returns the line layer of a tier for editing.
    pub fn lines_mut(&mut self, tier: Tier) -> &mut LineLayer {
        &mut self.lines[tier.index()]
    }

    /// Returns `true` if no layer holds any object.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.blocks.is_empty()
            && self.stamps.iter().all(StampLayer::is_empty)
            && self.lines.iter().all(LineLayer::is_empty)
    }
}

impl Default for CourseData {
    fn default() -> Self {
        Self {
            background_color: Color::from_rgb(0xBB_BBDD),
            background_image: NO_BACKGROUND_IMAGE,
            blocks: BlockLayer::new(),
            stamps: Default::default(),
            lines: Default::default(),
        }
    }
}

fn in_field<T>(field: DataField, result: Result<T, DecodeError>) -> CodecResult<T> {
    result.map_err(|source| CodecError::Field { field, source })
}

/// Decodes a data record.
///
/// The four tier 0/00 fields are read only when all of them are present;
/// a shorter tail is treated as a record from before those tiers existed.
pub fn decode_data(data: &str, limits: &Limits) -> CodecResult<CourseData> {
    if data.len() > limits.max_record_bytes {
        return Err(CodecError::Wire(DecodeError::LimitsExceeded {
            kind: LimitKind::RecordBytes,
            limit: limits.max_record_bytes,
            actual: data.len(),
        }));
    }

    let fields: Vec<&str> = data.split(RECORD_DELIMITER).collect();
    if fields.len() < REQUIRED_FIELDS {
        return Err(CodecError::truncated(fields.len()));
    }
    let has_tier_zero = fields.len() >= FULL_FIELDS;

    let format: FormatTag = in_field(DataField::Format, fields[0].parse())?;
    if format.is_legacy() {
        return Err(CodecError::Field {
            field: DataField::Format,
            source: DecodeError::UnsupportedFormat { tag: format },
        });
    }

    let mut course = CourseData {
        background_color: in_field(
            DataField::BackgroundColor,
            parse_hex_color("background color", fields[1]),
        )?,
        blocks: in_field(DataField::Blocks, decode_blocks(format, fields[2], limits))?,
        ..CourseData::default()
    };

    for tier in Tier::ALL {
        if tier.is_optional() && !has_tier_zero {
            continue;
        }
        course.stamps[tier.index()] = in_field(
            DataField::Stamps(tier),
            decode_stamps(format, fields[tier.stamp_slot()], limits),
        )?;
        course.lines[tier.index()] = in_field(
            DataField::Lines(tier),
            decode_lines(format, fields[tier.line_slot()], limits),
        )?;
    }

    course.background_image = match fields[9] {
        "" => NO_BACKGROUND_IMAGE,
        raw => in_field(
            DataField::BackgroundImage,
            parse_int("background image", raw),
        )?,
    };

    Ok(course)
}

/// Encodes a data record with all fourteen fields in the current format.
#[must_use]
pub fn encode_data(course: &CourseData) -> String {
    let mut fields = vec![String::new(); FULL_FIELDS];
    fields[0] = FormatTag::CURRENT.as_str().to_string();
    fields[1] = format_hex_color(course.background_color);
    fields[2] = encode_blocks(&course.blocks);
    for tier in Tier::ALL {
        fields[tier.stamp_slot()] = encode_stamps(course.stamps(tier));
        fields[tier.line_slot()] = encode_lines(course.lines(tier));
    }
    fields[9] = course.background_image.to_string();
    fields.join("`")
}
