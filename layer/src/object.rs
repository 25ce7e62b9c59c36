//! Objects that can be placed on a layer.

use crate::{Color, XY};

/// A tile block, identified by its tile type id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block(i32);

impl Block {
    /// Creates a block of the given tile type.
    #[must_use]
    pub const fn new(kind: i32) -> Self {
        Self(kind)
    }

    /// Returns the tile type id.
    #[must_use]
    pub const fn kind(self) -> i32 {
        self.0
    }
}

impl From<i32> for Block {
    fn from(kind: i32) -> Self {
        Self(kind)
    }
}

impl From<Block> for i32 {
    fn from(block: Block) -> Self {
        block.0
    }
}

/// A decorative image sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stamp {
    /// Sprite id.
    pub kind: i32,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Stamp {
    /// Creates an unscaled stamp of the given sprite id.
    #[must_use]
    pub const fn new(kind: i32) -> Self {
        Self {
            kind,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Returns `true` if both scale factors are exactly 1.0.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_unscaled(&self) -> bool {
        self.scale_x == 1.0 && self.scale_y == 1.0
    }
}

impl Default for Stamp {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Free text drawn on a stamp layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Text {
    pub content: String,
    pub color: Color,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Text {
    /// Creates unscaled text.
    #[must_use]
    pub fn new(content: impl Into<String>, color: Color) -> Self {
        Self {
            content: content.into(),
            color,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Anything that lives on a stamp layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decoration {
    Stamp(Stamp),
    Text(Text),
}

impl From<Stamp> for Decoration {
    fn from(stamp: Stamp) -> Self {
        Self::Stamp(stamp)
    }
}

impl From<Text> for Decoration {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

/// A freehand polyline.
///
/// A line is stored on its layer under its first point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// `true` if the stroke erases instead of drawing.
    pub erase: bool,
    pub thickness: i32,
    pub color: Color,
    /// Absolute points in pixel units.
    pub points: Vec<XY>,
}

impl Line {
    /// Default stroke thickness.
    pub const DEFAULT_THICKNESS: i32 = 4;

    /// Creates a black drawing stroke of default thickness.
    #[must_use]
    pub const fn new(points: Vec<XY>) -> Self {
        Self {
            erase: false,
            thickness: Self::DEFAULT_THICKNESS,
            color: Color::BLACK,
            points,
        }
    }

    /// Returns the first point, which is the line's layer key.
    #[must_use]
    pub fn origin(&self) -> Option<XY> {
        self.points.first().copied()
    }
}
