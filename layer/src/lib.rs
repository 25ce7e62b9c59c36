//! Coordinate-indexed object layers for PR2 course data.
//!
//! A course is drawn as a handful of layers. Each layer maps a pixel
//! coordinate to a stack of placed objects, where the stack order is the
//! z-order at that cell:
//!
//! - [`BlockLayer`] holds tile blocks
//! - [`StampLayer`] holds stamps and free text ([`Decoration`])
//! - [`LineLayer`] holds freehand polylines
//!
//! # Design Principles
//!
//! - **One object kind per layer** - Layers are typed, so a block can never end up
//!   in a line layer.
//! - **No empty stacks** - A coordinate is present iff at least one object sits there.
//! - **Deterministic iteration** - Cells iterate in `(x, y)` order, so encoders that
//!   walk a layer produce the same text for the same layer.
//!
//! # Example
//!
//! ```
//! use layer::{Block, BlockLayer};
//!
//! let mut blocks = BlockLayer::new();
//! blocks.push(30, 60, Block::new(111));
//! blocks.push(30, 60, Block::new(0));
//!
//! assert_eq!(blocks.peek(30, 60), Some(&Block::new(0)));
//! assert_eq!(blocks.pop(30, 60), Some(Block::new(0)));
//! assert_eq!(blocks.get(30, 60), Some(&[Block::new(111)][..]));
//! ```

mod color;
mod layer;
mod object;

pub use color::Color;
pub use layer::{Cells, Layer};
pub use object::{Block, Decoration, Line, Stamp, Text};

/// A position in pixel units.
///
/// Block coordinates are stored pre-multiplied by the 30 pixel grid size,
/// so every layer shares the same coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XY {
    pub x: i32,
    pub y: i32,
}

impl XY {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for XY {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Size of one block grid cell in pixels.
pub const GRID_SIZE: i32 = 30;

/// Layer of tile blocks.
pub type BlockLayer = Layer<Block>;

/// Layer of stamps and text.
pub type StampLayer = Layer<Decoration>;

/// Layer of freehand lines.
pub type LineLayer = Layer<Line>;
