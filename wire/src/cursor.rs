//! Running cursor for delta-encoded coordinates.

use layer::XY;

use crate::error::{DecodeError, WireResult};

/// Tracks the current position while decoding or encoding deltas.
///
/// The cursor starts at the origin and persists across every command of a
/// field. Decoding rejects positions outside the `i32` range; encoding
/// wraps, since every position it starts from is already in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeltaCursor {
    pos: XY,
}

impl DeltaCursor {
    /// Creates a cursor at the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pos: XY::new(0, 0),
        }
    }

    /// Returns the current position.
    #[must_use]
    pub const fn position(&self) -> XY {
        self.pos
    }

    /// Moves by a delta and returns the new position.
    ///
    /// `command` names the command kind in the overflow error.
    pub fn advance(&mut self, command: &'static str, dx: i32, dy: i32) -> WireResult<XY> {
        let x = self.pos.x.checked_add(dx);
        let y = self.pos.y.checked_add(dy);
        let (Some(x), Some(y)) = (x, y) else {
            return Err(DecodeError::CoordinateOverflow { command });
        };
        self.pos = XY::new(x, y);
        Ok(self.pos)
    }

    /// Moves to `target` and returns the delta that was travelled.
    pub fn move_to(&mut self, target: XY) -> (i32, i32) {
        let delta = (
            target.x.wrapping_sub(self.pos.x),
            target.y.wrapping_sub(self.pos.y),
        );
        self.pos = target;
        delta
    }
}
