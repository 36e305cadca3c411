use crate::error::{InvalidInput, is_valid_dimension};
use crate::geometry::{Point, Rect};

/// Lower bound on the upper end of every sampling range.
/// Keeps the range non-degenerate when a piece is as large as (or larger than) the room.
pub const MIN_SAMPLING_RANGE: f64 = 0.1;

/// Axis-aligned footprint of a room, with its origin at one corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomBounds {
    pub length: f64,
    pub width: f64,
}

impl RoomBounds {
    pub fn try_new(length: f64, width: f64) -> Result<Self, InvalidInput> {
        if !is_valid_dimension(length) || !is_valid_dimension(width) {
            return Err(InvalidInput::RoomDimensions { length, width });
        }
        Ok(RoomBounds { length, width })
    }

    pub fn rect(&self) -> Rect {
        Rect::from_corner(0.0, 0.0, self.length, self.width)
    }

    pub fn center(&self) -> Point {
        Point(self.length / 2.0, self.width / 2.0)
    }

    /// Upper bounds `(max_x, max_y)` of the lower-left corner of a piece with the given extents.
    /// Both ranges start at 0 and never shrink below [`MIN_SAMPLING_RANGE`].
    pub fn sampling_range(&self, length: f64, width: f64) -> (f64, f64) {
        (
            f64::max(MIN_SAMPLING_RANGE, self.length - length),
            f64::max(MIN_SAMPLING_RANGE, self.width - width),
        )
    }
}
