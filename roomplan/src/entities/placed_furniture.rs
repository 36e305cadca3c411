use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entities::FurnitureSpec;
use crate::geometry::{Point, Rect};

/// Orientation of a placed piece, in degrees.
///
/// The rotation is recorded for downstream consumers but does not change the footprint:
/// `length` always extends along the x-axis and `width` along the y-axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> Self {
        r.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::R0),
            90 => Ok(Rotation::R90),
            180 => Ok(Rotation::R180),
            270 => Ok(Rotation::R270),
            _ => Err(format!(
                "invalid rotation: {degrees}, expected one of 0, 90, 180, 270"
            )),
        }
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// A [`FurnitureSpec`] placed at a position in the room.
/// The position is the lower-left corner and may lie (partially) outside the room.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedFurniture {
    pub spec: Arc<FurnitureSpec>,
    pub x: f64,
    pub y: f64,
    pub rotation: Rotation,
}

impl PlacedFurniture {
    pub fn new(spec: Arc<FurnitureSpec>, x: f64, y: f64, rotation: Rotation) -> Self {
        PlacedFurniture {
            spec,
            x,
            y,
            rotation,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn length(&self) -> f64 {
        self.spec.length
    }

    pub fn width(&self) -> f64 {
        self.spec.width
    }

    /// Axis-aligned area occupied by the piece. Independent of [`Rotation`].
    pub fn footprint(&self) -> Rect {
        Rect::from_corner(self.x, self.y, self.spec.length, self.spec.width)
    }

    pub fn center(&self) -> Point {
        self.footprint().centroid()
    }

    /// Copy of `self` moved to (`x`, `y`), keeping spec and rotation.
    pub fn moved_to(&self, x: f64, y: f64) -> Self {
        PlacedFurniture {
            spec: self.spec.clone(),
            x,
            y,
            rotation: self.rotation,
        }
    }
}

impl Display for PlacedFurniture {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{:.2} x {:.2}] at ({:.2}, {:.2}), r: {}",
            self.spec.name, self.spec.length, self.spec.width, self.x, self.y, self.rotation
        )
    }
}
