use crate::error::{InvalidInput, is_valid_dimension};

/// A rectangular piece of furniture to be placed in a room.
/// Dimensions are expressed in room units.
#[derive(Clone, Debug, PartialEq)]
pub struct FurnitureSpec {
    /// Identifies the piece within a placement run
    pub name: String,
    /// Extent along the x-axis of the room
    pub length: f64,
    /// Extent along the y-axis of the room
    pub width: f64,
}

impl FurnitureSpec {
    pub fn try_new(name: impl Into<String>, length: f64, width: f64) -> Result<Self, InvalidInput> {
        let name = name.into();
        if !is_valid_dimension(length) || !is_valid_dimension(width) {
            return Err(InvalidInput::furniture_dimensions(&name, length, width));
        }
        Ok(FurnitureSpec {
            name,
            length,
            width,
        })
    }
}
