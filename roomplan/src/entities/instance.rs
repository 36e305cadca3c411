use std::sync::Arc;

use crate::entities::{FurnitureSpec, RoomBounds};
use crate::error::InvalidInput;

/// A room together with the ordered list of furniture to place in it.
///
/// The order of the furniture is preserved: the i-th entry of every [`Layout`](crate::entities::Layout)
/// built for this instance places the i-th piece.
#[derive(Debug, Clone)]
pub struct Instance {
    room: RoomBounds,
    furniture: Vec<Arc<FurnitureSpec>>,
}

impl Instance {
    pub fn new(room: RoomBounds, furniture: Vec<FurnitureSpec>) -> Result<Self, InvalidInput> {
        // revalidate, the fields of both are public
        RoomBounds::try_new(room.length, room.width)?;
        if furniture.is_empty() {
            return Err(InvalidInput::NothingToPlace);
        }
        let furniture = furniture
            .into_iter()
            .map(|f| FurnitureSpec::try_new(f.name, f.length, f.width).map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Instance { room, furniture })
    }

    pub fn room(&self) -> &RoomBounds {
        &self.room
    }

    pub fn furniture(&self) -> &[Arc<FurnitureSpec>] {
        &self.furniture
    }

    pub fn n_pieces(&self) -> usize {
        self.furniture.len()
    }
}
