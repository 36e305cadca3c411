mod furniture;
mod instance;
mod layout;
mod placed_furniture;
mod room;

#[doc(inline)]
pub use furniture::FurnitureSpec;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use placed_furniture::PlacedFurniture;

#[doc(inline)]
pub use placed_furniture::Rotation;

#[doc(inline)]
pub use room::RoomBounds;

#[doc(inline)]
pub use room::MIN_SAMPLING_RANGE;
