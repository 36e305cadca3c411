use log::{debug, warn};

use crate::entities::{FurnitureSpec, Instance, RoomBounds};
use crate::error::InvalidInput;
use crate::io::ext_repr::{ExtCatalogItem, ExtCatalogSelection, ExtFurniture, ExtInstance, ExtRoom};

/// Catalog dimensions are in inches, rooms in feet
pub const INCHES_PER_ROOM_UNIT: f64 = 12.0;

/// Length (in inches) assumed for catalog items without one
pub const DEFAULT_CATALOG_LENGTH: f64 = 36.0;

/// Width (in inches) assumed for catalog items without one
pub const DEFAULT_CATALOG_WIDTH: f64 = 24.0;

pub fn import_instance(ext_instance: &ExtInstance) -> Result<Instance, InvalidInput> {
    let room = import_room(&ext_instance.room)?;

    let furniture = ext_instance
        .furniture
        .iter()
        .map(import_furniture)
        .chain(ext_instance.catalog_items.iter().map(import_catalog_selection))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "[IMPORT] instance '{}': room {:.2} x {:.2}, {} pieces",
        ext_instance.name,
        room.length,
        room.width,
        furniture.len()
    );

    Instance::new(room, furniture)
}

pub fn import_room(ext_room: &ExtRoom) -> Result<RoomBounds, InvalidInput> {
    RoomBounds::try_new(ext_room.length, ext_room.width)
}

pub fn import_furniture(ext_furniture: &ExtFurniture) -> Result<FurnitureSpec, InvalidInput> {
    FurnitureSpec::try_new(
        ext_furniture.name.as_str(),
        ext_furniture.length,
        ext_furniture.width,
    )
}

/// Converts a catalog selection into a [`FurnitureSpec`] in room units.
/// The piece is named after its category, in singular form.
pub fn import_catalog_selection(
    selection: &ExtCatalogSelection,
) -> Result<FurnitureSpec, InvalidInput> {
    let name = piece_name_for_category(&selection.category);
    let (length, width) = catalog_dimensions(&selection.item);
    FurnitureSpec::try_new(
        name,
        length / INCHES_PER_ROOM_UNIT,
        width / INCHES_PER_ROOM_UNIT,
    )
}

/// Maps a (plural) catalog category onto the name of a single piece.
pub fn piece_name_for_category(category: &str) -> String {
    let category = category.to_lowercase();
    match category.as_str() {
        "beds" => "bed".to_string(),
        "chairs" => "chair".to_string(),
        "sofas" => "sofa".to_string(),
        "tables" => "table".to_string(),
        _ => category,
    }
}

/// Dimensions of a catalog item in inches, using the defaults for missing values.
fn catalog_dimensions(item: &ExtCatalogItem) -> (f64, f64) {
    let length = item.length.unwrap_or_else(|| {
        warn!(
            "[IMPORT] catalog item {} ({}) has no length, assuming {DEFAULT_CATALOG_LENGTH} inches",
            item.id, item.name
        );
        DEFAULT_CATALOG_LENGTH
    });
    let width = item.width.unwrap_or_else(|| {
        warn!(
            "[IMPORT] catalog item {} ({}) has no width, assuming {DEFAULT_CATALOG_WIDTH} inches",
            item.id, item.name
        );
        DEFAULT_CATALOG_WIDTH
    });
    (length, width)
}
