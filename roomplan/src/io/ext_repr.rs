use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::entities::Rotation;

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// The room in which the furniture is placed
    pub room: ExtRoom,
    /// Furniture with dimensions already expressed in room units
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub furniture: Vec<ExtFurniture>,
    /// Furniture selected from a catalog, with dimensions in inches.
    /// Placed after the entries of `furniture`, in the given order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub catalog_items: Vec<ExtCatalogSelection>,
}

/// External representation of a [`RoomBounds`](crate::entities::RoomBounds), in room units.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtRoom {
    pub length: f64,
    pub width: f64,
}

/// External representation of a [`FurnitureSpec`](crate::entities::FurnitureSpec), in room units.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtFurniture {
    pub name: String,
    pub length: f64,
    pub width: f64,
}

/// A catalog item chosen for a furniture category (e.g. "beds").
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCatalogSelection {
    pub category: String,
    pub item: ExtCatalogItem,
}

/// A record as returned by the furniture recommender.
/// Dimensions are in inches; missing dimensions fall back to catalog defaults.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCatalogItem {
    pub id: ExtCatalogId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Identifier of a catalog record. Stores that generate their own keys hand out integers,
/// others use strings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum ExtCatalogId {
    Number(u64),
    Text(String),
}

impl Display for ExtCatalogId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtCatalogId::Number(id) => write!(f, "{id}"),
            ExtCatalogId::Text(id) => write!(f, "{id}"),
        }
    }
}

/// External representation of a solution: the best layout and how it was scored.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// The placed furniture, in the same order as the furniture of the instance
    pub layout: Vec<ExtPlacedFurniture>,
    pub score: f64,
    pub overlapping_pairs: usize,
    pub out_of_bounds: usize,
    pub wall_contacts: usize,
    pub balanced: bool,
}

/// External representation of a [`PlacedFurniture`](crate::entities::PlacedFurniture).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedFurniture {
    pub name: String,
    /// x-coordinate of the lower-left corner
    pub x: f64,
    /// y-coordinate of the lower-left corner
    pub y: f64,
    pub length: f64,
    pub width: f64,
    /// Rotation in degrees, one of 0, 90, 180 or 270
    pub rotation: Rotation,
}
