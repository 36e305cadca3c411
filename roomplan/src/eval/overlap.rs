use crate::entities::PlacedFurniture;

/// Minimum clearance (in room units) between two pieces for them not to overlap.
pub const DEFAULT_SPACING: f64 = 0.5;

/// Returns true if the footprints of `a` and `b` are not separated by at least `spacing`
/// to the left, right, above or below of each other.
///
/// Symmetric in `a` and `b`. Every collision-related fitness term goes through this predicate.
pub fn overlaps(a: &PlacedFurniture, b: &PlacedFurniture, spacing: f64) -> bool {
    a.footprint()
        .collides_with_spacing(&b.footprint(), spacing)
}
