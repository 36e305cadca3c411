use crate::entities::{Layout, PlacedFurniture};
use crate::eval::ScoreBreakdown;
use crate::io::ext_repr::{ExtPlacedFurniture, ExtSolution};

pub fn export_solution(layout: &Layout, breakdown: &ScoreBreakdown) -> ExtSolution {
    ExtSolution {
        layout: layout.iter().map(export_placed_furniture).collect(),
        score: breakdown.fitness.value(),
        overlapping_pairs: breakdown.overlapping_pairs,
        out_of_bounds: breakdown.out_of_bounds,
        wall_contacts: breakdown.wall_contacts,
        balanced: breakdown.balanced,
    }
}

pub fn export_placed_furniture(pf: &PlacedFurniture) -> ExtPlacedFurniture {
    ExtPlacedFurniture {
        name: pf.name().to_string(),
        x: pf.x,
        y: pf.y,
        length: pf.length(),
        width: pf.width(),
        rotation: pf.rotation,
    }
}
