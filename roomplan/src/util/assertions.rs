use std::sync::Arc;

use log::error;

use crate::entities::{Instance, Layout};
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Every entry of `layout` places the piece of `instance` at the same index.
pub fn layout_matches_instance(layout: &Layout, instance: &Instance) -> bool {
    if layout.len() != instance.n_pieces() {
        error!(
            "layout contains {} pieces, instance {}",
            layout.len(),
            instance.n_pieces()
        );
        return false;
    }
    layout
        .iter()
        .zip(instance.furniture())
        .all(|(pf, spec)| Arc::ptr_eq(&pf.spec, spec) || *pf.spec == **spec)
}

/// Every piece of `layout` has its lower-left corner inside the range it is sampled from.
pub fn layout_within_sampling_range(layout: &Layout, instance: &Instance) -> bool {
    layout.iter().all(|pf| {
        let (max_x, max_y) = instance.room().sampling_range(pf.length(), pf.width());
        let in_range = (0.0..=max_x).contains(&pf.x) && (0.0..=max_y).contains(&pf.y);
        if !in_range {
            error!("{pf} outside of sampling range [0, {max_x:.2}] x [0, {max_y:.2}]");
        }
        in_range
    })
}
