use rand::Rng;

use roomplan::entities::Layout;

/// Index-aligned uniform crossover.
///
/// Every position of the child is copied from `lhs` or `rhs` with equal probability, independently of the other positions.
/// The child shares no mutable state with its parents.
pub fn crossover(lhs: &Layout, rhs: &Layout, rng: &mut impl Rng) -> Layout {
    debug_assert_eq!(lhs.len(), rhs.len(), "parents place different furniture");
    lhs.iter()
        .zip(rhs.iter())
        .map(|(l, r)| match rng.random_bool(0.5) {
            true => l.clone(),
            false => r.clone(),
        })
        .collect()
}
