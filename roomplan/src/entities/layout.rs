use std::ops::Index;
use std::slice::Iter;

use crate::entities::PlacedFurniture;

/// A candidate solution: one [`PlacedFurniture`] for every piece of an [`Instance`](crate::entities::Instance),
/// in the same order as the instance's furniture list.
///
/// A layout is never modified once built. Operators that change a layout produce a new one,
/// so a layout can safely be shared between generations.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    placements: Vec<PlacedFurniture>,
}

impl Layout {
    pub fn new(placements: Vec<PlacedFurniture>) -> Self {
        Layout { placements }
    }

    pub fn placements(&self) -> &[PlacedFurniture] {
        &self.placements
    }

    pub fn iter(&self) -> Iter<'_, PlacedFurniture> {
        self.placements.iter()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl Index<usize> for Layout {
    type Output = PlacedFurniture;

    fn index(&self, index: usize) -> &Self::Output {
        &self.placements[index]
    }
}

impl FromIterator<PlacedFurniture> for Layout {
    fn from_iter<T: IntoIterator<Item = PlacedFurniture>>(iter: T) -> Self {
        Layout::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a PlacedFurniture;
    type IntoIter = Iter<'a, PlacedFurniture>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}
