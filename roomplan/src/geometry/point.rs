/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        f64::hypot(self.0 - other.0, self.1 - other.1)
    }
}
