use crate::geometry::Point;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Option<Self> {
        (x_min < x_max && y_min < y_max).then_some(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle with its lower-left corner at (`x`, `y`), extending `dx` along the x-axis and `dy` along the y-axis.
    pub fn from_corner(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + dx,
            y_max: y + dy,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Returns true if `other` lies completely inside `self` (touching edges allowed).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x_min >= self.x_min
            && other.y_min >= self.y_min
            && other.x_max <= self.x_max
            && other.y_max <= self.y_max
    }

    /// Returns true unless `self` and `other` are separated by at least `spacing` along one of the axes.
    ///
    /// With `spacing == 0.0`, rectangles that only touch along an edge do not collide.
    pub fn collides_with_spacing(&self, other: &Rect, spacing: f64) -> bool {
        !(self.x_max + spacing <= other.x_min
            || other.x_max + spacing <= self.x_min
            || self.y_max + spacing <= other.y_min
            || other.y_max + spacing <= self.y_min)
    }
}
