use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a point on the pixel grid of the map's marker pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move the point by `(dx, dy)` pixels, or `None` if it would leave the `i32` grid
    pub fn checked_offset(&self, dx: i64, dy: i64) -> Option<Point> {
        let x = i32::try_from(i64::from(self.x).checked_add(dx)?).ok()?;
        let y = i32::try_from(i64::from(self.y).checked_add(dy)?).ok()?;
        Some(Point::new(x, y))
    }

    /// Chebyshev distance, i.e. the number of raster steps between two points
    pub fn grid_distance(&self, other: &Point) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_offset() {
        let p = Point::new(10, 20);

        assert_eq!(p.checked_offset(3, -4), Some(Point::new(13, 16)));
        assert_eq!(p.checked_offset(0, 0), Some(p));

        // Leaving the grid is reported instead of wrapping or panicking
        assert_eq!(Point::new(i32::MAX, 0).checked_offset(1, 0), None);
        assert_eq!(Point::new(0, i32::MIN + 1).checked_offset(0, -2), None);
        assert_eq!(
            Point::new(0, i32::MIN + 1).checked_offset(0, -1),
            Some(Point::new(0, i32::MIN))
        );
    }

    #[test]
    fn test_grid_distance() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);

        assert_eq!(a.grid_distance(&b), 4);
        assert_eq!(b.grid_distance(&a), 4);
        assert_eq!(Point::new(i32::MIN, 0).grid_distance(&Point::new(i32::MAX, 0)), u32::MAX);
    }

    #[test]
    fn test_point_conversions() {
        let p: Point = (5, -2).into();
        assert_eq!(p, Point::new(5, -2));

        let tuple: (i32, i32) = p.into();
        assert_eq!(tuple, (5, -2));
        assert_eq!(p.to_string(), "[5, -2]");
    }
}
