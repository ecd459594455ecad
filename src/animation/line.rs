use crate::core::geo::Point;
use crate::{BounceError, Result};

/// Rasterize a straight line of `length` pixels starting at `origin` and heading
/// along `angle` (radians, screen coordinates with y growing downwards).
///
/// The line is traced with Bresenham stepping towards a target placed `2 * length`
/// away, so the walk always has at least `length` pixels available even at shallow
/// angles where rounding eats into the shorter axis. The first point is `origin`.
///
/// A line that would run off the `i32` pixel grid is rejected with `InvalidLength`.
pub fn rasterize_line(origin: Point, angle: f64, length: u32) -> Result<Vec<Point>> {
    if length == 0 {
        log::debug!("rejecting line of length 0 from {}", origin);
        return Err(BounceError::InvalidLength(length));
    }
    if !angle.is_finite() {
        log::debug!("rejecting line from {} with angle {}", origin, angle);
        return Err(BounceError::InvalidAngle(angle));
    }

    let reach = f64::from(length) * 2.0;
    let (x0, y0) = (i64::from(origin.x), i64::from(origin.y));
    let target_x = (x0 as f64 + angle.cos() * reach).round() as i64;
    let target_y = (y0 as f64 + angle.sin() * reach).round() as i64;

    let dx = (target_x - x0).abs();
    let dy = (target_y - y0).abs();
    let sx = if x0 < target_x { 1 } else { -1 };
    let sy = if y0 < target_y { 1 } else { -1 };

    // Error term is kept doubled so it stays integral
    let mut err = if dx > dy { dx } else { -dy };
    let (mut x, mut y) = (0i64, 0i64);
    let mut points = Vec::with_capacity(length as usize);

    loop {
        let point = origin.checked_offset(x, y).ok_or_else(|| {
            log::debug!("rejecting {}px line from {} leaving the pixel grid", length, origin);
            BounceError::InvalidLength(length)
        })?;
        points.push(point);
        if points.len() == length as usize {
            break;
        }

        let e2 = err;
        if e2 > -2 * dx {
            err -= 2 * dy;
            x += sx;
        }
        if e2 < 2 * dy {
            err += 2 * dx;
            y += sy;
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_horizontal_line() {
        let line = rasterize_line(Point::new(0, 0), 0.0, 5).unwrap();
        assert_eq!(line, points(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]));
    }

    #[test]
    fn test_vertical_and_backwards_lines() {
        let down = rasterize_line(Point::new(0, 0), FRAC_PI_2, 3).unwrap();
        assert_eq!(down, points(&[(0, 0), (0, 1), (0, 2)]));

        let left = rasterize_line(Point::new(10, 10), PI, 3).unwrap();
        assert_eq!(left, points(&[(10, 10), (9, 10), (8, 10)]));
    }

    #[test]
    fn test_diagonal_line() {
        let line = rasterize_line(Point::new(0, 0), -FRAC_PI_4, 4).unwrap();
        assert_eq!(line, points(&[(0, 0), (1, -1), (2, -2), (3, -3)]));
    }

    #[test]
    fn test_single_point_line_is_origin() {
        let line = rasterize_line(Point::new(7, -3), 1.0, 1).unwrap();
        assert_eq!(line, vec![Point::new(7, -3)]);
    }

    #[test]
    fn test_every_angle_yields_exact_length() {
        let origin = Point::new(100, 200);

        for length in [1, 2, 3, 7, 16, 40] {
            for degree in 0..360 {
                let angle = f64::from(degree).to_radians();
                let line = rasterize_line(origin, angle, length).unwrap();

                assert_eq!(line.len(), length as usize, "angle {}°", degree);
                assert_eq!(line[0], origin);

                for (i, point) in line.iter().enumerate() {
                    // One raster step per point along the dominant axis
                    assert_eq!(point.grid_distance(&origin) as usize, i, "angle {}°", degree);

                    // Stays close to the ideal ray
                    let px = f64::from(point.x - origin.x);
                    let py = f64::from(point.y - origin.y);
                    let off_line = (py * angle.cos() - px * angle.sin()).abs();
                    assert!(off_line <= 1.0, "angle {}° drifted {}", degree, off_line);
                }
            }
        }
    }

    #[test]
    fn test_rejects_zero_length() {
        assert!(matches!(
            rasterize_line(Point::new(0, 0), 0.0, 0),
            Err(BounceError::InvalidLength(0))
        ));
    }

    #[test]
    fn test_rejects_line_leaving_the_grid() {
        let edge = Point::new(i32::MAX - 1, 0);
        assert!(matches!(
            rasterize_line(edge, 0.0, 3),
            Err(BounceError::InvalidLength(3))
        ));

        // Up to the edge is fine, and so is heading away from it
        let line = rasterize_line(edge, 0.0, 2).unwrap();
        assert_eq!(line.last(), Some(&Point::new(i32::MAX, 0)));
        assert_eq!(rasterize_line(edge, PI, 3).unwrap().len(), 3);
    }

    #[test]
    fn test_rejects_non_finite_angle() {
        assert!(matches!(
            rasterize_line(Point::new(0, 0), f64::NAN, 3),
            Err(BounceError::InvalidAngle(_))
        ));
    }
}
