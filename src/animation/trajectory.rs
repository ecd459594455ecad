//! Positions and transforms a marker passes through during one bounce.
//!
//! Every builder returns one entry per pixel of offset, indexed by the values of
//! a step sequence: entry `i` is where the icon (or shadow) sits when it is `i`
//! pixels into the hop or the contraction.

use crate::animation::line::rasterize_line;
use crate::animation::transform::Transform;
use crate::core::geo::Point;
use crate::{BounceError, Result};

/// Icon positions while rising: `bounce_height + 1` points, point `i` is `i` pixels above `origin`.
///
/// Fails with `InvalidHeight` when the peak would leave the pixel grid.
pub fn icon_move_points(origin: Point, bounce_height: u32) -> Result<Vec<Point>> {
    trajectory_length(bounce_height)?;
    vertical_path(origin, bounce_height, -1)
}

/// Shadow positions while the icon rises.
///
/// With no angle the shadow holds still, so every entry is `origin`. With an angle
/// (including `0.0`, a horizontal slide) the shadow follows a rasterized line, which
/// fails with `InvalidLength` if it would leave the pixel grid.
pub fn shadow_move_points(
    origin: Point,
    bounce_height: u32,
    angle: Option<f64>,
) -> Result<Vec<Point>> {
    let length = trajectory_length(bounce_height)?;

    match angle {
        Some(angle) => rasterize_line(origin, angle, length),
        None => Ok(vec![origin; length as usize]),
    }
}

/// Icon translations while rising, one per entry of [`icon_move_points`]
pub fn icon_move_transforms(origin: Point, bounce_height: u32) -> Result<Vec<Transform>> {
    Ok(icon_move_points(origin, bounce_height)?
        .into_iter()
        .map(Transform::translation)
        .collect())
}

/// Shadow translations while the icon rises, one per entry of [`shadow_move_points`]
pub fn shadow_move_transforms(
    origin: Point,
    bounce_height: u32,
    angle: Option<f64>,
) -> Result<Vec<Transform>> {
    Ok(shadow_move_points(origin, bounce_height, angle)?
        .into_iter()
        .map(Transform::translation)
        .collect())
}

/// Icon transforms of the elastic squash.
///
/// Entry `i` shrinks the icon to `(original_height - i) / original_height` of its
/// height and moves it `i` pixels down, so the squash happens towards the base.
/// `contract_height` must stay below `original_height` so the icon never collapses.
pub fn icon_resize_transforms(
    origin: Point,
    original_height: u32,
    contract_height: u32,
) -> Result<Vec<Transform>> {
    if original_height == 0 {
        log::debug!("rejecting resize of a zero-height icon");
        return Err(BounceError::DivisionHazard(
            "icon height must be non-zero to compute scale factors".to_string(),
        ));
    }
    if contract_height >= original_height {
        log::debug!(
            "rejecting contraction of {}px on a {}px icon",
            contract_height,
            original_height
        );
        return Err(BounceError::InvalidHeight(format!(
            "contract height {} must be smaller than icon height {}",
            contract_height, original_height
        )));
    }

    let full = f64::from(original_height);
    let translations = vertical_path(origin, contract_height, 1)?;
    Ok(translations
        .into_iter()
        .zip(0..=contract_height)
        .map(|(translate, i)| Transform::new(translate, f64::from(original_height - i) / full))
        .collect())
}

/// `origin` followed by one point per pixel up to `height` pixels along y in `direction`
fn vertical_path(origin: Point, height: u32, direction: i64) -> Result<Vec<Point>> {
    let out_of_grid = || {
        log::debug!("rejecting {}px vertical path from {}", height, origin);
        BounceError::InvalidHeight(format!(
            "height {} moves {} off the pixel grid",
            height, origin
        ))
    };

    // The far end is the only point that can leave the grid
    origin
        .checked_offset(0, direction * i64::from(height))
        .ok_or_else(out_of_grid)?;

    (0..=height)
        .map(|i| origin.checked_offset(0, direction * i64::from(i)))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(out_of_grid)
}

fn trajectory_length(height: u32) -> Result<u32> {
    height
        .checked_add(1)
        .ok_or_else(|| BounceError::InvalidHeight(format!("height {} is too large", height)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_icon_move_points_rise_one_pixel_per_step() {
        let moves = icon_move_points(Point::new(10, 20), 3).unwrap();
        assert_eq!(moves, points(&[(10, 20), (10, 19), (10, 18), (10, 17)]));
    }

    #[test]
    fn test_icon_move_points_zero_height_is_origin_only() {
        assert_eq!(
            icon_move_points(Point::new(1, 2), 0).unwrap(),
            vec![Point::new(1, 2)]
        );
    }

    #[test]
    fn test_icon_move_points_reject_peak_off_grid() {
        let near_top = Point::new(0, i32::MIN + 1);
        assert!(matches!(
            icon_move_points(near_top, 3),
            Err(BounceError::InvalidHeight(_))
        ));
        assert!(matches!(
            icon_move_transforms(near_top, 3),
            Err(BounceError::InvalidHeight(_))
        ));

        // Reaching exactly the edge is fine
        let moves = icon_move_points(near_top, 1).unwrap();
        assert_eq!(moves.last(), Some(&Point::new(0, i32::MIN)));
    }

    #[test]
    fn test_heights_without_room_for_a_trajectory_are_rejected() {
        let origin = Point::new(0, 0);
        assert!(matches!(
            shadow_move_points(origin, u32::MAX, None),
            Err(BounceError::InvalidHeight(_))
        ));
        assert!(matches!(
            shadow_move_points(origin, u32::MAX, Some(0.0)),
            Err(BounceError::InvalidHeight(_))
        ));
        assert!(matches!(
            icon_move_points(origin, u32::MAX),
            Err(BounceError::InvalidHeight(_))
        ));
    }

    #[test]
    fn test_shadow_without_angle_stays_put() {
        let shadow = shadow_move_points(Point::new(10, 20), 3, None).unwrap();
        assert_eq!(shadow, vec![Point::new(10, 20); 4]);
    }

    #[test]
    fn test_shadow_with_zero_angle_slides_horizontally() {
        let shadow = shadow_move_points(Point::new(10, 20), 3, Some(0.0)).unwrap();
        assert_eq!(shadow, points(&[(10, 20), (11, 20), (12, 20), (13, 20)]));
    }

    #[test]
    fn test_shadow_follows_angle() {
        let shadow = shadow_move_points(Point::new(0, 0), 3, Some(-FRAC_PI_4)).unwrap();
        assert_eq!(shadow, points(&[(0, 0), (1, -1), (2, -2), (3, -3)]));
    }

    #[test]
    fn test_shadow_rejects_slide_off_grid() {
        let edge = Point::new(i32::MAX, 0);
        assert!(matches!(
            shadow_move_points(edge, 3, Some(0.0)),
            Err(BounceError::InvalidLength(4))
        ));
        assert!(matches!(
            shadow_move_transforms(edge, 3, Some(0.0)),
            Err(BounceError::InvalidLength(4))
        ));
        assert_eq!(shadow_move_points(edge, 3, None).unwrap().len(), 4);
    }

    #[test]
    fn test_shadow_rejects_non_finite_angle() {
        assert!(matches!(
            shadow_move_points(Point::new(0, 0), 3, Some(f64::NAN)),
            Err(BounceError::InvalidAngle(_))
        ));
    }

    #[test]
    fn test_move_transforms_match_points() {
        let origin = Point::new(10, 20);

        let icon = icon_move_transforms(origin, 3).unwrap();
        assert_eq!(icon.len(), 4);
        assert_eq!(icon[3], Transform::translation(Point::new(10, 17)));
        assert_eq!(
            icon[1].to_matrix3d(),
            "matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,10,19,0,1)"
        );

        let shadow = shadow_move_transforms(origin, 3, Some(0.0)).unwrap();
        let shadow_points = shadow_move_points(origin, 3, Some(0.0)).unwrap();
        assert_eq!(shadow.len(), shadow_points.len());
        for (transform, point) in shadow.iter().zip(shadow_points) {
            assert_eq!(transform.translate, point);
            assert!(transform.is_translation_only());
        }
    }

    #[test]
    fn test_resize_transforms_squash_towards_base() {
        let resize = icon_resize_transforms(Point::new(5, 100), 10, 2).unwrap();

        assert_eq!(resize.len(), 3);
        let scales: Vec<f64> = resize.iter().map(|t| t.scale_y).collect();
        assert_eq!(scales, vec![1.0, 0.9, 0.8]);
        let ys: Vec<i32> = resize.iter().map(|t| t.translate.y).collect();
        assert_eq!(ys, vec![100, 101, 102]);
        assert!(resize.iter().all(|t| t.translate.x == 5));
        assert_eq!(
            resize[1].to_matrix3d(),
            "matrix3d(1,0,0,0,0,0.9,0,0,0,0,1,0,5,101,0,1)"
        );
    }

    #[test]
    fn test_resize_rejects_squash_off_grid() {
        assert!(matches!(
            icon_resize_transforms(Point::new(0, i32::MAX - 1), 10, 2),
            Err(BounceError::InvalidHeight(_))
        ));
        assert!(icon_resize_transforms(Point::new(0, i32::MAX - 2), 10, 2).is_ok());
    }

    #[test]
    fn test_resize_rejects_zero_icon_height() {
        assert!(matches!(
            icon_resize_transforms(Point::new(0, 0), 0, 0),
            Err(BounceError::DivisionHazard(_))
        ));
    }

    #[test]
    fn test_resize_rejects_collapsing_contraction() {
        assert!(matches!(
            icon_resize_transforms(Point::new(0, 0), 10, 10),
            Err(BounceError::InvalidHeight(_))
        ));
        assert!(icon_resize_transforms(Point::new(0, 0), 10, 9).is_ok());
    }
}
