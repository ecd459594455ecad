use crate::core::geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transform of one marker frame (CSS-style 3D transform).
///
/// Only translation and a vertical scale are ever produced; there is no rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    /// Translation in pixels
    pub translate: Point,
    /// Scale along the y axis (1.0 = no scaling)
    pub scale_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Point::new(0, 0),
            scale_y: 1.0,
        }
    }
}

impl Transform {
    pub fn new(translate: Point, scale_y: f64) -> Self {
        Self { translate, scale_y }
    }

    /// Pure translation to `point`
    pub fn translation(point: Point) -> Self {
        Self::new(point, 1.0)
    }

    pub fn is_translation_only(&self) -> bool {
        self.scale_y == 1.0
    }

    /// Column-major 4x4 homogeneous matrix, the layout `matrix3d()` expects
    pub fn to_matrix(&self) -> [f64; 16] {
        let (x, y) = (f64::from(self.translate.x), f64::from(self.translate.y));
        [
            1.0, 0.0, 0.0, 0.0, //
            0.0, self.scale_y, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            x, y, 0.0, 1.0,
        ]
    }

    /// Render as a CSS `matrix3d(...)` value
    pub fn to_matrix3d(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("matrix3d(")?;
        for (i, value) in self.to_matrix().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str(")")
    }
}
