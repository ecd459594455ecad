//! Core constants derived from Leaflet bouncing-marker defaults.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

use std::f64::consts::FRAC_PI_4;

/// Default peak offset of one hop, in pixels.
pub const DEFAULT_BOUNCE_HEIGHT: u32 = 15;

/// Default amount the icon squashes by during elastic contraction, in pixels.
pub const DEFAULT_CONTRACT_HEIGHT: u32 = 12;

/// Default speed coefficient of the hop (larger is slower).
pub const DEFAULT_BOUNCE_SPEED: f64 = 52.0;

/// Default speed coefficient of the contraction.
pub const DEFAULT_CONTRACT_SPEED: f64 = 52.0;

/// Shadow slides up and to the right while the marker rises.
pub const DEFAULT_SHADOW_ANGLE: f64 = -FRAC_PI_4;

/// Marker icon default size (regular PNG).
pub const MARKER_ICON_SIZE: (u32, u32) = (25, 41);

/// Cache namespace for the step sequence of the hop.
pub const MOVE_STEPS_PREFIX: &str = "moveSteps_";

/// Cache namespace for the delay table of the hop.
pub const MOVE_DELAYS_PREFIX: &str = "moveDelays_";

/// Cache namespace for the step sequence of the contraction.
pub const RESIZE_STEPS_PREFIX: &str = "resizeSteps_";

/// Cache namespace for the delay table of the contraction.
pub const RESIZE_DELAYS_PREFIX: &str = "resizeDelays_";
