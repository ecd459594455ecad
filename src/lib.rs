//! # Maplet Bounce
//!
//! Trajectory and timing engine for bouncing map markers, inspired by the
//! Leaflet smooth-marker-bouncing plugin.
//!
//! The engine turns a marker's bounce options into plain data: the pixel
//! positions and `matrix3d` transforms the icon and its shadow pass through,
//! and the cumulative delay at which each step should be applied. It never
//! touches a marker, a DOM or a timer; the map driver owns all of that.
//!
//! ```
//! use maplet_bounce::{BounceOptions, Point, TimingEngine};
//!
//! let engine = TimingEngine::new();
//! let timeline = engine.compute_timeline(&BounceOptions::default())?;
//! assert_eq!(timeline.move_steps.len(), 30);
//!
//! let icon = maplet_bounce::animation::trajectory::icon_move_points(Point::new(10, 20), 3)?;
//! assert_eq!(icon.last(), Some(&Point::new(10, 17)));
//! # Ok::<(), maplet_bounce::BounceError>(())
//! ```

pub mod animation;
pub mod core;
pub mod prelude;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{BounceOptions, BounceProfile},
    geo::Point,
};

pub use crate::animation::{
    cache::TimelineCache,
    line::rasterize_line,
    plan::{BounceFrame, BouncePhase, BouncePlan},
    timing::{Timeline, TimingEngine},
    transform::Transform,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, BounceError>;

/// Everything the engine can reject. Each is raised before any output is produced.
#[derive(Debug, thiserror::Error)]
pub enum BounceError {
    #[error("Invalid line length {0}: a line needs at least one point and must stay on the pixel grid")]
    InvalidLength(u32),

    #[error("Invalid height: {0}")]
    InvalidHeight(String),

    #[error("Division hazard: {0}")]
    DivisionHazard(String),

    #[error("Invalid speed {0}: must be a positive finite number")]
    InvalidSpeed(f64),

    #[error("Invalid angle {0}: must be a finite number of radians")]
    InvalidAngle(f64),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = BounceError;
