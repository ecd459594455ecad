//! Prelude module for common maplet-bounce types and functions
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use maplet_bounce::prelude::*;`

pub use crate::core::{
    config::{BounceOptions, BounceProfile},
    constants::{MARKER_ICON_SIZE, MOVE_DELAYS_PREFIX, MOVE_STEPS_PREFIX},
    geo::Point,
};

pub use crate::animation::{
    cache::{TimelineCache, TimelineKey},
    line::rasterize_line,
    plan::{BounceFrame, BouncePhase, BouncePlan},
    timing::{Timeline, TimingEngine},
    trajectory::{
        icon_move_points, icon_move_transforms, icon_resize_transforms, shadow_move_points,
        shadow_move_transforms,
    },
    transform::Transform,
};

pub use crate::{BounceError, Result};

pub use std::sync::Arc;
