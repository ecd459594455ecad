pub mod cache;
pub mod line;
pub mod plan;
pub mod timing;
pub mod trajectory;
pub mod transform;

// Re-export commonly used types and functions for convenience
pub use cache::{CachedSequence, TimelineCache, TimelineKey};
pub use line::rasterize_line;
pub use plan::{BounceFrame, BouncePhase, BouncePlan};
pub use timing::{Timeline, TimingEngine};
pub use trajectory::{
    icon_move_points, icon_move_transforms, icon_resize_transforms, shadow_move_points,
    shadow_move_transforms,
};
pub use transform::Transform;
