use crate::animation::timing::{Timeline, TimingEngine};
use crate::animation::trajectory::{
    icon_move_transforms, icon_resize_transforms, shadow_move_transforms,
};
use crate::animation::transform::Transform;
use crate::core::config::BounceOptions;
use crate::core::geo::Point;
use crate::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BouncePhase {
    /// The icon hops up and back down
    Move,
    /// The icon squashes against the ground (elastic bounces only)
    Resize,
}

/// One visual update of a bouncing marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BounceFrame {
    pub phase: BouncePhase,
    /// Pixel offset into the hop or the contraction
    pub step: u32,
    /// Time since the start of the cycle at which to apply this frame
    pub at: f64,
    pub icon: Transform,
    /// `None` during the contraction, or when the marker has no shadow
    pub shadow: Option<Transform>,
}

/// Every frame of one bounce cycle, precomputed.
///
/// The plan does not schedule anything. A driver applies `frames()` at their
/// `at` offsets with its own timers, or samples [`BouncePlan::frame_at`] from its
/// render loop.
#[derive(Debug, Clone, Serialize)]
pub struct BouncePlan {
    timeline: Timeline,
    frames: Vec<BounceFrame>,
}

impl BouncePlan {
    /// Build the plan of a marker whose icon sits at `icon_origin`.
    ///
    /// `icon_height` is the rendered icon height in pixels, used as the base of the
    /// elastic squash. Pass `shadow_origin: None` for markers without a shadow.
    pub fn build(
        engine: &TimingEngine,
        options: &BounceOptions,
        icon_origin: Point,
        shadow_origin: Option<Point>,
        icon_height: u32,
    ) -> Result<Self> {
        let timeline = engine.compute_timeline(options)?;

        let icon_moves = icon_move_transforms(icon_origin, options.bounce_height)?;
        let shadow_moves = shadow_origin
            .map(|origin| {
                shadow_move_transforms(origin, options.bounce_height, options.shadow_angle)
            })
            .transpose()?;

        let mut frames = Vec::with_capacity(timeline.move_steps.len());
        for (&step, &at) in timeline.move_steps.iter().zip(timeline.move_delays.iter()) {
            frames.push(BounceFrame {
                phase: BouncePhase::Move,
                step,
                at,
                icon: icon_moves[step as usize],
                shadow: shadow_moves.as_ref().map(|moves| moves[step as usize]),
            });
        }

        if let (Some(steps), Some(delays)) = (&timeline.resize_steps, &timeline.resize_delays) {
            let resizes = icon_resize_transforms(icon_origin, icon_height, options.contract_height)?;
            let offset = timeline.move_duration();

            frames.reserve(steps.len());
            for (&step, &delay) in steps.iter().zip(delays.iter()) {
                frames.push(BounceFrame {
                    phase: BouncePhase::Resize,
                    step,
                    at: offset + delay,
                    icon: resizes[step as usize],
                    shadow: None,
                });
            }
        }

        log::debug!(
            "built bounce plan: {} frames over {} time units",
            frames.len(),
            timeline.total_duration()
        );

        Ok(Self { timeline, frames })
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn frames(&self) -> &[BounceFrame] {
        &self.frames
    }

    /// Length of one cycle
    pub fn duration(&self) -> f64 {
        self.timeline.total_duration()
    }

    /// The frame that should be on screen `elapsed` time units into the cycle.
    ///
    /// `None` before the first frame fires; past the end of the cycle the final
    /// frame stays applied.
    pub fn frame_at(&self, elapsed: f64) -> Option<&BounceFrame> {
        let fired = self.frames.partition_point(|frame| frame.at <= elapsed);
        fired.checked_sub(1).map(|index| &self.frames[index])
    }

    /// Like [`BouncePlan::frame_at`] for a marker that keeps bouncing: `elapsed`
    /// wraps around the cycle duration.
    pub fn looped_frame_at(&self, elapsed: f64) -> Option<&BounceFrame> {
        let duration = self.duration();
        if duration <= 0.0 || elapsed < duration {
            return self.frame_at(elapsed);
        }

        // Between cycles the marker rests on the last frame of the previous one
        self.frame_at(elapsed % duration)
            .or_else(|| self.frames.last())
    }
}
