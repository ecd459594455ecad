//! Timing engine
//!
//! A bounce is described by a step sequence (the pixel offset to show at each
//! step) and a delay table (when to show it). Offsets climb from 1 to the
//! height and fall back to 0; each step waits `speed / (height - offset)`
//! time units, so the marker leaves the ground quickly and lingers near the
//! top, and the way down mirrors the way up.

use crate::animation::cache::{TimelineCache, TimelineKey};
use crate::core::config::{check_speed, BounceOptions};
use crate::core::constants::{
    MOVE_DELAYS_PREFIX, MOVE_STEPS_PREFIX, RESIZE_DELAYS_PREFIX, RESIZE_STEPS_PREFIX,
};
use crate::{BounceError, Result};
use serde::Serialize;
use std::sync::Arc;

/// Step sequences and delay tables of one marker's bounce
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub move_steps: Arc<[u32]>,
    pub move_delays: Arc<[f64]>,
    /// Only present for elastic bounces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_steps: Option<Arc<[u32]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_delays: Option<Arc<[f64]>>,
}

impl Timeline {
    pub fn is_elastic(&self) -> bool {
        self.resize_steps.is_some()
    }

    /// Time from the start of the hop until its last step
    pub fn move_duration(&self) -> f64 {
        self.move_delays.last().copied().unwrap_or(0.0)
    }

    /// Time from the start of the contraction until its last step
    pub fn resize_duration(&self) -> f64 {
        self.resize_delays
            .as_ref()
            .and_then(|delays| delays.last().copied())
            .unwrap_or(0.0)
    }

    /// Length of one full cycle: the hop followed by the contraction
    pub fn total_duration(&self) -> f64 {
        self.move_duration() + self.resize_duration()
    }
}

/// Computes step sequences and delay tables, memoizing them in a [`TimelineCache`].
///
/// Cloning the engine shares its cache, so a map can hand one engine to every
/// marker and each distinct `(prefix, height, speed)` is computed once.
#[derive(Debug, Clone, Default)]
pub struct TimingEngine {
    cache: TimelineCache,
}

impl TimingEngine {
    /// Engine with a fresh, unbounded cache
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(cache: TimelineCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &TimelineCache {
        &self.cache
    }

    /// Offsets of one cycle: `[1, 2, ..., height, height - 1, ..., 0]`.
    ///
    /// Repeated calls with the same `(prefix, height)` return the same allocation.
    pub fn steps(&self, height: u32, prefix: &str) -> Arc<[u32]> {
        self.cache
            .steps_or_insert_with(TimelineKey::steps(prefix, height), || {
                compute_steps(height)
            })
    }

    /// Cumulative delay before each entry of [`TimingEngine::steps`] for the same height.
    ///
    /// `speed` must be positive and finite, and so must the total it adds up to,
    /// otherwise `InvalidSpeed`. Repeated calls with the same
    /// `(prefix, height, speed)` return the same allocation.
    pub fn delays(&self, height: u32, speed: f64, prefix: &str) -> Result<Arc<[f64]>> {
        check_speed(speed)?;

        self.cache
            .delays_or_try_insert_with(TimelineKey::delays(prefix, height, speed), || {
                compute_delays(height, speed)
            })
    }

    /// Everything a driver needs to time one bounce of a marker with `options`.
    ///
    /// Resize sequences are only produced for elastic bounces.
    pub fn compute_timeline(&self, options: &BounceOptions) -> Result<Timeline> {
        options.validate()?;

        let move_steps = self.steps(options.bounce_height, MOVE_STEPS_PREFIX);
        let move_delays = self.delays(
            options.bounce_height,
            options.bounce_speed,
            MOVE_DELAYS_PREFIX,
        )?;

        let (resize_steps, resize_delays) = if options.elastic {
            let steps = self.steps(options.contract_height, RESIZE_STEPS_PREFIX);
            let delays = self.delays(
                options.contract_height,
                options.contract_speed,
                RESIZE_DELAYS_PREFIX,
            )?;
            (Some(steps), Some(delays))
        } else {
            (None, None)
        };

        Ok(Timeline {
            move_steps,
            move_delays,
            resize_steps,
            resize_delays,
        })
    }
}

fn compute_steps(height: u32) -> Vec<u32> {
    (1..=height).chain((0..height).rev()).collect()
}

fn compute_delays(height: u32, speed: f64) -> Result<Vec<f64>> {
    // Time spent reaching each offset on the way up; the way down reuses it
    let deltas: Vec<f64> = (0..=height)
        .map(|offset| {
            if offset == 0 {
                0.0
            } else if offset == height {
                speed
            } else {
                (speed / f64::from(height - offset)).round()
            }
        })
        .collect();

    let mut elapsed = 0.0;
    let delays: Vec<f64> = compute_steps(height)
        .into_iter()
        .map(|offset| {
            elapsed += deltas[offset as usize];
            elapsed
        })
        .collect();

    // Running sums only grow, so the last one bounds them all
    match delays.last() {
        Some(total) if !total.is_finite() => {
            log::debug!("delays for height {} at speed {} overflow to {}", height, speed, total);
            Err(BounceError::InvalidSpeed(speed))
        }
        _ => Ok(delays),
    }
}
