//! Configuration for bouncing markers
//!
//! Options are plain data: a driver reads them from its marker, hands them to the
//! timing engine and the trajectory builder, and applies whatever comes back. Presets
//! cover the common looks; `Custom` carries anything else.

use crate::core::constants::{
    DEFAULT_BOUNCE_HEIGHT, DEFAULT_BOUNCE_SPEED, DEFAULT_CONTRACT_HEIGHT, DEFAULT_CONTRACT_SPEED,
    DEFAULT_SHADOW_ANGLE,
};
use crate::{BounceError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum BounceProfile {
    Default,
    Subtle,
    Energetic,
    Custom(BounceOptions),
}

impl BounceProfile {
    pub fn resolve(&self) -> BounceOptions {
        match self {
            Self::Default => BounceOptions {
                bounce_height: DEFAULT_BOUNCE_HEIGHT,
                contract_height: DEFAULT_CONTRACT_HEIGHT,
                bounce_speed: DEFAULT_BOUNCE_SPEED,
                contract_speed: DEFAULT_CONTRACT_SPEED,
                shadow_angle: Some(DEFAULT_SHADOW_ANGLE),
                elastic: true,
            },
            Self::Subtle => BounceOptions {
                bounce_height: 6,
                contract_height: 0,
                bounce_speed: 40.0,
                contract_speed: DEFAULT_CONTRACT_SPEED,
                shadow_angle: None,
                elastic: false,
            },
            Self::Energetic => BounceOptions {
                bounce_height: 25,
                contract_height: 16,
                bounce_speed: 36.0,
                contract_speed: 30.0,
                shadow_angle: Some(DEFAULT_SHADOW_ANGLE),
                elastic: true,
            },
            Self::Custom(options) => options.clone(),
        }
    }
}

impl Default for BounceProfile {
    fn default() -> Self {
        Self::Default
    }
}

/// Bounce configuration of a single marker.
///
/// Field names serialize in camelCase so option objects written for web map
/// drivers (`bounceHeight`, `shadowAngle`, ...) deserialize as-is. Missing fields
/// take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BounceOptions {
    /// Peak offset of one hop in pixels
    pub bounce_height: u32,
    /// How many pixels the icon squashes by when `elastic` is set
    pub contract_height: u32,
    /// Speed coefficient of the hop; larger is slower
    pub bounce_speed: f64,
    /// Speed coefficient of the contraction; larger is slower
    pub contract_speed: f64,
    /// Direction the shadow slides in, in radians. `None` keeps the shadow in place.
    pub shadow_angle: Option<f64>,
    /// Squash the icon after every hop
    pub elastic: bool,
}

impl Default for BounceOptions {
    fn default() -> Self {
        BounceProfile::default().resolve()
    }
}

impl BounceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounce_height(mut self, height: u32) -> Self {
        self.bounce_height = height;
        self
    }

    pub fn with_contract_height(mut self, height: u32) -> Self {
        self.contract_height = height;
        self
    }

    pub fn with_bounce_speed(mut self, speed: f64) -> Self {
        self.bounce_speed = speed;
        self
    }

    pub fn with_contract_speed(mut self, speed: f64) -> Self {
        self.contract_speed = speed;
        self
    }

    pub fn with_shadow_angle(mut self, angle: Option<f64>) -> Self {
        self.shadow_angle = angle;
        self
    }

    pub fn with_elastic(mut self, elastic: bool) -> Self {
        self.elastic = elastic;
        self
    }

    /// Check that every numeric option is usable by the engine.
    ///
    /// Contraction parameters are only checked when `elastic` is set.
    pub fn validate(&self) -> Result<()> {
        check_speed(self.bounce_speed)?;

        if self.elastic {
            check_speed(self.contract_speed)?;
        }

        if let Some(angle) = self.shadow_angle {
            if !angle.is_finite() {
                log::debug!("rejecting bounce options with shadow angle {}", angle);
                return Err(BounceError::InvalidAngle(angle));
            }
        }

        Ok(())
    }

    /// Parse options from JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Apply a partial JSON object on top of the current options.
    ///
    /// Keys absent from `patch` keep their current value; `"shadowAngle": null`
    /// switches shadow movement off. The result is validated before it is returned.
    pub fn merge_json(&self, patch: &str) -> Result<Self> {
        let patch: serde_json::Value = serde_json::from_str(patch)?;
        let serde_json::Value::Object(patch) = patch else {
            return Err(BounceError::InvalidOptions(
                "bounce options patch must be a JSON object".to_string(),
            ));
        };

        let mut merged = match serde_json::to_value(self)? {
            serde_json::Value::Object(current) => current,
            _ => serde_json::Map::new(),
        };
        for (key, value) in patch {
            merged.insert(key, value);
        }

        let options: Self = serde_json::from_value(serde_json::Value::Object(merged))?;
        options.validate()?;
        Ok(options)
    }
}

/// Speeds are the numerator of the timing law and must be strictly positive
pub(crate) fn check_speed(speed: f64) -> Result<()> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        log::debug!("rejecting bounce speed {}", speed);
        Err(BounceError::InvalidSpeed(speed))
    }
}
