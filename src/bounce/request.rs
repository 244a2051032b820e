use serde::{Deserialize, Serialize};

use super::error::{BounceError, Result};

/// The six values collected by the parameter form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceAnimationRequest {
    pub start_height: f32,
    pub num_bounces: u32,
    /// Fraction of the height kept after each touch-down, expected in (0, 1).
    pub bounce_decay: f32,
    pub squash_stretch: f32,
    pub start_frame: i32,
    pub end_frame: i32,
}

impl Default for BounceAnimationRequest {
    fn default() -> Self {
        Self {
            start_height: 10.0,
            num_bounces: 3,
            bounce_decay: 0.5,
            squash_stretch: 0.2,
            start_frame: 1,
            end_frame: 120,
        }
    }
}

impl BounceAnimationRequest {
    /// Frames between start and end; only meaningful once `validate` passed.
    /// Widened so the full `i32` range does not overflow.
    pub fn available_frames(&self) -> i64 {
        i64::from(self.end_frame) - i64::from(self.start_frame)
    }

    /// Checks everything that does not depend on the bounce timing.
    pub fn validate(&self) -> Result<()> {
        if self.end_frame <= self.start_frame {
            return Err(BounceError::InvalidFrameRange {
                start_frame: self.start_frame,
                end_frame: self.end_frame,
            });
        }
        if !self.start_height.is_finite() || self.start_height <= 0.0 {
            return Err(BounceError::InvalidParameter {
                name: "start height",
                value: self.start_height,
            });
        }
        if !self.bounce_decay.is_finite() || self.bounce_decay < 0.0 {
            return Err(BounceError::InvalidParameter {
                name: "bounce decay",
                value: self.bounce_decay,
            });
        }
        if !self.squash_stretch.is_finite() || self.squash_stretch < 0.0 {
            return Err(BounceError::InvalidParameter {
                name: "squash/stretch",
                value: self.squash_stretch,
            });
        }
        Ok(())
    }
}
