//! Detector configuration: reference line, window length and movement tolerance.

use crate::stop::error::ConfigError;
use crate::stop::geometry::Line;

/// Default number of samples in a stationary window.
pub const DEFAULT_STOP_FRAMES: usize = 20;
/// Default movement tolerance, in position units (pixels).
pub const DEFAULT_MAX_MOVEMENT: f64 = 5.0;

/// Configuration for the StopDetector.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectorConfig {
    /// Reference line; stops only count on its positive side.
    pub line: Line,
    /// Samples in a stationary window. At least 2.
    #[cfg_attr(feature = "serde", serde(default = "default_stop_frames"))]
    pub stop_frames: usize,
    /// Largest distance from the window's first sample still counted as stationary.
    #[cfg_attr(feature = "serde", serde(default = "default_max_movement"))]
    pub max_movement: f64,
}

#[cfg(feature = "serde")]
fn default_stop_frames() -> usize {
    DEFAULT_STOP_FRAMES
}

#[cfg(feature = "serde")]
fn default_max_movement() -> f64 {
    DEFAULT_MAX_MOVEMENT
}

impl DetectorConfig {
    /// Configuration for `line` with default window length and tolerance.
    pub fn new(line: Line) -> Self {
        Self {
            line,
            stop_frames: DEFAULT_STOP_FRAMES,
            max_movement: DEFAULT_MAX_MOVEMENT,
        }
    }

    pub fn with_stop_frames(mut self, stop_frames: usize) -> Self {
        self.stop_frames = stop_frames;
        self
    }

    pub fn with_max_movement(mut self, max_movement: f64) -> Self {
        self.max_movement = max_movement;
        self
    }

    /// Check value ranges. Degenerate lines are accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stop_frames < 2 {
            return Err(ConfigError::StopFramesTooSmall(self.stop_frames));
        }
        if !self.max_movement.is_finite() || self.max_movement < 0.0 {
            return Err(ConfigError::InvalidMaxMovement(self.max_movement));
        }
        if !self.line.is_finite() {
            return Err(ConfigError::NonFiniteLine(self.line.to_coords()));
        }
        Ok(())
    }
}
