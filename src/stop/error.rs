//! Error types for detector configuration and trajectory input.

use thiserror::Error;

/// Invalid detector configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The stationary window must hold at least two samples.
    #[error("invalid configuration: stop_frames must be at least 2, got {0}")]
    StopFramesTooSmall(usize),
    /// Movement tolerance is negative, NaN or infinite.
    #[error("invalid configuration: max_movement must be finite and non-negative, got {0}")]
    InvalidMaxMovement(f64),
    /// A line endpoint coordinate is NaN or infinite.
    #[error("invalid configuration: line endpoints must be finite, got {0:?}")]
    NonFiniteLine([f64; 4]),
}

/// Invalid trajectory sample.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    /// Frame indices must strictly increase along a trajectory.
    #[error("invalid trajectory: frame {frame} does not follow frame {previous}")]
    NonIncreasingFrame { previous: u64, frame: u64 },
    /// Centre coordinates must be finite.
    #[error("invalid trajectory: non-finite centre ({x}, {y}) at frame {frame}")]
    NonFinitePosition { frame: u64, x: f64, y: f64 },
}
