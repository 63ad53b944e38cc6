//! Integration module for connecting external trackers with the stop detector.
//!
//! This module provides traits and utilities for turning frame-by-frame
//! tracker output (YOLO + ByteTrack, etc.) into trajectories and running stop
//! detection over them.

mod builder;
mod pipeline;
mod recorder;
mod source;

pub use builder::TrackedObjectBuilder;
pub use pipeline::{PipelineError, StopPipeline};
pub use recorder::{TrajectoryRecorder, VEHICLE_CLASSES};
pub use source::{IntoTrackedObjects, TrackedObject, TrajectorySource};
