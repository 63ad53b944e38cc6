//! Stop-line detection over tracked object trajectories.
//!
//! Given per-object trajectories from an external tracker, [`StopDetector`]
//! reports for each object the frame at which it first stood still for a
//! configured number of samples on the far side of a reference line.

pub mod integration;
pub mod stop;

pub use integration::{
    IntoTrackedObjects, PipelineError, StopPipeline, TrackedObject, TrackedObjectBuilder,
    TrajectoryRecorder, TrajectorySource,
};
pub use stop::{
    ConfigError, DetectorConfig, Line, Position, Region, StopDetector, StopEvent, TrackId,
    TrackSample, Trajectory, TrajectoryError, TrajectoryStore,
};
