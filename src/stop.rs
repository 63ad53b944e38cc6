mod config;
mod detector;
mod error;
mod geometry;
mod region;
mod trajectory;

pub use config::{DEFAULT_MAX_MOVEMENT, DEFAULT_STOP_FRAMES, DetectorConfig};
pub use detector::{StopDetector, StopEvent};
pub use error::{ConfigError, TrajectoryError};
pub use geometry::{Line, Position};
pub use region::Region;
pub use trajectory::{TrackId, TrackSample, Trajectory, TrajectoryStore};
