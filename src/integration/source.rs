//! Trait for external trackers feeding trajectories into the detector.

use crate::stop::{Region, TrackId};

/// One object reported by the tracker in a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedObject {
    /// Identity assigned by the tracker, stable across frames
    pub track_id: TrackId,
    /// Detector class ID (COCO numbering for YOLO-style models), if known
    pub class_id: Option<usize>,
    /// Bounding region in the frame
    pub region: Region,
}

impl TrackedObject {
    pub fn new(track_id: TrackId, class_id: Option<usize>, region: Region) -> Self {
        Self {
            track_id,
            class_id,
            region,
        }
    }
}

/// Trait for tracking backends.
///
/// Implement this trait to feed any detection + tracking stack into the stop
/// detector. Frames are consumed in order; the recorder numbers them.
///
/// # Example
///
/// ```ignore
/// use stopline_rs::{TrackedObject, TrajectorySource};
///
/// struct MyTracker {
///     // Video reader and tracker here
/// }
///
/// impl TrajectorySource for MyTracker {
///     type Error = std::io::Error;
///
///     fn next_frame(&mut self) -> Result<Option<Vec<TrackedObject>>, Self::Error> {
///         // Decode the next frame, run detection and tracking
///         Ok(None)
///     }
/// }
/// ```
pub trait TrajectorySource {
    /// Error type for decoding or tracking failures.
    type Error;

    /// Objects tracked in the next frame.
    ///
    /// # Returns
    /// `Ok(Some(objects))` for every decoded frame, possibly empty when nothing
    /// was tracked, and `Ok(None)` once the input is exhausted.
    fn next_frame(&mut self) -> Result<Option<Vec<TrackedObject>>, Self::Error>;
}

/// Helper trait for converting tracker-specific outputs to `TrackedObject`.
///
/// Implement this for your tracker's output format to enable easy conversion.
pub trait IntoTrackedObjects {
    /// Convert the output into a vector of tracked objects.
    fn into_tracked_objects(self) -> Vec<TrackedObject>;
}

impl IntoTrackedObjects for Vec<TrackedObject> {
    fn into_tracked_objects(self) -> Vec<TrackedObject> {
        self
    }
}
