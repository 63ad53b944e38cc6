//! Accumulates per-frame tracker output into trajectories.

use std::collections::BTreeSet;

use crate::integration::{IntoTrackedObjects, TrackedObject};
use crate::stop::{TrackSample, TrajectoryError, TrajectoryStore};

/// COCO class IDs for vehicles: car, bus, truck.
pub const VEHICLE_CLASSES: [usize; 3] = [2, 5, 7];

/// Builds a `TrajectoryStore` from tracker output, one frame at a time.
///
/// Frames are numbered from 0 in recording order. Every recorded frame
/// advances the counter, including frames without any tracked object.
#[derive(Debug, Clone)]
pub struct TrajectoryRecorder {
    store: TrajectoryStore,
    frame: u64,
    classes: Option<Vec<usize>>,
}

impl Default for TrajectoryRecorder {
    fn default() -> Self {
        Self::with_classes(VEHICLE_CLASSES)
    }
}

impl TrajectoryRecorder {
    /// Recorder keeping vehicle classes only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder keeping objects whose class ID is in `classes`.
    pub fn with_classes(classes: impl IntoIterator<Item = usize>) -> Self {
        Self {
            store: TrajectoryStore::new(),
            frame: 0,
            classes: Some(classes.into_iter().collect()),
        }
    }

    /// Recorder keeping every object regardless of class.
    pub fn unfiltered() -> Self {
        Self {
            store: TrajectoryStore::new(),
            frame: 0,
            classes: None,
        }
    }

    /// Whether `object` passes the class filter. Objects without a class ID always do.
    pub fn accepts(&self, object: &TrackedObject) -> bool {
        match (&self.classes, object.class_id) {
            (Some(classes), Some(class_id)) => classes.contains(&class_id),
            _ => true,
        }
    }

    /// Record the objects of the next frame.
    ///
    /// The frame is recorded as a whole or not at all: on error neither the
    /// store nor the frame counter change.
    pub fn record_frame(
        &mut self,
        objects: impl IntoTrackedObjects,
    ) -> Result<(), TrajectoryError> {
        let frame = self.frame;
        let samples: Vec<_> = objects
            .into_tracked_objects()
            .into_iter()
            .filter(|object| self.accepts(object))
            .map(|object| (object.track_id, TrackSample::new(frame, object.region)))
            .collect();

        let mut seen = BTreeSet::new();
        for (track_id, sample) in &samples {
            if !seen.insert(*track_id) {
                return Err(TrajectoryError::NonIncreasingFrame {
                    previous: frame,
                    frame,
                });
            }
            self.store.check(*track_id, sample)?;
        }

        for (track_id, sample) in samples {
            self.store.record(track_id, sample)?;
        }
        self.frame += 1;
        Ok(())
    }

    /// Number of frames recorded so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn store(&self) -> &TrajectoryStore {
        &self.store
    }

    pub fn into_store(self) -> TrajectoryStore {
        self.store
    }

    /// Drop recorded trajectories and restart frame numbering.
    pub fn reset(&mut self) {
        self.store.clear();
        self.frame = 0;
    }
}
