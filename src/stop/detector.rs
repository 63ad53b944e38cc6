//! Main StopDetector algorithm implementation.

use crate::stop::config::DetectorConfig;
use crate::stop::error::ConfigError;
use crate::stop::geometry::Position;
use crate::stop::trajectory::{TrackId, Trajectory, TrajectoryStore};

/// Earliest stop of one tracked object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopEvent {
    pub track_id: TrackId,
    /// Frame index of the last sample in the stationary window
    pub frame: u64,
}

/// Detects sustained stops past a reference line.
///
/// An object is stopped once `stop_frames` consecutive samples all stay within
/// `max_movement` of the first sample of that run and the last one lies below
/// the configured line. Only the earliest such run counts.
///
/// `predict` overwrites the detector's result buffer and therefore takes
/// `&mut self`; share a detector between threads only behind a lock.
#[derive(Debug, Clone)]
pub struct StopDetector {
    config: DetectorConfig,
    results: Vec<StopEvent>,
    positions: Vec<Position>,
}

impl StopDetector {
    pub fn new(config: DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.line.is_degenerate() {
            log::warn!(
                "stop line {:?} has identical endpoints, no stop will ever be reported",
                config.line.to_coords()
            );
        }
        Ok(Self {
            positions: Vec::with_capacity(config.stop_frames),
            config,
            results: Vec::new(),
        })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Stop events produced by the last `predict` call.
    pub fn results(&self) -> &[StopEvent] {
        &self.results
    }

    /// Whether `point` is strictly on the positive side of the stop line.
    #[inline]
    pub fn is_below_line(&self, point: &Position) -> bool {
        self.config.line.is_below(point)
    }

    /// Positional index of the last sample of the earliest stationary window
    /// ending below the line.
    ///
    /// Each window is anchored at its first sample: drift is measured from the
    /// anchor, not from the preceding sample.
    pub fn find_stop_window(&self, positions: &[Position]) -> Option<usize> {
        let stop_frames = self.config.stop_frames;
        if positions.len() < stop_frames {
            return None;
        }

        for start in 0..=positions.len() - stop_frames {
            let window = &positions[start..start + stop_frames];
            let base = &window[0];

            let moved = window[1..]
                .iter()
                .any(|p| nalgebra::distance(p, base) > self.config.max_movement);

            if !moved && self.is_below_line(&window[stop_frames - 1]) {
                return Some(start + stop_frames - 1);
            }
        }

        None
    }

    /// Frame index at which `trajectory` stopped, if it did.
    pub fn detect(&mut self, trajectory: &Trajectory) -> Option<u64> {
        if trajectory.len() < self.config.stop_frames {
            return None;
        }

        let mut positions = std::mem::take(&mut self.positions);
        positions.clear();
        positions.extend(trajectory.positions());
        let window_end = self.find_stop_window(&positions);
        self.positions = positions;

        window_end.and_then(|idx| trajectory.frame_at(idx))
    }

    /// Evaluate every trajectory and return one event per stopped object,
    /// ordered by track ID.
    pub fn predict(&mut self, trajectories: &TrajectoryStore) -> &[StopEvent] {
        self.results.clear();

        for (&track_id, trajectory) in trajectories {
            if trajectory.len() < self.config.stop_frames {
                log::trace!(
                    "track {}: {} samples, shorter than the {}-frame window",
                    track_id,
                    trajectory.len(),
                    self.config.stop_frames
                );
                continue;
            }

            if let Some(frame) = self.detect(trajectory) {
                log::debug!("track {} stopped at frame {}", track_id, frame);
                self.results.push(StopEvent { track_id, frame });
            }
        }

        &self.results
    }
}
