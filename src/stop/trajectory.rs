//! Per-object trajectories and the store that groups them by track ID.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::stop::error::TrajectoryError;
use crate::stop::geometry::Position;
use crate::stop::region::Region;

/// Track identifier assigned by the external tracker.
pub type TrackId = u64;

/// One observation of a tracked object.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackSample {
    /// Frame index the object was observed in
    pub frame: u64,
    /// Bounding region in that frame
    pub region: Region,
}

impl TrackSample {
    pub fn new(frame: u64, region: Region) -> Self {
        Self { frame, region }
    }

    /// Sample from centre-based box values (center_x, center_y, width, height).
    pub fn from_xywh(frame: u64, cx: f64, cy: f64, w: f64, h: f64) -> Self {
        Self::new(frame, Region::new(cx, cy, w, h))
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.region.center()
    }
}

/// Ordered samples of a single object.
///
/// Frame indices strictly increase; gaps are allowed and carry no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    samples: Vec<TrackSample>,
}

impl Trajectory {
    pub fn new(samples: Vec<TrackSample>) -> Result<Self, TrajectoryError> {
        let mut trajectory = Self::with_capacity(samples.len());
        for sample in samples {
            trajectory.push(sample)?;
        }
        Ok(trajectory)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append a sample. Rejects out-of-order frames and non-finite centres.
    pub fn push(&mut self, sample: TrackSample) -> Result<(), TrajectoryError> {
        self.check(&sample)?;
        self.samples.push(sample);
        Ok(())
    }

    /// Whether `sample` could be appended, without appending it.
    pub fn check(&self, sample: &TrackSample) -> Result<(), TrajectoryError> {
        let Region {
            center_x, center_y, ..
        } = sample.region;
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(TrajectoryError::NonFinitePosition {
                frame: sample.frame,
                x: center_x,
                y: center_y,
            });
        }
        if let Some(last) = self.samples.last() {
            if sample.frame <= last.frame {
                return Err(TrajectoryError::NonIncreasingFrame {
                    previous: last.frame,
                    frame: sample.frame,
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TrackSample] {
        &self.samples
    }

    /// Centre positions in sample order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.samples.iter().map(TrackSample::position)
    }

    /// Frame indices in sample order.
    pub fn frames(&self) -> impl Iterator<Item = u64> + '_ {
        self.samples.iter().map(|s| s.frame)
    }

    /// Frame index of the sample at positional index `idx`.
    pub fn frame_at(&self, idx: usize) -> Option<u64> {
        self.samples.get(idx).map(|s| s.frame)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Trajectory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.samples, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Trajectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let samples = Vec::<TrackSample>::deserialize(deserializer)?;
        Trajectory::new(samples).map_err(serde::de::Error::custom)
    }
}

/// Trajectories keyed by track ID, iterated in ascending ID order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrajectoryStore {
    tracks: BTreeMap<TrackId, Trajectory>,
}

impl TrajectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to the trajectory of `track_id`, creating it if needed.
    pub fn record(
        &mut self,
        track_id: TrackId,
        sample: TrackSample,
    ) -> Result<(), TrajectoryError> {
        self.tracks.entry(track_id).or_default().push(sample)
    }

    /// Whether `sample` could be recorded for `track_id`, without recording it.
    pub fn check(&self, track_id: TrackId, sample: &TrackSample) -> Result<(), TrajectoryError> {
        match self.tracks.get(&track_id) {
            Some(trajectory) => trajectory.check(sample),
            None => Trajectory::default().check(sample),
        }
    }

    /// Insert a whole trajectory, returning the one it replaces.
    pub fn insert(&mut self, track_id: TrackId, trajectory: Trajectory) -> Option<Trajectory> {
        self.tracks.insert(track_id, trajectory)
    }

    pub fn get(&self, track_id: TrackId) -> Option<&Trajectory> {
        self.tracks.get(&track_id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, TrackId, Trajectory> {
        self.tracks.iter()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}

impl<'a> IntoIterator for &'a TrajectoryStore {
    type Item = (&'a TrackId, &'a Trajectory);
    type IntoIter = btree_map::Iter<'a, TrackId, Trajectory>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

impl FromIterator<(TrackId, Trajectory)> for TrajectoryStore {
    fn from_iter<I: IntoIterator<Item = (TrackId, Trajectory)>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}
