//! StopPipeline for combining an external tracker with stop detection.

use thiserror::Error;

use crate::stop::{ConfigError, DetectorConfig, StopDetector, StopEvent, TrajectoryError};

use super::{TrajectoryRecorder, TrajectorySource};

/// Error raised while running a `StopPipeline`.
#[derive(Debug, Error)]
pub enum PipelineError<E> {
    /// The trajectory source failed.
    #[error("trajectory source failed: {0}")]
    Source(E),
    /// The source produced samples that do not form a valid trajectory.
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),
}

/// Drains a `TrajectorySource` into trajectories and runs the `StopDetector`
/// over them.
pub struct StopPipeline<S: TrajectorySource> {
    source: S,
    recorder: TrajectoryRecorder,
    detector: StopDetector,
}

impl<S: TrajectorySource> StopPipeline<S> {
    /// Create a pipeline recording vehicle classes only.
    pub fn new(source: S, config: DetectorConfig) -> Result<Self, ConfigError> {
        Self::with_recorder(source, TrajectoryRecorder::new(), config)
    }

    /// Create a pipeline with a custom recorder (for example a different class filter).
    pub fn with_recorder(
        source: S,
        recorder: TrajectoryRecorder,
        config: DetectorConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            source,
            recorder,
            detector: StopDetector::new(config)?,
        })
    }

    /// Consume the source until it is exhausted, then detect stops over
    /// everything recorded.
    ///
    /// On error the frames recorded so far are kept and a frame that failed
    /// validation is dropped whole; calling `run` again resumes from the
    /// source's current position.
    pub fn run(&mut self) -> Result<&[StopEvent], PipelineError<S::Error>> {
        while let Some(objects) = self.source.next_frame().map_err(PipelineError::Source)? {
            self.recorder.record_frame(objects)?;
        }

        log::info!(
            "recorded {} trajectories over {} frames",
            self.recorder.store().len(),
            self.recorder.frame_count()
        );

        let events = self.detector.predict(self.recorder.store());
        log::info!("detected {} stops", events.len());
        Ok(events)
    }

    /// Get a reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the trajectory recorder.
    pub fn recorder(&self) -> &TrajectoryRecorder {
        &self.recorder
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &StopDetector {
        &self.detector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::{TrackedObject, TrackedObjectBuilder};
    use crate::stop::Line;

    struct MockTracker {
        frames: std::vec::IntoIter<Vec<TrackedObject>>,
    }

    impl TrajectorySource for MockTracker {
        type Error = std::convert::Infallible;

        fn next_frame(&mut self) -> Result<Option<Vec<TrackedObject>>, Self::Error> {
            Ok(self.frames.next())
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl std::fmt::Display for Broken {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "decoder crashed")
        }
    }

    struct FailingTracker;

    impl TrajectorySource for FailingTracker {
        type Error = Broken;

        fn next_frame(&mut self) -> Result<Option<Vec<TrackedObject>>, Self::Error> {
            Err(Broken)
        }
    }

    /// Serves scripted frames; `None` entries fail once with `Broken`.
    struct FlakyTracker {
        script: std::vec::IntoIter<Option<Vec<TrackedObject>>>,
    }

    impl TrajectorySource for FlakyTracker {
        type Error = Broken;

        fn next_frame(&mut self) -> Result<Option<Vec<TrackedObject>>, Self::Error> {
            match self.script.next() {
                Some(Some(objects)) => Ok(Some(objects)),
                Some(None) => Err(Broken),
                None => Ok(None),
            }
        }
    }

    fn config() -> DetectorConfig {
        DetectorConfig::new(Line::new(0.0, 100.0, 640.0, 100.0))
            .with_stop_frames(3)
            .with_max_movement(2.0)
    }

    fn car(id: u64, cx: f64, cy: f64) -> TrackedObject {
        TrackedObjectBuilder::new(id)
            .xywh(cx, cy, 40.0, 30.0)
            .class_id(2)
            .build()
    }

    #[test]
    fn test_stop_pipeline() {
        let frames = vec![
            vec![car(1, 300.0, 150.0), car(2, 50.0, 40.0)],
            vec![car(1, 300.0, 150.0), car(2, 60.0, 40.0)],
            vec![],
            vec![car(1, 301.0, 150.0), car(2, 70.0, 40.0)],
        ];
        let tracker = MockTracker {
            frames: frames.into_iter(),
        };

        let mut pipeline = StopPipeline::new(tracker, config()).unwrap();
        let events = pipeline.run().unwrap().to_vec();

        assert_eq!(
            events,
            vec![StopEvent {
                track_id: 1,
                frame: 3
            }]
        );
        assert_eq!(pipeline.recorder().frame_count(), 4);
    }

    #[test]
    fn test_source_error_is_propagated() {
        let mut pipeline = StopPipeline::new(FailingTracker, config()).unwrap();
        let err = pipeline.run().unwrap_err();
        assert!(matches!(err, PipelineError::Source(Broken)));
        assert_eq!(err.to_string(), "trajectory source failed: decoder crashed");
    }

    #[test]
    fn test_run_resumes_after_source_error() {
        let script = vec![
            Some(vec![car(1, 300.0, 150.0)]),
            Some(vec![car(1, 300.0, 150.0)]),
            None,
            Some(vec![car(1, 301.0, 150.0)]),
            Some(vec![car(1, 301.0, 151.0)]),
        ];
        let tracker = FlakyTracker {
            script: script.into_iter(),
        };
        let mut pipeline = StopPipeline::new(tracker, config()).unwrap();

        assert!(matches!(pipeline.run(), Err(PipelineError::Source(Broken))));
        assert_eq!(pipeline.recorder().frame_count(), 2);

        let events = pipeline.run().unwrap().to_vec();
        assert_eq!(
            events,
            vec![StopEvent {
                track_id: 1,
                frame: 2
            }]
        );
        let frames: Vec<u64> = pipeline.recorder().store().get(1).unwrap().frames().collect();
        assert_eq!(frames, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_run_resumes_after_invalid_frame() {
        let frames = vec![
            vec![car(1, 300.0, 150.0), car(2, 100.0, 150.0)],
            vec![car(2, 100.0, 150.0), car(2, 100.0, 150.0), car(1, 300.0, 150.0)],
            vec![car(1, 300.0, 150.0), car(2, 100.0, 150.0)],
            vec![car(1, 300.0, 150.0), car(2, 100.0, 150.0)],
        ];
        let tracker = MockTracker {
            frames: frames.into_iter(),
        };
        let mut pipeline = StopPipeline::new(tracker, config()).unwrap();

        let err = pipeline.run().unwrap_err();
        assert!(matches!(err, PipelineError::Trajectory(_)));
        // Only the first frame is kept; nothing of the rejected frame leaks in.
        assert_eq!(pipeline.recorder().frame_count(), 1);
        assert_eq!(pipeline.recorder().store().get(1).map(|t| t.len()), Some(1));
        assert_eq!(pipeline.recorder().store().get(2).map(|t| t.len()), Some(1));

        let events = pipeline.run().unwrap().to_vec();
        assert_eq!(
            events,
            vec![
                StopEvent {
                    track_id: 1,
                    frame: 2
                },
                StopEvent {
                    track_id: 2,
                    frame: 2
                },
            ]
        );
        assert_eq!(pipeline.recorder().frame_count(), 3);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let tracker = MockTracker {
            frames: Vec::new().into_iter(),
        };
        let result = StopPipeline::new(tracker, config().with_stop_frames(0));
        assert!(matches!(result, Err(ConfigError::StopFramesTooSmall(0))));
    }
}
