//! Trait for the external tracker feeding the counter.

use crate::counter::{Observation, TrackedFrame};

/// Trait for per-frame multi-object tracker output.
///
/// Implement this trait to connect a video decoder plus detector/tracker
/// to the counter.
///
/// # Example
///
/// ```ignore
/// use traffic_count_rs::{FrameSource, TrackedFrame};
///
/// struct MyTracker {
///     // Your decoder and tracker here
/// }
///
/// impl FrameSource for MyTracker {
///     type Error = std::io::Error;
///
///     fn next_frame(&mut self) -> Result<Option<TrackedFrame>, Self::Error> {
///         // Decode, detect, track; `Ok(None)` once the video is exhausted
///         Ok(None)
///     }
/// }
/// ```
pub trait FrameSource {
    /// Error type for acquisition failures.
    type Error;

    /// Produce the next frame of tracked objects.
    ///
    /// # Returns
    /// `Ok(None)` at end of stream.
    fn next_frame(&mut self) -> Result<Option<TrackedFrame>, Self::Error>;
}

/// Helper trait for converting tracker-specific outputs to `Observation`.
///
/// Implement this for your tracker's output format to enable easy conversion.
pub trait IntoObservations {
    /// Convert the output into a vector of observations.
    fn into_observations(self) -> Vec<Observation>;
}

impl IntoObservations for Vec<Observation> {
    fn into_observations(self) -> Vec<Observation> {
        self
    }
}

/// Parallel arrays as produced by YOLO-style trackers: centre boxes, ids and
/// classes, zipped and truncated to the shortest.
impl IntoObservations for (&[[f32; 4]], &[u64], &[u32]) {
    fn into_observations(self) -> Vec<Observation> {
        let (boxes, ids, classes) = self;
        boxes
            .iter()
            .zip(ids)
            .zip(classes)
            .map(|((b, &id), &class_id)| {
                Observation::new(id, b[0], b[1], b[2], b[3], class_id)
            })
            .collect()
    }
}

/// Frames replayed from memory, mainly for tests and offline reprocessing.
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    frames: std::collections::VecDeque<TrackedFrame>,
}

impl ReplaySource {
    pub fn new(frames: impl IntoIterator<Item = TrackedFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FrameSource for ReplaySource {
    type Error = std::convert::Infallible;

    fn next_frame(&mut self) -> Result<Option<TrackedFrame>, Self::Error> {
        Ok(self.frames.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_arrays_into_observations() {
        let boxes: [[f32; 4]; 2] = [[10.0, 20.0, 4.0, 4.0], [30.0, 70.0, 6.0, 6.0]];
        let ids: [u64; 2] = [5, 9];
        let classes: [u32; 2] = [2, 7];

        let obs = (&boxes[..], &ids[..], &classes[..]).into_observations();
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[1].track_id, 9);
        assert_eq!(obs[1].y_center, 70.0);
        assert_eq!(obs[1].class_id, 7);
    }

    #[test]
    fn test_replay_source_ends() {
        let mut source = ReplaySource::new([TrackedFrame::untracked(640, 480)]);
        assert_eq!(source.remaining(), 1);
        assert!(source.next_frame().unwrap().is_some());
        assert!(source.next_frame().unwrap().is_none());
    }
}
