//! Tracker output consumed by the counter.

use crate::counter::track_table::TrackId;
use crate::error::{CountError, Result};

/// One tracked object in one frame, box in centre format (XYWH).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Stable id assigned by the tracker
    pub track_id: TrackId,
    /// Box centre x
    pub x_center: f32,
    /// Box centre y
    pub y_center: f32,
    /// Box width
    pub width: f32,
    /// Box height
    pub height: f32,
    /// Detector class index
    pub class_id: u32,
}

impl Observation {
    pub fn new(
        track_id: TrackId,
        x_center: f32,
        y_center: f32,
        width: f32,
        height: f32,
        class_id: u32,
    ) -> Self {
        Self {
            track_id,
            x_center,
            y_center,
            width,
            height,
            class_id,
        }
    }

    /// Vertical coordinate used for zone classification.
    ///
    /// Fails when the tracker handed over a NaN or infinite centre.
    pub fn position(&self) -> Result<f32> {
        if self.y_center.is_finite() {
            Ok(self.y_center)
        } else {
            Err(CountError::NonFinitePosition {
                track_id: self.track_id,
                y_center: self.y_center,
            })
        }
    }
}

/// One frame of tracker output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackedFrame {
    pub frame_width: u32,
    pub frame_height: u32,
    /// `None` when the tracker assigned no ids this frame
    pub observations: Option<Vec<Observation>>,
}

impl TrackedFrame {
    pub fn new(frame_width: u32, frame_height: u32, observations: Vec<Observation>) -> Self {
        Self {
            frame_width,
            frame_height,
            observations: Some(observations),
        }
    }

    /// A frame for which the tracker reported nothing.
    pub fn untracked(frame_width: u32, frame_height: u32) -> Self {
        Self {
            frame_width,
            frame_height,
            observations: None,
        }
    }

    pub fn observations(&self) -> &[Observation] {
        self.observations.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_finite() {
        let obs = Observation::new(1, 10.0, 42.5, 4.0, 4.0, 2);
        assert_eq!(obs.position().unwrap(), 42.5);
    }

    #[test]
    fn test_position_rejects_nan_and_inf() {
        let nan = Observation::new(9, 10.0, f32::NAN, 4.0, 4.0, 2);
        assert!(matches!(
            nan.position(),
            Err(CountError::NonFinitePosition { track_id: 9, .. })
        ));

        let inf = Observation::new(9, 10.0, f32::INFINITY, 4.0, 4.0, 2);
        assert!(inf.position().is_err());
    }

    #[test]
    fn test_untracked_frame_is_empty() {
        let frame = TrackedFrame::untracked(640, 480);
        assert!(frame.observations().is_empty());
    }
}
