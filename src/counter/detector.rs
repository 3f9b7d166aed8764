//! Line-crossing detection over per-frame tracker output.

use tracing::{debug, info, warn};

use crate::counter::clock::Clock;
use crate::counter::event::{CrossingEvent, Direction};
use crate::counter::ledger::CounterLedger;
use crate::counter::observation::Observation;
use crate::counter::track_table::TrackTable;
use crate::counter::zone::{Zone, classify};
use crate::error::{CountError, Result};

/// Outcome of processing one frame.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Crossings counted this frame, in observation order
    pub events: Vec<CrossingEvent>,
    /// Observations dropped because they could not be classified
    pub rejected: Vec<CountError>,
}

impl BatchReport {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.rejected.is_empty()
    }
}

/// Decides when a tracked object has crossed the middle line.
///
/// Each track id is counted at most once: after its first crossing the
/// track's zone keeps being followed but further transitions are ignored.
#[derive(Debug, Clone, Default)]
pub struct CrossingDetector {
    tracks: TrackTable,
    class_filter: Option<Vec<u32>>,
}

impl CrossingDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only observations of these detector classes are considered.
    pub fn with_class_filter(mut self, classes: Option<Vec<u32>>) -> Self {
        self.class_filter = classes;
        self
    }

    pub fn tracks(&self) -> &TrackTable {
        &self.tracks
    }

    /// Forget every track. Pair with `CounterLedger::reset`.
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Advance one track by one observation.
    ///
    /// Returns the crossing direction when this observation completes the
    /// track's first transition between zones. The track is marked counted
    /// here, so the caller must record the direction in the ledger.
    fn observe(
        &mut self,
        observation: &Observation,
        frame_height: u32,
    ) -> Result<Option<Direction>> {
        let y_center = observation.position()?;
        let id = observation.track_id;
        let current = classify(y_center, frame_height);

        let Some(previous) = self.tracks.observe(id, current) else {
            debug!(track_id = id, zone = ?current, "new track");
            return Ok(None);
        };

        if previous == current || self.tracks.is_counted(id) {
            return Ok(None);
        }

        self.tracks.mark_counted(id);
        let direction = match (previous, current) {
            (Zone::Top, Zone::Bottom) => Direction::Down,
            _ => Direction::Up,
        };
        Ok(Some(direction))
    }

    /// Run one frame of observations through the detector, recording every
    /// crossing in `ledger` as it is found.
    ///
    /// An empty slice is a frame without tracker output and leaves all state
    /// untouched.
    pub fn process_batch<C: Clock>(
        &mut self,
        observations: &[Observation],
        frame_height: u32,
        ledger: &mut CounterLedger,
        clock: &C,
    ) -> BatchReport {
        let mut report = BatchReport::default();

        for observation in observations {
            if !self.accepts(observation) {
                continue;
            }
            match self.observe(observation, frame_height) {
                Ok(Some(direction)) => {
                    let event = ledger.record(direction, clock.now());
                    info!(
                        track_id = observation.track_id,
                        %direction,
                        total_up = event.total_up,
                        total_down = event.total_down,
                        "line crossed"
                    );
                    report.events.push(event);
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(error = %err, "observation rejected");
                    report.rejected.push(err);
                }
            }
        }

        report
    }

    fn accepts(&self, observation: &Observation) -> bool {
        self.class_filter
            .as_ref()
            .is_none_or(|classes| classes.contains(&observation.class_id))
    }
}
