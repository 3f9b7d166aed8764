//! Count vehicles crossing a horizontal line in tracked video.
//!
//! A multi-object tracker (YOLO + ByteTrack or similar) supplies, per frame,
//! boxes with stable track ids. The counter classifies each box centre as
//! above or below the middle line of the frame, counts every track the first
//! time it changes side, and keeps a timestamped ledger that can be exported
//! as CSV.
//!
//! ```ignore
//! use traffic_count_rs::{CountingSession, CounterConfig, Observation};
//!
//! let mut session = CountingSession::new(CounterConfig::default());
//! session.process_batch(&[Observation::new(1, 320.0, 400.0, 40.0, 30.0, 2)], 480);
//! session.process_batch(&[Observation::new(1, 320.0, 100.0, 40.0, 30.0, 2)], 480);
//! assert_eq!(session.counts().up, 1);
//! ```

pub mod counter;
pub mod error;
pub mod integration;

pub use counter::{
    BatchReport, Clock, CounterConfig, CounterLedger, CountingSession, Counts, CrossingDetector,
    CrossingEvent, Direction, FixedClock, LedgerRow, Observation, SystemClock, TrackId,
    TrackTable, TrackedFrame, Zone, classify,
};
pub use error::{CountError, Result};
pub use integration::{
    CountingPipeline, FrameSource, IntoObservations, ObservationBuilder, ReplaySource,
};
