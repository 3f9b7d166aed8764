//! A counting session: one video's track table and ledger, reset together.

use std::fs::File;
use std::io::BufWriter;

use tracing::info;

use crate::counter::clock::{Clock, SystemClock};
use crate::counter::config::CounterConfig;
use crate::counter::detector::{BatchReport, CrossingDetector};
use crate::counter::event::Counts;
use crate::counter::ledger::{CounterLedger, LedgerRow};
use crate::counter::observation::{Observation, TrackedFrame};
use crate::counter::track_table::TrackTable;
use crate::error::Result;

/// Owns the per-track state and the ledger of one tracking session.
///
/// Track ids are only unique within one tracker run, so a new video must
/// start from [`CountingSession::reset`], which clears the table and the
/// ledger in one step.
#[derive(Debug, Clone)]
pub struct CountingSession<C = SystemClock> {
    detector: CrossingDetector,
    ledger: CounterLedger,
    clock: C,
    config: CounterConfig,
}

impl CountingSession<SystemClock> {
    pub fn new(config: CounterConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for CountingSession<SystemClock> {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}

impl<C: Clock> CountingSession<C> {
    pub fn with_clock(config: CounterConfig, clock: C) -> Self {
        Self {
            detector: CrossingDetector::new().with_class_filter(config.class_filter.clone()),
            ledger: CounterLedger::new(),
            clock,
            config,
        }
    }

    /// Process one frame of observations and return the crossings it
    /// produced.
    pub fn process_batch(
        &mut self,
        observations: &[Observation],
        frame_height: u32,
    ) -> BatchReport {
        self.detector
            .process_batch(observations, frame_height, &mut self.ledger, &self.clock)
    }

    pub fn process_frame(&mut self, frame: &TrackedFrame) -> BatchReport {
        self.process_batch(frame.observations(), frame.frame_height)
    }

    /// Start a new session: forget every track and zero the ledger.
    pub fn reset(&mut self) {
        self.detector.clear();
        self.ledger.reset();
        info!("counting session reset");
    }

    pub fn counts(&self) -> Counts {
        self.ledger.counts()
    }

    pub fn ledger(&self) -> &CounterLedger {
        &self.ledger
    }

    pub fn tracks(&self) -> &TrackTable {
        self.detector.tracks()
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn export(&self) -> Vec<LedgerRow> {
        self.ledger.export()
    }

    /// Write the ledger as CSV to the configured export path.
    pub fn export_csv(&self) -> Result<()> {
        let file = File::create(&self.config.export_path)?;
        self.ledger.write_csv(BufWriter::new(file))?;
        info!(
            path = %self.config.export_path.display(),
            rows = self.ledger.len(),
            "ledger exported"
        );
        Ok(())
    }
}
