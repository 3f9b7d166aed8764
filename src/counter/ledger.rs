//! Cumulative crossing totals and the ordered event log.

use std::io::Write;

use chrono::NaiveTime;
use serde::Serialize;

use crate::counter::event::{Counts, CrossingEvent, Direction};
use crate::error::{CountError, Result};

/// Format of the `Timestamp` export column.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Column names of the exported table, in order.
pub const EXPORT_HEADER: [&str; 4] = ["Timestamp", "Direction", "Total_Up", "Total_Down"];

/// One exported ledger row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRow {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Direction")]
    pub direction: Direction,
    #[serde(rename = "Total_Up")]
    pub total_up: u64,
    #[serde(rename = "Total_Down")]
    pub total_down: u64,
}

impl From<&CrossingEvent> for LedgerRow {
    fn from(event: &CrossingEvent) -> Self {
        Self {
            timestamp: event.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            direction: event.direction,
            total_up: event.total_up,
            total_down: event.total_down,
        }
    }
}

/// Totals per direction plus the append-only log of every counted crossing.
///
/// `count_up + count_down` always equals the log length: totals only move
/// through [`CounterLedger::record`] / [`CounterLedger::apply`], each of
/// which appends exactly one entry, and `apply` refuses events whose totals
/// are not the current ones advanced by one.
#[derive(Debug, Clone, Default)]
pub struct CounterLedger {
    counts: Counts,
    log: Vec<CrossingEvent>,
}

impl CounterLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the total for `direction`, log the crossing and return the
    /// event carrying the post-increment totals.
    pub fn record(&mut self, direction: Direction, timestamp: NaiveTime) -> CrossingEvent {
        let counts = self.next_counts(direction);
        let event = CrossingEvent {
            timestamp,
            direction,
            total_up: counts.up,
            total_down: counts.down,
        };
        self.push(event);
        event
    }

    /// Append an event whose payload is already the post-increment snapshot.
    ///
    /// The event must carry exactly the current totals plus one in its own
    /// direction; anything else is refused and leaves the ledger unchanged.
    pub fn apply(&mut self, event: CrossingEvent) -> Result<()> {
        let expected = self.next_counts(event.direction);
        let carried = Counts {
            up: event.total_up,
            down: event.total_down,
        };
        if carried != expected {
            return Err(CountError::InconsistentTotals {
                direction: event.direction,
                expected,
                carried,
            });
        }
        self.push(event);
        Ok(())
    }

    fn next_counts(&self, direction: Direction) -> Counts {
        let mut counts = self.counts;
        match direction {
            Direction::Up => counts.up += 1,
            Direction::Down => counts.down += 1,
        }
        counts
    }

    fn push(&mut self, event: CrossingEvent) {
        self.counts = Counts {
            up: event.total_up,
            down: event.total_down,
        };
        self.log.push(event);
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    pub fn count_up(&self) -> u64 {
        self.counts.up
    }

    pub fn count_down(&self) -> u64 {
        self.counts.down
    }

    pub fn log(&self) -> &[CrossingEvent] {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Zero the totals and drop the log.
    ///
    /// Only half of a session reset; the track table must be cleared with it,
    /// which `CountingSession::reset` does.
    pub fn reset(&mut self) {
        self.counts = Counts::default();
        self.log.clear();
    }

    /// Rows in emission order, ready for tabular export.
    pub fn export(&self) -> Vec<LedgerRow> {
        self.log.iter().map(LedgerRow::from).collect()
    }

    /// Write the header and every row as CSV. An empty log writes only the
    /// header.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        wtr.write_record(EXPORT_HEADER)?;
        for row in self.export() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
