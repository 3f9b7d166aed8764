//! Error type shared by the counter and its export helpers.

use crate::counter::{Counts, Direction, TrackId};

#[derive(Debug, thiserror::Error)]
pub enum CountError {
    /// The observation carries no usable vertical coordinate.
    #[error("track {track_id}: non-finite y centre {y_center}")]
    NonFinitePosition { track_id: TrackId, y_center: f32 },

    /// A crossing event whose totals do not follow from the ledger's.
    #[error("{direction} event carries totals ({carried}), expected ({expected})")]
    InconsistentTotals {
        direction: Direction,
        expected: Counts,
        carried: Counts,
    },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CountError>;
