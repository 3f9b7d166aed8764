mod clock;
mod config;
mod detector;
mod event;
mod ledger;
mod observation;
mod session;
mod track_table;
mod zone;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CounterConfig;
pub use detector::{BatchReport, CrossingDetector};
pub use event::{Counts, CrossingEvent, Direction};
pub use ledger::{CounterLedger, EXPORT_HEADER, LedgerRow, TIMESTAMP_FORMAT};
pub use observation::{Observation, TrackedFrame};
pub use session::CountingSession;
pub use track_table::{TrackId, TrackRecord, TrackTable};
pub use zone::{Zone, classify, middle_line};
