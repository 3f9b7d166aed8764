//! Per-session memory of every track id the tracker has reported.

use std::collections::HashMap;

use crate::counter::zone::Zone;

/// Identifier assigned by the external tracker.
pub type TrackId = u64;

/// What the counter remembers about one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackRecord {
    /// Zone of the most recent observation
    pub last_zone: Zone,
    /// Whether this track has already produced a crossing
    pub counted: bool,
}

/// Mapping from tracker id to its last zone and counted flag.
///
/// Entries are never removed one by one; the whole table is cleared when a
/// new session starts, so its size grows with the distinct ids seen.
#[derive(Debug, Clone, Default)]
pub struct TrackTable {
    records: HashMap<TrackId, TrackRecord>,
}

impl TrackTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `zone` as the latest zone of `id`.
    ///
    /// Returns the zone stored before this call, or `None` when the id is
    /// seen for the first time (the record is created uncounted).
    pub fn observe(&mut self, id: TrackId, zone: Zone) -> Option<Zone> {
        match self.records.get_mut(&id) {
            Some(record) => {
                let previous = record.last_zone;
                record.last_zone = zone;
                Some(previous)
            }
            None => {
                self.records.insert(
                    id,
                    TrackRecord {
                        last_zone: zone,
                        counted: false,
                    },
                );
                None
            }
        }
    }

    /// Flag `id` as counted. Unknown ids are ignored.
    pub fn mark_counted(&mut self, id: TrackId) {
        if let Some(record) = self.records.get_mut(&id) {
            record.counted = true;
        }
    }

    pub fn is_counted(&self, id: TrackId) -> bool {
        self.records.get(&id).is_some_and(|r| r.counted)
    }

    pub fn get(&self, id: TrackId) -> Option<&TrackRecord> {
        self.records.get(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
