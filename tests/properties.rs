//! Property-based tests for the counting invariants.
//!
//! Random frame sequences of tracks jumping around a 100 px frame.

use std::collections::HashMap;

use proptest::prelude::*;
use traffic_count_rs::{
    CounterConfig, CountingSession, FixedClock, Observation, TrackedFrame, Zone, classify,
};

const FRAME_HEIGHT: u32 = 100;

fn arb_observation() -> impl Strategy<Value = Observation> {
    (0u64..6, -20.0f32..120.0).prop_map(|(id, y)| Observation::new(id, 50.0, y, 8.0, 8.0, 2))
}

fn arb_frames() -> impl Strategy<Value = Vec<Vec<Observation>>> {
    prop::collection::vec(prop::collection::vec(arb_observation(), 0..6), 0..40)
}

/// Positions that all lie in one zone: above the line (including out of
/// frame), or on/below it (including the line itself and out of frame).
fn arb_single_zone_run() -> impl Strategy<Value = (Zone, Vec<f32>)> {
    let top = prop::collection::vec(-50.0f32..50.0, 1..60);
    let bottom = prop::collection::vec(prop_oneof![Just(50.0f32), 50.0f32..200.0], 1..60);
    prop_oneof![
        top.prop_map(|ys| (Zone::Top, ys)),
        bottom.prop_map(|ys| (Zone::Bottom, ys)),
    ]
}

fn session() -> CountingSession<FixedClock> {
    CountingSession::with_clock(CounterConfig::default(), FixedClock::hms(12, 0, 0).unwrap())
}

proptest! {
    #[test]
    fn totals_match_log_length(frames in arb_frames()) {
        let mut session = session();
        for frame in &frames {
            session.process_batch(frame, FRAME_HEIGHT);
            let counts = session.counts();
            prop_assert_eq!(counts.total() as usize, session.ledger().len());
        }
    }

    #[test]
    fn each_track_counted_at_most_once(frames in arb_frames()) {
        let mut session = session();
        let mut per_track: HashMap<u64, usize> = HashMap::new();

        for frame in &frames {
            let before: Vec<bool> = (0..6).map(|id| session.tracks().is_counted(id)).collect();
            let report = session.process_batch(frame, FRAME_HEIGHT);
            let newly: Vec<u64> = (0..6)
                .filter(|&id| !before[id as usize] && session.tracks().is_counted(id))
                .collect();
            prop_assert_eq!(newly.len(), report.events.len());
            for id in newly {
                *per_track.entry(id).or_default() += 1;
            }
        }

        prop_assert!(per_track.values().all(|&n| n == 1));
        prop_assert_eq!(per_track.len(), session.ledger().len());
    }

    #[test]
    fn track_staying_in_one_zone_never_counts((zone, ys) in arb_single_zone_run()) {
        let mut session = session();
        for y in ys {
            prop_assert_eq!(classify(y, FRAME_HEIGHT), zone);
            let report = session.process_frame(&TrackedFrame::new(
                100,
                FRAME_HEIGHT,
                vec![Observation::new(1, 50.0, y, 8.0, 8.0, 2)],
            ));
            prop_assert!(report.events.is_empty());
        }
    }

    #[test]
    fn last_zone_follows_every_observation(frames in arb_frames()) {
        let mut session = session();
        for frame in &frames {
            session.process_batch(frame, FRAME_HEIGHT);
            let mut latest = HashMap::new();
            for obs in frame {
                latest.insert(obs.track_id, classify(obs.y_center, FRAME_HEIGHT));
            }
            for (id, zone) in latest {
                prop_assert_eq!(session.tracks().get(id).map(|r| r.last_zone), Some(zone));
            }
        }
    }

    #[test]
    fn reset_clears_everything(frames in arb_frames()) {
        let mut session = session();
        for frame in &frames {
            session.process_batch(frame, FRAME_HEIGHT);
        }
        session.reset();

        prop_assert_eq!(session.counts().total(), 0);
        prop_assert!(session.ledger().is_empty());
        prop_assert!(session.tracks().is_empty());
    }
}
