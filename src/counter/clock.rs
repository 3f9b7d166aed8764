//! Wall-clock source for crossing timestamps.

use chrono::{Local, NaiveTime};

/// Supplies the time stamped onto each crossing event.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock pinned to a caller-chosen time, for replays and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: NaiveTime,
}

impl FixedClock {
    pub fn new(time: NaiveTime) -> Self {
        Self { time }
    }

    /// Build from hour, minute and second. `None` when any part is out of
    /// range.
    pub fn hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, min, sec).map(Self::new)
    }

    pub fn set(&mut self, time: NaiveTime) {
        self.time = time;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock::hms(8, 15, 0).unwrap();
        assert_eq!(clock.now(), NaiveTime::from_hms_opt(8, 15, 0).unwrap());

        clock.set(NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(clock.now().to_string(), "23:59:59");
    }

    #[test]
    fn test_fixed_clock_rejects_out_of_range() {
        assert!(FixedClock::hms(25, 0, 0).is_none());
        assert!(FixedClock::hms(12, 60, 0).is_none());
        assert!(FixedClock::hms(12, 0, 60).is_none());
    }
}
