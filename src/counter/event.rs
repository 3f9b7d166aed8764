//! Crossing events and live counter snapshots.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Direction of travel across the counting line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Bottom to top of the image
    Up,
    /// Top to bottom of the image
    Down,
}

impl Direction {
    /// Human-readable label for counter displays.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "Bottom to Top",
            Direction::Down => "Top to Bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("Up"),
            Direction::Down => f.write_str("Down"),
        }
    }
}

/// A counted crossing, carrying the totals right after it was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingEvent {
    /// Wall-clock time at emission
    pub timestamp: NaiveTime,
    pub direction: Direction,
    pub total_up: u64,
    pub total_down: u64,
}

/// Running totals per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub up: u64,
    pub down: u64,
}

impl Counts {
    pub fn total(&self) -> u64 {
        self.up + self.down
    }

    pub fn get(&self, direction: Direction) -> u64 {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {}: {}",
            Direction::Down.label(),
            self.get(Direction::Down),
            Direction::Up.label(),
            self.get(Direction::Up)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display_and_label() {
        assert_eq!(Direction::Up.to_string(), "Up");
        assert_eq!(Direction::Down.to_string(), "Down");
        assert_eq!(Direction::Up.label(), "Bottom to Top");
        assert_eq!(Direction::Down.label(), "Top to Bottom");
    }

    #[test]
    fn test_counts_display() {
        let counts = Counts { up: 3, down: 5 };
        assert_eq!(counts.total(), 8);
        assert_eq!(counts.get(Direction::Down), 5);
        assert_eq!(counts.to_string(), "Top to Bottom: 5 | Bottom to Top: 3");
    }
}
