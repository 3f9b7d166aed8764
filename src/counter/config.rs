use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for a counting session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Destination of `CountingSession::export_csv`
    pub export_path: PathBuf,
    /// Detector classes that are counted; `None` counts every class
    pub class_filter: Option<Vec<u32>>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from("traffic_log.csv"),
            class_filter: None,
        }
    }
}
