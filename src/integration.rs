//! Integration module for connecting tracker output with the line counter.
//!
//! This module provides traits and utilities for feeding the output of any
//! detector/tracker stack (YOLO + ByteTrack, BoT-SORT, replayed logs, ...)
//! into a counting session.

mod builder;
mod pipeline;
mod source;

pub use builder::ObservationBuilder;
pub use pipeline::CountingPipeline;
pub use source::{FrameSource, IntoObservations, ReplaySource};
