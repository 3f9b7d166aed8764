//! CountingPipeline for combining a tracked frame source with the counter.

use tracing::debug;

use crate::counter::{BatchReport, Clock, CounterConfig, CountingSession, Counts, SystemClock};

use super::FrameSource;

/// Drives one frame source into one counting session.
///
/// Swapping the source through [`CountingPipeline::replace_source`] always
/// resets the session, so track ids from the previous video can never leak
/// into the new count.
pub struct CountingPipeline<S: FrameSource, C = SystemClock> {
    source: S,
    session: CountingSession<C>,
}

impl<S: FrameSource> CountingPipeline<S, SystemClock> {
    /// Create a new counting pipeline with the given source and config.
    pub fn new(source: S, config: CounterConfig) -> Self {
        Self::with_session(source, CountingSession::new(config))
    }

    /// Create a new counting pipeline with default configuration.
    pub fn with_default_config(source: S) -> Self {
        Self::new(source, CounterConfig::default())
    }
}

impl<S: FrameSource, C: Clock> CountingPipeline<S, C> {
    /// Create a pipeline around an existing session, which is reset first.
    pub fn with_session(source: S, mut session: CountingSession<C>) -> Self {
        session.reset();
        Self { source, session }
    }

    /// Pull and count a single frame.
    ///
    /// # Returns
    /// `Ok(None)` once the source is exhausted, otherwise the frame's
    /// crossings, or an acquisition error.
    pub fn step(&mut self) -> Result<Option<BatchReport>, S::Error> {
        match self.source.next_frame()? {
            Some(frame) => Ok(Some(self.session.process_frame(&frame))),
            None => {
                debug!(counts = %self.session.counts(), "frame source exhausted");
                Ok(None)
            }
        }
    }

    /// Count every remaining frame and return the final totals.
    pub fn run(&mut self) -> Result<Counts, S::Error> {
        while self.step()?.is_some() {}
        Ok(self.session.counts())
    }

    /// Start counting a new video. The session is reset and the previous
    /// source is handed back.
    pub fn replace_source(&mut self, source: S) -> S {
        self.session.reset();
        std::mem::replace(&mut self.source, source)
    }

    pub fn counts(&self) -> Counts {
        self.session.counts()
    }

    /// Get a reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the counting session.
    pub fn session(&self) -> &CountingSession<C> {
        &self.session
    }

    /// Get a mutable reference to the counting session.
    pub fn session_mut(&mut self) -> &mut CountingSession<C> {
        &mut self.session
    }
}
