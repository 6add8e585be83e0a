//! Test sinks — `OutputSink` implementations for tests.

use myworld_core::error::DomainError;
use myworld_core::sink::OutputSink;

/// A sink that records every line written to it, in call order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Vec<String>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lines written so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl OutputSink for RecordingSink {
    fn write_line(&mut self, line: &str) -> Result<(), DomainError> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}

/// A sink that rejects every line with an output error and counts the
/// attempts. Useful for testing error-handling paths.
#[derive(Debug, Default)]
pub struct FailingSink {
    attempts: usize,
}

impl FailingSink {
    /// Create a failing sink with no recorded attempts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many writes were attempted.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl OutputSink for FailingSink {
    fn write_line(&mut self, _line: &str) -> Result<(), DomainError> {
        self.attempts += 1;
        Err(DomainError::Output("stdout closed".into()))
    }
}
