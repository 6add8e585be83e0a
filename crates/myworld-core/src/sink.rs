//! Output sink abstraction.
//!
//! In production, lines go to stdout through a `ConsoleSink`. In tests a
//! recording or failing implementation is injected.

use std::io::{self, Write};

use crate::error::DomainError;

/// Destination for the text lines a food chain produces.
pub trait OutputSink {
    /// Writes one line. The sink appends the line terminator.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Output` if the line could not be written.
    fn write_line(&mut self, line: &str) -> Result<(), DomainError>;
}

/// Sink that writes each line to an `io::Write` and flushes it.
#[derive(Debug)]
pub struct ConsoleSink<W> {
    writer: W,
}

impl ConsoleSink<io::Stdout> {
    /// Creates a sink over the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Creates a sink over an arbitrary writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), DomainError> {
        writeln!(self.writer, "{line}")
            .and_then(|()| self.writer.flush())
            .map_err(|e| DomainError::Output(e.to_string()))
    }
}
