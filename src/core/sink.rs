//! core::sink
//!
//! Write-only output destinations for handlers and the dispatch loop.
//!
//! # Implementations
//!
//! - [`WriterSink`] - Adapts any [`std::io::Write`] (stdout, files, buffers)
//! - [`BufferSink`] - Collects output in memory
//!
//! # Example
//!
//! ```
//! use commandant::core::sink::{BufferSink, OutputSink};
//!
//! let mut sink = BufferSink::new();
//! sink.write("hello").unwrap();
//! assert_eq!(sink.contents(), "hello");
//! ```

use std::io;

use super::errors::DispatchError;

/// A destination for output text.
pub trait OutputSink {
    /// Write text to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Unexpected`] if the underlying destination fails.
    fn write(&mut self, text: &str) -> Result<(), DispatchError>;
}

/// Sink backed by an [`io::Write`] implementation.
#[derive(Debug)]
pub struct WriterSink<W: io::Write> {
    writer: W,
}

impl<W: io::Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    /// Sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> OutputSink for WriterSink<W> {
    fn write(&mut self, text: &str) -> Result<(), DispatchError> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| DispatchError::unexpected("failed to write output", e))
    }
}

/// Sink that accumulates everything written to it.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    buffer: String,
}

impl BufferSink {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Discard the collected output.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl OutputSink for BufferSink {
    fn write(&mut self, text: &str) -> Result<(), DispatchError> {
        self.buffer.push_str(text);
        Ok(())
    }
}
