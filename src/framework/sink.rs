//! # Sink Capability
//!
//! A [`Sink`] accepts a finished string and performs the externally visible
//! effect (printing, shipping to a log aggregator, ...). Components that
//! produce output only ever see this trait.

use std::io::Write;
use thiserror::Error;
use tracing::info;

/// Errors a sink can report while writing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SinkError {
    /// The underlying writer failed.
    #[error("Sink I/O error: {0}")]
    Io(String),

    /// The sink refused the text.
    #[error("Sink rejected write: {0}")]
    Rejected(String),
}

impl From<std::io::Error> for SinkError {
    fn from(e: std::io::Error) -> Self {
        SinkError::Io(e.to_string())
    }
}

/// Destination for joined output.
pub trait Sink {
    fn write(&mut self, text: &str) -> Result<(), SinkError>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        (**self).write(text)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        (**self).write(text)
    }
}

/// Sink over any [`std::io::Write`], e.g. `std::io::stdout()` or a `Vec<u8>`.
pub struct WriterSink<W: Write> {
    writer: W,
    newline: bool,
}

impl<W: Write> WriterSink<W> {
    /// Writes each text verbatim.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            newline: false,
        }
    }

    /// Writes each text followed by `\n`.
    pub fn lines(writer: W) -> Self {
        Self {
            writer,
            newline: true,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        self.writer.write_all(text.as_bytes())?;
        if self.newline {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink that emits each text as a `tracing` info event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        info!(text, "Joined output");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_sink_verbatim_and_lines() {
        let mut raw = WriterSink::new(Vec::new());
        raw.write("a-c").unwrap();
        raw.write("").unwrap();
        assert_eq!(raw.into_inner(), b"a-c");

        let mut lines = WriterSink::lines(Vec::new());
        lines.write("first").unwrap();
        lines.write("second").unwrap();
        assert_eq!(lines.into_inner(), b"first\nsecond\n");
    }

    #[test]
    fn test_writer_sink_surfaces_io_error() {
        let mut sink = WriterSink::new(BrokenWriter);
        let err = sink.write("anything").unwrap_err();
        assert!(matches!(err, SinkError::Io(msg) if msg.contains("pipe closed")));
    }

    fn emit(mut sink: impl Sink, text: &str) {
        sink.write(text).unwrap();
    }

    #[test]
    fn test_boxed_and_borrowed_sinks() {
        let boxed: Box<dyn Sink> = Box::new(TracingSink);
        emit(boxed, "boxed");

        let mut inner = WriterSink::new(Vec::new());
        emit(&mut inner, "borrowed");
        emit(&mut inner, "!");
        assert_eq!(inner.into_inner(), b"borrowed!");
    }
}
