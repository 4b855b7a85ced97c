//! In-memory sink

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable writer that keeps everything written to it in memory.
///
/// Clones share the same buffer, so one handle can be given to a printer
/// while another reads the captured output back.
///
/// ```
/// use rust_logger_facade::{BufferSink, LogLevel, Logger, StandardLogger, StdPrinter};
///
/// let sink = BufferSink::new();
/// let logger = StandardLogger::builder()
///     .level(LogLevel::Info)
///     .printer(StdPrinter::new(sink.clone()).without_timestamp())
///     .build();
///
/// logger.info("cache warmed", &[]);
/// assert_eq!(sink.contents(), " [INFO] cache warmed\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured output, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for BufferSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
