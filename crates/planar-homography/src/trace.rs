use std::sync::Mutex;

/// Default `log` target used by [`LogSink`].
pub const DEFAULT_LOG_TARGET: &str = "planar::homography";

/// A destination for human readable trace lines.
pub trait TraceSink {
    /// Emit a single line.
    fn emit(&self, line: &str);
}

/// A sink that drops every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn emit(&self, _line: &str) {}
}

/// A sink that forwards lines to the `log` crate at info level.
#[derive(Debug, Clone)]
pub struct LogSink {
    target: String,
}

impl LogSink {
    /// Create a sink logging under the given target.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The log target.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_TARGET)
    }
}

impl TraceSink for LogSink {
    fn emit(&self, line: &str) {
        log::info!(target: self.target.as_str(), "{line}");
    }
}

/// A sink that keeps the lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl TraceSink for MemorySink {
    fn emit(&self, line: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}

impl<T: TraceSink + ?Sized> TraceSink for &T {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}
