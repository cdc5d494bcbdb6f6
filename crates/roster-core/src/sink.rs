//! Output sinks.
//!
//! Components that print receive a sink at construction instead of writing
//! to the process-wide stdout, so tests can capture output directly.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// A line-oriented destination for user-facing text.
pub trait OutputSink: Send + Sync {
    /// Write one line. The sink appends the line terminator.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Sink that writes to the process stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

/// In-memory sink. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    /// Everything written so far, newline-joined.
    pub fn contents(&self) -> String {
        self.guard().join("\n")
    }

    pub fn clear(&self) {
        self.guard().clear();
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        // A poisoned buffer still holds valid lines.
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl OutputSink for BufferSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        // Multi-line writes are split so `lines()` stays one entry per line.
        self.guard().extend(line.split('\n').map(str::to_string));
        Ok(())
    }
}
