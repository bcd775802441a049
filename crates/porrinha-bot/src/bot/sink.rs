use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::{Level, event};

/// Receives one short rationale line per hand decision.
pub trait RationaleSink: Send {
    fn report(&mut self, line: &str);

    fn is_discarding(&self) -> bool {
        false
    }
}

/// Drops every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RationaleSink for NullSink {
    fn report(&mut self, _line: &str) {}

    fn is_discarding(&self) -> bool {
        true
    }
}

/// Writes each line, newline terminated, to any `io::Write`.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> RationaleSink for WriterSink<W> {
    fn report(&mut self, line: &str) {
        if let Err(err) = writeln!(self.writer, "{line}") {
            tracing::warn!(
                target: "porrinha_bot::sink",
                error = %err,
                message = "failed to write rationale line"
            );
        }
    }
}

/// Keeps lines in a buffer shared with every clone.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl RationaleSink for MemorySink {
    fn report(&mut self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }
}

/// Forwards lines as `tracing` events.
#[derive(Debug, Clone)]
pub struct TracingSink {
    player: String,
}

impl TracingSink {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
        }
    }
}

impl RationaleSink for TracingSink {
    fn report(&mut self, line: &str) {
        event!(
            target: "porrinha_bot::rationale",
            Level::INFO,
            player = %self.player,
            line
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sink_discards() {
        let mut sink = NullSink;
        sink.report("ignored");
        assert!(sink.is_discarding());
    }

    #[test]
    fn writer_sink_terminates_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.report("first");
        sink.report("second");
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "first\nsecond\n");
    }

    #[test]
    fn memory_sink_clones_share_the_buffer() {
        let probe = MemorySink::new();
        let mut sink: Box<dyn RationaleSink> = Box::new(probe.clone());
        sink.report("hello");
        assert_eq!(probe.lines(), vec!["hello".to_string()]);
        assert!(!sink.is_discarding());
    }
}
