//! Event Logger
//!
//! Tick events as JSON lines. The CLI points this at `events.jsonl` in the
//! output directory; tests use the null sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::types::TickEvent;
use crate::systems::tick::TickReport;

pub struct EventLogger {
    sink: Option<Box<dyn Write>>,
    event_count: u64,
    last_tick: Option<u64>,
}

impl EventLogger {
    /// Truncate or create `path` and log into it
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// Log into any writer
    pub fn from_writer(writer: impl Write + 'static) -> Self {
        Self {
            sink: Some(Box::new(writer)),
            event_count: 0,
            last_tick: None,
        }
    }

    /// Count events without writing them
    pub fn null() -> Self {
        Self {
            sink: None,
            event_count: 0,
            last_tick: None,
        }
    }

    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    /// Tick of the most recently logged report
    pub fn last_tick(&self) -> Option<u64> {
        self.last_tick
    }

    pub fn log(&mut self, event: &TickEvent) -> std::io::Result<()> {
        if let Some(sink) = self.sink.as_mut() {
            writeln!(sink, "{}", event.to_jsonl()?)?;
        }
        self.event_count += 1;
        Ok(())
    }

    /// Log every event of a tick, in order
    pub fn log_report(&mut self, report: &TickReport) -> std::io::Result<()> {
        for event in &report.events {
            self.log(event)?;
        }
        self.last_tick = Some(report.tick);
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        match self.sink.as_mut() {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for EventLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush event log: {}", e);
        }
    }
}
