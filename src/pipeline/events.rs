//! Progress and outcome events, and the sinks that receive them.
//!
//! Components never log through global state. They hold a [`Reporter`]
//! built from an injected [`EventSink`], and every event carries its own
//! timestamp, severity and source.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Severity tier of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    /// A check passed or a step completed
    Info,
    /// A check failed
    Warning,
    /// A run ended in rejection or a step failed
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// A single progress or outcome signal.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    /// Component that emitted the event, e.g. "RegistrationSystem"
    pub source: String,
    pub message: String,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} - {}",
            self.timestamp.to_rfc3339(),
            self.severity,
            self.source,
            self.message
        )
    }
}

/// Destination for events.
///
/// Sinks may be shared by concurrent runs, so implementations must
/// tolerate concurrent `emit` calls.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: Event);
}

/// Forwards events to `tracing` at the matching level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: Event) {
        match event.severity {
            Severity::Info => tracing::info!(source = %event.source, "{}", event.message),
            Severity::Warning => tracing::warn!(source = %event.source, "{}", event.message),
            Severity::Error => tracing::error!(source = %event.source, "{}", event.message),
        }
    }
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Event>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far.
    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    pub fn severities(&self) -> Vec<Severity> {
        self.lock().iter().map(|e| e.severity).collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Event>> {
        // Poisoning is ignored: a push either completed or never started.
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: Event) {
        self.lock().push(event);
    }
}

/// Stamps events with a source and timestamp before handing them to a sink.
#[derive(Clone)]
pub struct Reporter {
    source: String,
    sink: Arc<dyn EventSink>,
}

impl Reporter {
    pub fn new(source: impl Into<String>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            source: source.into(),
            sink,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn info(&self, message: impl Into<String>) {
        self.emit(Severity::Info, message.into());
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.emit(Severity::Warning, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.emit(Severity::Error, message.into());
    }

    fn emit(&self, severity: Severity, message: String) {
        self.sink.emit(Event {
            timestamp: Utc::now(),
            severity,
            source: self.source.clone(),
            message,
        });
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
