//! # Logger Service
//!
//! This crate implements structured logging for editing sessions.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured, not text-based or printf-style.
//! A session owns its [`SessionLog`]; hosts decide whether and where to
//! print it.

use path_types::SessionId;
use std::collections::VecDeque;
use std::fmt;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Source session (if known)
    pub source: Option<SessionId>,
    /// Event name, e.g. `path.add`
    pub event: String,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Creates a new log entry
    pub fn new(level: LogLevel, event: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            source: None,
            event: event.into(),
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Sets the source session
    pub fn with_source(mut self, source: SessionId) -> Self {
        self.source = Some(source);
        self
    }

    /// Adds a field to the log entry
    pub fn with_field(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push((key.into(), value.to_string()));
        self
    }

    /// Looks up a field value by key
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.event, self.message)?;
        for (key, value) in &self.fields {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

/// Bounded in-memory log owned by one session
///
/// Once `capacity` entries are held, the oldest entry is dropped for each
/// new one.
#[derive(Debug, Clone)]
pub struct SessionLog {
    session: SessionId,
    capacity: usize,
    entries: VecDeque<LogEntry>,
    dropped: u64,
}

impl SessionLog {
    pub fn new(session: SessionId, capacity: usize) -> Self {
        Self {
            session,
            capacity: capacity.max(1),
            entries: VecDeque::new(),
            dropped: 0,
        }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Records an entry, stamping it with this log's session
    pub fn record(&mut self, entry: LogEntry) {
        self.entries.push_back(entry.with_source(self.session));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            self.dropped += 1;
        }
    }

    pub fn debug(&mut self, event: &str, message: impl Into<String>) {
        self.record(LogEntry::new(LogLevel::Debug, event, message));
    }

    pub fn info(&mut self, event: &str, message: impl Into<String>) {
        self.record(LogEntry::new(LogLevel::Info, event, message));
    }

    pub fn warn(&mut self, event: &str, message: impl Into<String>) {
        self.record(LogEntry::new(LogLevel::Warn, event, message));
    }

    pub fn error(&mut self, event: &str, message: impl Into<String>) {
        self.record(LogEntry::new(LogLevel::Error, event, message));
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Entries at or above `level`, oldest first
    pub fn entries_at_least(&self, level: LogLevel) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.level >= level).collect()
    }

    /// Entries recorded for a given event name, oldest first
    pub fn entries_for(&self, event: &str) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.event == event).collect()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries evicted because the log was full
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Removes and returns all entries, oldest first
    pub fn drain(&mut self) -> Vec<LogEntry> {
        self.entries.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_log_entry_creation() {
        let entry = LogEntry::new(LogLevel::Info, "path.add", "test message");
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.event, "path.add");
        assert_eq!(entry.message, "test message");
        assert!(entry.source.is_none());
        assert!(entry.fields.is_empty());
    }

    #[test]
    fn test_log_entry_with_fields() {
        let entry = LogEntry::new(LogLevel::Info, "point.insert", "test")
            .with_field("path", "Route")
            .with_field("index", 3);

        assert_eq!(entry.fields.len(), 2);
        assert_eq!(entry.field("path"), Some("Route"));
        assert_eq!(entry.field("index"), Some("3"));
        assert_eq!(entry.field("missing"), None);
    }

    #[test]
    fn test_log_entry_display() {
        let entry = LogEntry::new(LogLevel::Warn, "storage.load", "fallback")
            .with_field("key", "paths");
        assert_eq!(format!("{}", entry), "[WARN] storage.load: fallback key=paths");
    }

    #[test]
    fn test_session_log_stamps_source() {
        let session = SessionId::new();
        let mut log = SessionLog::new(session, 8);
        log.info("path.add", "added");
        assert_eq!(log.last().unwrap().source, Some(session));
    }

    #[test]
    fn test_session_log_is_bounded() {
        let mut log = SessionLog::new(SessionId::new(), 2);
        log.info("a", "1");
        log.info("b", "2");
        log.info("c", "3");

        assert_eq!(log.len(), 2);
        assert_eq!(log.dropped(), 1);
        let events: Vec<&str> = log.entries().map(|e| e.event.as_str()).collect();
        assert_eq!(events, vec!["b", "c"]);
    }

    #[test]
    fn test_filters() {
        let mut log = SessionLog::new(SessionId::new(), 16);
        log.debug("point.insert", "x");
        log.warn("storage.load", "y");
        log.error("storage.save", "z");

        assert_eq!(log.entries_at_least(LogLevel::Warn).len(), 2);
        assert_eq!(log.entries_for("point.insert").len(), 1);
    }

    #[test]
    fn test_drain_empties_log() {
        let mut log = SessionLog::new(SessionId::new(), 4);
        log.info("a", "1");
        let drained = log.drain();
        assert_eq!(drained.len(), 1);
        assert!(log.is_empty());
    }
}
