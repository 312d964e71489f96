//! Append-only audit log with a monotonic commit clock.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

use orgchart_entity::audit::{AuditEntry, AuditFilter};

/// Audit entries, newest first.
///
/// Entries are only ever prepended. The log also owns the commit clock so
/// that every commit gets a timestamp strictly later than the previous one,
/// even when the wall clock stalls or steps backwards.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: VecDeque<AuditEntry>,
    last_tick: Option<DateTime<Utc>>,
}

impl AuditLog {
    /// Rebuild a log from newest-first entries (e.g. a snapshot).
    pub fn from_entries(entries: Vec<AuditEntry>) -> Self {
        let last_tick = entries.first().map(|e| e.timestamp);
        Self {
            entries: entries.into(),
            last_tick,
        }
    }

    /// Next commit timestamp.
    pub fn tick(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let at = match self.last_tick {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_tick = Some(at);
        at
    }

    /// Prepend an entry.
    pub fn append(&mut self, entry: AuditEntry) {
        self.entries.push_front(entry);
    }

    /// Entries passing the filter, newest first.
    pub fn query(&self, filter: &AuditFilter) -> Vec<AuditEntry> {
        self.entries
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    /// Iterate entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
