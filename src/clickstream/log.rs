//! Event Log
//!
//! Append-only in-memory collection of the active session's clickstream
//! events. Individual events are never mutated or removed once appended; the
//! only removal operation is `clear`, used when the session is discarded at
//! logout. This keeps the log trustworthy as a process-mining source.
//!
//! Size is unbounded within a session. Sessions are interactive and
//! human-timescale, so growth over one sitting is the accepted envelope.

use super::ClickstreamEvent;

/// Append-only event collection for one session
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<ClickstreamEvent>,
}

impl EventLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one event.
    ///
    /// Never rejects an event on content grounds; the log records what it is
    /// given, in the order it is given.
    pub fn append(&mut self, event: ClickstreamEvent) {
        self.events.push(event);
    }

    /// Returns a read-only copy of the events in append order
    pub fn snapshot(&self) -> Vec<ClickstreamEvent> {
        self.events.clone()
    }

    /// Returns the events in append order without copying
    pub fn events(&self) -> &[ClickstreamEvent] {
        &self.events
    }

    /// Discards all entries. The only removal operation, used at logout.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clickstream::event_types;
    use crate::Page;
    use serde_json::json;

    fn event(event_type: &str) -> ClickstreamEvent {
        ClickstreamEvent::new("alice", "session-1", event_type, json!({}), Page::Player)
    }

    #[test]
    fn test_append_preserves_order() {
        let mut log = EventLog::new();
        log.append(event(event_types::PLAY));
        log.append(event(event_types::PAUSE));
        log.append(event(event_types::SEEK));

        assert_eq!(log.len(), 3);
        assert_eq!(log.events()[0].event_type, "PLAY");
        assert_eq!(log.events()[1].event_type, "PAUSE");
        assert_eq!(log.events()[2].event_type, "SEEK");
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut log = EventLog::new();
        log.append(event(event_types::PLAY));

        let snapshot = log.snapshot();
        log.append(event(event_types::PAUSE));

        // The snapshot does not see later appends, and taking it did not
        // disturb the log.
        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut log = EventLog::new();
        log.append(event(event_types::PLAY));
        log.append(event(event_types::PAUSE));
        assert!(!log.is_empty());

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }
}
