//! Clickstream Event Model
//!
//! Defines the event record appended to the session log for every user
//! interaction, plus the known event-type vocabulary. The vocabulary is
//! open-ended by design: the `event_type` field is a plain string tag so new
//! interactions can be recorded without touching this module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{EventId, Page, SessionId, TimestampMs};

// =============================================================================
// Event Type Vocabulary
// =============================================================================

/// Known event-type tags.
///
/// These cover every interaction the player currently reports; the log
/// accepts any other tag as well.
pub mod event_types {
    pub const SESSION_START: &str = "SESSION_START";
    pub const PLAY: &str = "PLAY";
    pub const PAUSE: &str = "PAUSE";
    pub const SEEK: &str = "SEEK";
    pub const SPEED_CHANGE: &str = "SPEED_CHANGE";
    pub const MUTE_TOGGLE: &str = "MUTE_TOGGLE";
    pub const CAPTION_TOGGLE: &str = "CAPTION_TOGGLE";
    pub const FULLSCREEN_ENTER: &str = "FULLSCREEN_ENTER";
    pub const FULLSCREEN_EXIT: &str = "FULLSCREEN_EXIT";
    pub const BOOKMARK_ADD: &str = "BOOKMARK_ADD";
    pub const BOOKMARK_DELETE: &str = "BOOKMARK_DELETE";
    pub const BOOKMARK_JUMP: &str = "BOOKMARK_JUMP";
    pub const QUIZ_ANSWER_SELECTED: &str = "QUIZ_ANSWER_SELECTED";
    pub const QUIZ_ANSWER_REMOVED: &str = "QUIZ_ANSWER_REMOVED";
    pub const QUIZ_COMPLETED: &str = "QUIZ_COMPLETED";
    pub const SESSION_END_REQUEST: &str = "SESSION_END_REQUEST";
}

// =============================================================================
// Clickstream Event
// =============================================================================

/// One recorded user interaction.
///
/// Events are created once and never mutated. The timestamp is wall-clock
/// milliseconds, monotonically non-decreasing in real time but not guaranteed
/// strictly increasing across rapid successive interactions; export relies on
/// a stable sort to keep equal-timestamp events in append order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickstreamEvent {
    /// Unique event ID (UUID v4)
    pub id: EventId,
    /// The registered username
    pub user_id: String,
    /// Session this event belongs to, fixed for the session's lifetime
    pub session_id: SessionId,
    /// Milliseconds since the Unix epoch at emission time
    #[serde(rename = "timestamp")]
    pub timestamp_ms: TimestampMs,
    /// Event-type tag (open vocabulary, see [`event_types`])
    pub event_type: String,
    /// Event-type-specific payload, a JSON object by convention
    pub details: serde_json::Value,
    /// UI context at emission time
    pub page: Page,
}

impl ClickstreamEvent {
    /// Creates a new event with a generated UUID and the current wall-clock
    /// time
    pub fn new(
        user_id: &str,
        session_id: &str,
        event_type: &str,
        details: serde_json::Value,
        page: Page,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            session_id: session_id.to_string(),
            timestamp_ms: Utc::now().timestamp_millis(),
            event_type: event_type.to_string(),
            details,
            page,
        }
    }

    /// Overrides the timestamp (for tests and replay)
    pub fn with_timestamp(mut self, timestamp_ms: TimestampMs) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    /// Parses the timestamp as a UTC datetime
    pub fn timestamp_as_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_ms)
    }

    /// Renders the timestamp as ISO 8601 UTC with millisecond precision
    /// (`2024-01-01T00:00:00.000Z`).
    ///
    /// A timestamp outside the representable datetime range falls back to the
    /// raw millisecond value.
    pub fn iso_timestamp(&self) -> String {
        match self.timestamp_as_datetime() {
            Some(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            None => self.timestamp_ms.to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_creation() {
        let event = ClickstreamEvent::new(
            "alice",
            "session-123",
            event_types::PLAY,
            json!({ "time": 12.5 }),
            Page::Player,
        );

        assert!(!event.id.is_empty());
        assert_eq!(event.user_id, "alice");
        assert_eq!(event.session_id, "session-123");
        assert_eq!(event.event_type, "PLAY");
        assert_eq!(event.details["time"], 12.5);
        assert_eq!(event.page, Page::Player);
        assert!(event.timestamp_ms > 0);
    }

    #[test]
    fn test_event_ids_are_unique() {
        let a = ClickstreamEvent::new("u", "s", event_types::PLAY, json!({}), Page::Player);
        let b = ClickstreamEvent::new("u", "s", event_types::PLAY, json!({}), Page::Player);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_iso_timestamp_rendering() {
        let event = ClickstreamEvent::new("u", "s", event_types::PLAY, json!({}), Page::Player)
            .with_timestamp(0);
        assert_eq!(event.iso_timestamp(), "1970-01-01T00:00:00.000Z");

        let event = event.with_timestamp(1_700_000_000_123);
        assert_eq!(event.iso_timestamp(), "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn test_event_serialization_shape() {
        let event = ClickstreamEvent::new(
            "alice",
            "session-123",
            event_types::SEEK,
            json!({ "to": 42.0 }),
            Page::Player,
        )
        .with_timestamp(1000);

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["userId"], "alice");
        assert_eq!(value["sessionId"], "session-123");
        assert_eq!(value["timestamp"], 1000);
        assert_eq!(value["eventType"], "SEEK");
        assert_eq!(value["page"], "player");
        assert_eq!(value["details"]["to"], 42.0);

        let parsed: ClickstreamEvent = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, event);
    }
}
