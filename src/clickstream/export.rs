//! Event Log CSV Export
//!
//! Serializes a session's clickstream into a process-mining-style CSV
//! document:
//!
//! ```text
//! Case ID,Activity,Timestamp,Page,Details
//! 7d9e...,SESSION_START,2024-05-01T09:00:00.000Z,registration,"{""customVideo"":false}"
//! 7d9e...,PLAY,2024-05-01T09:00:02.143Z,player,"{""time"":0.0}"
//! ```
//!
//! Case ID is the session ID (the process-mining "case" grouping all events
//! of one viewing session) and Activity is the event type. Events are
//! stable-sorted by timestamp so equal-millisecond events keep their append
//! order; this matters because a synthetic session-start and the first real
//! interaction routinely share a timestamp.
//!
//! Escaping is the RFC 4180 subset: a field is quoted, with internal quotes
//! doubled, exactly when it contains a comma, a double quote, or a newline.
//! All other fields are emitted bare. The rule applies to every column
//! independently; the Details column, holding compact JSON, almost always
//! triggers it.

use tracing::info;

use super::ClickstreamEvent;

/// Fixed five-column header, first line of every export
pub const CSV_HEADER: &str = "Case ID,Activity,Timestamp,Page,Details";

/// Serializes events into a complete CSV document.
///
/// Input order does not matter beyond tie-breaking: any permutation of the
/// same events produces the same document, except that events sharing a
/// timestamp stay in the order given. Zero events is not an error and yields
/// a header-only document.
pub fn to_csv(events: &[ClickstreamEvent]) -> String {
    let mut sorted: Vec<&ClickstreamEvent> = events.iter().collect();
    // Vec::sort_by_key is stable: ties keep append order.
    sorted.sort_by_key(|e| e.timestamp_ms);

    let mut lines = Vec::with_capacity(sorted.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for event in sorted {
        let row = [
            escape_field(&event.session_id),
            escape_field(&event.event_type),
            escape_field(&event.iso_timestamp()),
            escape_field(event.page.as_str()),
            escape_field(&event.details.to_string()),
        ]
        .join(",");
        lines.push(row);
    }

    info!("Exported {} clickstream events to CSV", events.len());
    lines.join("\n")
}

/// Escapes one CSV field.
///
/// Quoting is applied only when needed, so ordinary fields (IDs, event types,
/// timestamps, page names) stay bare.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================
