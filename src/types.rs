//! StreamInsight Core Type Definitions
//!
//! Defines fundamental types shared across the caption, clickstream, and
//! session modules.

use serde::{Deserialize, Serialize};

// =============================================================================
// ID Types
// =============================================================================

/// Clickstream event unique identifier (UUID v4)
pub type EventId = String;

/// Session unique identifier (UUID v4), the process-mining "Case ID"
pub type SessionId = String;

/// Bookmark unique identifier (UUID v4)
pub type BookmarkId = String;

/// Quiz question identifier
pub type QuestionId = u32;

// =============================================================================
// Time Types
// =============================================================================

/// Playback time in seconds (floating point)
pub type TimeSec = f64;

/// Wall-clock time in milliseconds since the Unix epoch
pub type TimestampMs = i64;

// =============================================================================
// Page
// =============================================================================

/// UI context a clickstream event was emitted from.
///
/// The session moves registration → player → export; `logout` discards the
/// session entirely rather than moving back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Registration,
    Player,
    Export,
}

impl Page {
    /// Returns the lowercase name used in serialized events and CSV rows
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Player => "player",
            Self::Export => "export",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================
