//! Session Data Models
//!
//! Defines the participant identity, bookmarks, and quiz questions owned by
//! one viewing session.

use serde::{Deserialize, Serialize};

use crate::{BookmarkId, QuestionId, SessionId, TimeSec};

// =============================================================================
// User
// =============================================================================

/// The registered participant for one session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Participant ID / username entered at registration
    pub username: String,
    /// Session identifier (UUID v4), fixed for the session's lifetime
    pub session_id: SessionId,
}

impl User {
    /// Creates a user with a freshly generated session ID
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            session_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

// =============================================================================
// Bookmark
// =============================================================================

/// A timestamped bookmark placed during playback
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Unique identifier (UUID v4)
    pub id: BookmarkId,
    /// Playback position the bookmark points at
    #[serde(rename = "time")]
    pub time_sec: TimeSec,
    /// Free-form note
    pub note: String,
}

impl Bookmark {
    /// Creates a bookmark with a generated ID
    pub fn new(time_sec: TimeSec, note: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            time_sec,
            note: note.to_string(),
        }
    }
}

// =============================================================================
// Quiz Question
// =============================================================================

/// One multiple-choice comprehension question shown alongside the video
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer
    pub correct_answer_index: usize,
}

impl QuizQuestion {
    /// Returns true if the given option index is the correct answer
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_answer_index
    }
}

// =============================================================================
// Tests
// =============================================================================
