//! Session Module
//!
//! Models one viewing session end to end: registration, the player-page
//! interaction surface, and the export handoff. The session owns the state
//! the UI shell reports against — the registered user, the caption track,
//! the append-only event log, bookmarks, and quiz answers — as one explicit
//! session-scoped object rather than process-wide state, so sessions are
//! independently constructible and testable.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use streaminsight_core::session::Session;
//!
//! let mut session = Session::register("alice", true, questions)?;
//! session.load_captions("lecture.vtt", &raw_text)?;
//!
//! session.record_play(0.0)?;
//! session.add_bookmark(12.5, "Key definition")?;
//! session.record_pause(31.2)?;
//!
//! session.finish()?;
//! let csv = session.export_csv();
//! ```

mod models;
mod state;

// Re-export models
pub use models::{Bookmark, QuizQuestion, User};

pub use state::Session;
