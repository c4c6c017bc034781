//! StreamInsight Core Library
//!
//! Instrumentation core for a video-viewing study session. This library
//! contains everything with real parsing or algorithmic content behind the
//! StreamInsight player: caption ingestion and normalization, active-caption
//! lookup, append-only clickstream recording, and process-mining-ready CSV
//! export of the session's event log.
//!
//! The UI shell (playback controls, drag-and-drop, theming, routing) is an
//! external collaborator: it reads caption files from disk, feeds the raw
//! text in here at session start, queries the caption track on every playback
//! tick, reports user interactions as they happen, and asks for the CSV text
//! once at session end.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     StreamInsight Core                       │
//! ├──────────────────────────────────────────────────────────────┤
//! │  captions/     - Caption model, VTT/SRT/JSON parsing, track  │
//! │  clickstream/  - ClickstreamEvent, EventLog, CSV export      │
//! │  session/      - Session state machine and event recorders   │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod captions;
pub mod clickstream;
pub mod session;

// Re-export common types
mod types;
pub use types::*;

mod error;
pub use error::*;
