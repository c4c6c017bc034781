//! Caption System Module
//!
//! Ingests subtitle/caption data in heterogeneous text formats and answers
//! "what caption is active at time t" during playback:
//! - Caption data model (Caption, CaptionTrack)
//! - WebVTT, SubRip/SRT, and structured JSON parsing, unified into one
//!   in-memory representation
//! - Format dispatch by file-name suffix (never content sniffing)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use streaminsight_core::captions::{CaptionFormat, CaptionTrack};
//!
//! let raw = std::fs::read_to_string("lecture.vtt")?;
//! let cues = CaptionFormat::from_file_name("lecture.vtt").parse(&raw)?;
//! let track = CaptionTrack::from_cues(cues);
//!
//! // Every playback tick:
//! if let Some(caption) = track.active_at(current_time) {
//!     overlay.show(&caption.text);
//! }
//! ```

mod formats;
mod models;

// Re-export models
pub use models::{Caption, CaptionTrack};

// Re-export format functions
pub use formats::{
    parse_json, parse_srt, parse_srt_time, parse_vtt, parse_vtt_time, CaptionFormat,
};
