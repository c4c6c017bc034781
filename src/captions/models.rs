//! Caption Data Models
//!
//! Defines the normalized caption representation shared by all three input
//! formats, and the per-session track that answers active-caption queries.

use serde::{Deserialize, Serialize};

use crate::TimeSec;

// =============================================================================
// Caption Entry
// =============================================================================

/// A single timed caption cue, normalized from any source format.
///
/// Serialized field names match the structured JSON caption input
/// (`{"start": 1.0, "end": 5.0, "text": "..."}`), so that format decodes
/// directly into this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    /// Start time in seconds
    #[serde(rename = "start")]
    pub start_sec: TimeSec,
    /// End time in seconds
    #[serde(rename = "end")]
    pub end_sec: TimeSec,
    /// Caption text (single line; multi-line sources are space-joined)
    pub text: String,
}

impl Caption {
    /// Creates a new caption with the given timing and text
    pub fn new(start_sec: TimeSec, end_sec: TimeSec, text: &str) -> Self {
        Self {
            start_sec,
            end_sec,
            text: text.to_string(),
        }
    }

    /// Returns the duration of this caption in seconds
    pub fn duration(&self) -> TimeSec {
        self.end_sec - self.start_sec
    }

    /// Returns true if the caption covers the given time.
    ///
    /// Both bounds are inclusive: a cue ending at 5.0 is still shown at
    /// exactly 5.0.
    pub fn is_active_at(&self, time_sec: TimeSec) -> bool {
        time_sec >= self.start_sec && time_sec <= self.end_sec
    }
}

// =============================================================================
// Caption Track
// =============================================================================

/// The normalized caption sequence for one viewing session.
///
/// Cues are kept in parser emission order, not time order, and are not
/// deduplicated or merged. Lookup is first-match-wins over that stored order:
/// when two overlapping cues both cover the queried time, the one the parser
/// emitted first is returned. Downstream display code depends on this exact
/// policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptionTrack {
    /// Cues in parser emission order
    cues: Vec<Caption>,
    /// Caller-controlled on/off flag; disabled always yields no caption
    enabled: bool,
}

impl CaptionTrack {
    /// Creates a track with no cues, disabled
    pub fn empty() -> Self {
        Self {
            cues: vec![],
            enabled: false,
        }
    }

    /// Creates a track from parsed cues, preserving their order.
    ///
    /// The track starts enabled when there is at least one cue, mirroring the
    /// player default of showing captions whenever any were loaded.
    pub fn from_cues(cues: Vec<Caption>) -> Self {
        let enabled = !cues.is_empty();
        Self { cues, enabled }
    }

    /// Returns the caption active at the given playback time, if any.
    ///
    /// Returns `None` when the track is disabled, regardless of the cues.
    pub fn active_at(&self, time_sec: TimeSec) -> Option<&Caption> {
        if !self.enabled {
            return None;
        }
        self.cues.iter().find(|c| c.is_active_at(time_sec))
    }

    /// Returns all cues in stored order
    pub fn cues(&self) -> &[Caption] {
        &self.cues
    }

    /// Returns the number of cues
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Returns true if the track has no cues.
    ///
    /// The caption toggle UI disables itself on an empty track.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Returns whether the track is currently enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the enabled flag
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flips the enabled flag and returns the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

impl Default for CaptionTrack {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Caption Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_caption_creation() {
        let caption = Caption::new(1.0, 5.0, "Hello World");
        assert_eq!(caption.start_sec, 1.0);
        assert_eq!(caption.end_sec, 5.0);
        assert_eq!(caption.text, "Hello World");
        assert_eq!(caption.duration(), 4.0);
    }

    #[test]
    fn test_caption_active_bounds_inclusive() {
        let caption = Caption::new(2.0, 5.0, "Test");

        assert!(!caption.is_active_at(1.999));
        assert!(caption.is_active_at(2.0));
        assert!(caption.is_active_at(3.5));
        assert!(caption.is_active_at(5.0));
        assert!(!caption.is_active_at(5.001));
    }

    #[test]
    fn test_caption_json_field_names() {
        let caption: Caption =
            serde_json::from_str(r#"{"start": 0.5, "end": 2.0, "text": "hi"}"#).unwrap();
        assert_eq!(caption.start_sec, 0.5);
        assert_eq!(caption.end_sec, 2.0);

        let json = serde_json::to_string(&caption).unwrap();
        assert!(json.contains("\"start\":0.5"));
        assert!(json.contains("\"end\":2.0"));
    }

    // -------------------------------------------------------------------------
    // Caption Track Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_track_first_match_wins_on_overlap() {
        let track = CaptionTrack::from_cues(vec![
            Caption::new(0.0, 10.0, "First"),
            Caption::new(2.0, 4.0, "Second"),
        ]);

        // Both cover t=3.0; the earlier-stored cue wins even though the
        // second is a tighter fit.
        assert_eq!(track.active_at(3.0).unwrap().text, "First");
    }

    #[test]
    fn test_track_storage_order_not_time_order() {
        let track = CaptionTrack::from_cues(vec![
            Caption::new(5.0, 8.0, "Later cue stored first"),
            Caption::new(0.0, 8.0, "Earlier cue stored second"),
        ]);

        assert_eq!(track.active_at(6.0).unwrap().text, "Later cue stored first");
        assert_eq!(track.active_at(1.0).unwrap().text, "Earlier cue stored second");
    }

    #[test]
    fn test_track_no_match_returns_none() {
        let track = CaptionTrack::from_cues(vec![Caption::new(1.0, 2.0, "Only")]);
        assert!(track.active_at(0.5).is_none());
        assert!(track.active_at(2.5).is_none());
    }

    #[test]
    fn test_track_disabled_yields_none() {
        let mut track = CaptionTrack::from_cues(vec![Caption::new(0.0, 10.0, "Hidden")]);
        assert!(track.active_at(5.0).is_some());

        track.set_enabled(false);
        assert!(track.active_at(5.0).is_none());

        assert!(track.toggle());
        assert_eq!(track.active_at(5.0).unwrap().text, "Hidden");
    }

    #[test]
    fn test_track_enabled_defaults() {
        assert!(!CaptionTrack::empty().is_enabled());
        assert!(!CaptionTrack::from_cues(vec![]).is_enabled());
        assert!(CaptionTrack::from_cues(vec![Caption::new(0.0, 1.0, "x")]).is_enabled());
    }

    #[test]
    fn test_track_empty_checks() {
        let track = CaptionTrack::empty();
        assert!(track.is_empty());
        assert_eq!(track.len(), 0);
        assert!(track.active_at(0.0).is_none());
    }
}
