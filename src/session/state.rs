//! Session State Machine
//!
//! One `Session` instance lives from registration to logout and is the single
//! writer of its event log. Pages advance registration → player → export;
//! interaction recorders are only valid on the player page, and finishing
//! requires a complete quiz when questions were supplied. Refused operations
//! return an error without touching the log.

use std::collections::HashMap;

use serde_json::json;
use tracing::{debug, info};

use crate::captions::{Caption, CaptionFormat, CaptionTrack};
use crate::clickstream::{event_types, to_csv, ClickstreamEvent, EventLog};
use crate::{CoreError, CoreResult, Page, QuestionId, TimeSec};

use super::{Bookmark, QuizQuestion, User};

/// Slowest playback rate the player accepts
pub const PLAYBACK_RATE_MIN: f64 = 0.25;

/// Fastest playback rate the player accepts
pub const PLAYBACK_RATE_MAX: f64 = 4.0;

// =============================================================================
// Session
// =============================================================================

/// One viewing session: the registered user plus everything recorded on
/// their behalf
#[derive(Debug)]
pub struct Session {
    user: User,
    page: Page,
    captions: CaptionTrack,
    events: EventLog,
    bookmarks: Vec<Bookmark>,
    questions: Vec<QuizQuestion>,
    answers: HashMap<QuestionId, usize>,
}

impl Session {
    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Registers a participant and opens the player page.
    ///
    /// The username is trimmed and must be non-blank. A `SESSION_START` event
    /// is seeded into the fresh log, attributed to the registration page,
    /// recording whether the participant supplied their own video.
    pub fn register(
        username: &str,
        custom_video: bool,
        questions: Vec<QuizQuestion>,
    ) -> CoreResult<Self> {
        let username = username.trim();
        if username.is_empty() {
            return Err(CoreError::InvalidUsername(
                "username must not be blank".to_string(),
            ));
        }

        let mut session = Self {
            user: User::new(username),
            page: Page::Registration,
            captions: CaptionTrack::empty(),
            events: EventLog::new(),
            bookmarks: Vec::new(),
            questions,
            answers: HashMap::new(),
        };

        session.record(
            event_types::SESSION_START,
            json!({ "customVideo": custom_video }),
        );
        session.page = Page::Player;

        info!(
            username = %session.user.username,
            session_id = %session.user.session_id,
            "Session registered"
        );
        Ok(session)
    }

    /// Ingests caption text, dispatching the parser by file-name suffix.
    ///
    /// On success the session's track is replaced and the cue count returned.
    /// An undecodable structured caption file leaves an empty track behind
    /// and surfaces the error so the caller can notify the participant; the
    /// session itself stays usable.
    pub fn load_captions(&mut self, file_name: &str, raw: &str) -> CoreResult<usize> {
        let format = CaptionFormat::from_file_name(file_name);
        match format.parse(raw) {
            Ok(cues) => {
                let count = cues.len();
                self.captions = CaptionTrack::from_cues(cues);
                debug!(file_name, count, "Captions loaded");
                Ok(count)
            }
            Err(e) => {
                self.captions = CaptionTrack::empty();
                Err(e)
            }
        }
    }

    /// Requests session end: records `SESSION_END_REQUEST` and moves to the
    /// export page.
    ///
    /// When quiz questions were supplied, every one of them must be answered
    /// first.
    pub fn finish(&mut self) -> CoreResult<()> {
        self.ensure_player()?;

        if !self.questions.is_empty() && self.answers.len() < self.questions.len() {
            return Err(CoreError::QuizIncomplete {
                answered: self.answers.len(),
                total: self.questions.len(),
            });
        }

        self.record(event_types::SESSION_END_REQUEST, json!({}));
        self.page = Page::Export;
        info!(session_id = %self.user.session_id, "Session finished");
        Ok(())
    }

    /// Serializes the session's event log as a CSV document ready to be
    /// offered for download
    pub fn export_csv(&self) -> String {
        to_csv(self.events.events())
    }

    /// Ends the session, discarding the event log and all other state.
    ///
    /// Clearing the log is the only way events are ever removed.
    pub fn logout(mut self) {
        info!(
            session_id = %self.user.session_id,
            events = self.events.len(),
            "Session logged out"
        );
        self.events.clear();
    }

    // =========================================================================
    // Event Recording
    // =========================================================================

    /// Appends an event with the given type tag and details payload.
    ///
    /// The log never rejects an event on content grounds; the tag vocabulary
    /// is open-ended. Prefer the typed recorders for known interactions.
    pub fn record(&mut self, event_type: &str, details: serde_json::Value) {
        let event = ClickstreamEvent::new(
            &self.user.username,
            &self.user.session_id,
            event_type,
            details,
            self.page,
        );
        debug!(event_type, page = %self.page, "Event recorded");
        self.events.append(event);
    }

    /// Records playback starting at the given position
    pub fn record_play(&mut self, time_sec: TimeSec) -> CoreResult<()> {
        self.ensure_player()?;
        self.record(event_types::PLAY, json!({ "time": time_sec }));
        Ok(())
    }

    /// Records playback pausing at the given position
    pub fn record_pause(&mut self, time_sec: TimeSec) -> CoreResult<()> {
        self.ensure_player()?;
        self.record(event_types::PAUSE, json!({ "time": time_sec }));
        Ok(())
    }

    /// Records a seek to the given position
    pub fn record_seek(&mut self, to_sec: TimeSec) -> CoreResult<()> {
        self.ensure_player()?;
        self.record(event_types::SEEK, json!({ "to": to_sec }));
        Ok(())
    }

    /// Records a playback-rate change and returns the applied rate.
    ///
    /// The rate is clamped to the player's 0.25–4.0 range and rounded to two
    /// decimals, matching the player's own handling of custom rate input.
    pub fn record_speed_change(&mut self, rate: f64) -> CoreResult<f64> {
        self.ensure_player()?;
        let rate = rate.clamp(PLAYBACK_RATE_MIN, PLAYBACK_RATE_MAX);
        let rate = (rate * 100.0).round() / 100.0;
        self.record(event_types::SPEED_CHANGE, json!({ "rate": rate }));
        Ok(rate)
    }

    /// Records the mute state flipping to the given value
    pub fn record_mute_toggle(&mut self, muted: bool) -> CoreResult<()> {
        self.ensure_player()?;
        self.record(event_types::MUTE_TOGGLE, json!({ "muted": muted }));
        Ok(())
    }

    /// Records entering or leaving fullscreen
    pub fn record_fullscreen(&mut self, entered: bool) -> CoreResult<()> {
        self.ensure_player()?;
        let tag = if entered {
            event_types::FULLSCREEN_ENTER
        } else {
            event_types::FULLSCREEN_EXIT
        };
        self.record(tag, json!({}));
        Ok(())
    }

    // =========================================================================
    // Captions
    // =========================================================================

    /// Flips caption display on or off and returns the new state.
    ///
    /// Refused when the track has no cues; the toggle control is disabled in
    /// that case.
    pub fn toggle_captions(&mut self) -> CoreResult<bool> {
        self.ensure_player()?;
        if self.captions.is_empty() {
            return Err(CoreError::CaptionsUnavailable);
        }

        let active = self.captions.toggle();
        self.record(event_types::CAPTION_TOGGLE, json!({ "active": active }));
        Ok(active)
    }

    /// Returns the caption to display at the given playback time, honoring
    /// the enabled flag
    pub fn active_caption(&self, time_sec: TimeSec) -> Option<&Caption> {
        self.captions.active_at(time_sec)
    }

    // =========================================================================
    // Bookmarks
    // =========================================================================

    /// Places a bookmark at the given playback position
    pub fn add_bookmark(&mut self, time_sec: TimeSec, note: &str) -> CoreResult<Bookmark> {
        self.ensure_player()?;

        let bookmark = Bookmark::new(time_sec, note);
        self.bookmarks.push(bookmark.clone());
        self.record(event_types::BOOKMARK_ADD, json!({ "time": time_sec }));
        Ok(bookmark)
    }

    /// Removes a bookmark by ID, returning it
    pub fn delete_bookmark(&mut self, bookmark_id: &str) -> CoreResult<Bookmark> {
        self.ensure_player()?;

        let position = self
            .bookmarks
            .iter()
            .position(|b| b.id == bookmark_id)
            .ok_or_else(|| CoreError::BookmarkNotFound(bookmark_id.to_string()))?;

        let removed = self.bookmarks.remove(position);
        self.record(
            event_types::BOOKMARK_DELETE,
            json!({ "bookmarkId": bookmark_id }),
        );
        Ok(removed)
    }

    /// Records jumping to a bookmark and returns the position to seek to
    pub fn jump_to_bookmark(&mut self, bookmark_id: &str) -> CoreResult<TimeSec> {
        self.ensure_player()?;

        let time_sec = self
            .bookmarks
            .iter()
            .find(|b| b.id == bookmark_id)
            .map(|b| b.time_sec)
            .ok_or_else(|| CoreError::BookmarkNotFound(bookmark_id.to_string()))?;

        self.record(event_types::BOOKMARK_JUMP, json!({ "time": time_sec }));
        Ok(time_sec)
    }

    // =========================================================================
    // Quiz
    // =========================================================================

    /// Selects an answer, or deselects it when the same option is picked
    /// again. Returns true if the option is now selected.
    ///
    /// Completing the final unanswered question additionally records
    /// `QUIZ_COMPLETED`.
    pub fn select_answer(
        &mut self,
        question_id: QuestionId,
        option_index: usize,
    ) -> CoreResult<bool> {
        self.ensure_player()?;

        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or(CoreError::QuestionNotFound(question_id))?;
        if option_index >= question.options.len() {
            return Err(CoreError::InvalidAnswer {
                question: question_id,
                option: option_index,
            });
        }

        if self.answers.get(&question_id) == Some(&option_index) {
            self.answers.remove(&question_id);
            self.record(
                event_types::QUIZ_ANSWER_REMOVED,
                json!({ "questionId": question_id }),
            );
            return Ok(false);
        }

        self.answers.insert(question_id, option_index);
        self.record(
            event_types::QUIZ_ANSWER_SELECTED,
            json!({ "questionId": question_id, "optionIndex": option_index }),
        );

        if self.quiz_complete() {
            self.record(
                event_types::QUIZ_COMPLETED,
                json!({ "answered": self.answers.len() }),
            );
        }
        Ok(true)
    }

    /// Returns true when every supplied question has an answer
    pub fn quiz_complete(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    /// Returns the number of answered questions
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Returns how many stored answers are correct
    pub fn correct_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| self.answers.get(&q.id).is_some_and(|&a| q.is_correct(a)))
            .count()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn captions(&self) -> &CaptionTrack {
        &self.captions
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    fn ensure_player(&self) -> CoreResult<()> {
        if self.page != Page::Player {
            return Err(CoreError::WrongPage(self.page));
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
