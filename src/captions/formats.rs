//! Caption Format Parsers
//!
//! Decodes the three supported caption sources into normalized [`Caption`]
//! records:
//! - WebVTT (`.vtt`), permissive timestamps
//! - SubRip (`.srt`), strict timestamps
//! - Structured JSON arrays of `{start, end, text}` (everything else)
//!
//! VTT and SRT parsing is tolerant by contract: malformed cues or blocks are
//! skipped and parsing continues. A timestamp that cannot be read degrades to
//! `0.0` (SRT) or `NaN` (VTT) instead of failing the parse; callers must
//! tolerate those values. Only an undecodable JSON document is an error, and
//! the caller is expected to fall back to an empty track.
//!
//! Format selection is driven by the file-name suffix the caller already has.
//! No content sniffing happens here.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use super::Caption;
use crate::{CoreError, CoreResult, TimeSec};

// =============================================================================
// Format Dispatch
// =============================================================================

/// Caption source format, selected from the file-name suffix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionFormat {
    /// WebVTT text (`.vtt`)
    Vtt,
    /// SubRip text (`.srt`)
    Srt,
    /// Structured JSON caption array (any other suffix)
    Json,
}

impl CaptionFormat {
    /// Selects the format from a file name.
    ///
    /// `.vtt` and `.srt` suffixes (case-insensitive) pick their format;
    /// anything else is treated as structured JSON.
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".vtt") {
            Self::Vtt
        } else if lower.ends_with(".srt") {
            Self::Srt
        } else {
            Self::Json
        }
    }

    /// Parses raw caption text in this format.
    ///
    /// VTT and SRT always succeed (possibly with zero cues); only JSON
    /// decoding can fail.
    pub fn parse(&self, raw: &str) -> CoreResult<Vec<Caption>> {
        match self {
            Self::Vtt => Ok(parse_vtt(raw)),
            Self::Srt => Ok(parse_srt(raw)),
            Self::Json => parse_json(raw),
        }
    }
}

// =============================================================================
// Timestamp Codecs
// =============================================================================

/// Parses a WebVTT timestamp (`HH:MM:SS.mmm` or `MM:SS.mmm`) into seconds.
///
/// Permissive by contract: a lone seconds field is accepted, an empty string
/// yields `0.0`, and any non-numeric field poisons the result to `NaN` rather
/// than raising. This mirrors the historical player behavior and is a
/// documented limitation, not something to correct silently.
pub fn parse_vtt_time(text: &str) -> TimeSec {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let field = |s: &str| s.trim().parse::<f64>().unwrap_or(f64::NAN);

    let parts: Vec<&str> = text.split(':').collect();
    match parts.as_slice() {
        [h, m, s] => field(h) * 3600.0 + field(m) * 60.0 + field(s),
        [m, s] => field(m) * 60.0 + field(s),
        [s] => field(s),
        // Four or more colon-separated fields is not a VTT timestamp
        _ => f64::NAN,
    }
}

static SRT_TIME_RE: OnceLock<Regex> = OnceLock::new();

fn srt_time_re() -> &'static Regex {
    SRT_TIME_RE.get_or_init(|| {
        Regex::new(r"(\d{2}):(\d{2}):(\d{2}),(\d{3})").expect("SRT timestamp pattern is valid")
    })
}

/// Parses a SubRip timestamp (`HH:MM:SS,mmm`, exact digit groups) into
/// seconds.
///
/// Strict by contract: anything that does not match the pattern yields `0.0`,
/// meaning "no reliable timestamp", not an error.
pub fn parse_srt_time(text: &str) -> TimeSec {
    let Some(caps) = srt_time_re().captures(text) else {
        return 0.0;
    };

    // Captured groups are all-digit, so these parses cannot fail.
    let group = |i: usize| caps[i].parse::<f64>().unwrap_or(0.0);

    group(1) * 3600.0 + group(2) * 60.0 + group(3) + group(4) / 1000.0
}

/// Splits a `start --> end` timing line and decodes both sides with the given
/// codec. Cue settings after the end timestamp are ignored.
fn split_cue_times(line: &str, codec: fn(&str) -> TimeSec) -> (TimeSec, TimeSec) {
    let (start_text, end_text) = line.split_once("-->").unwrap_or((line, ""));
    let end_text = end_text.trim();
    let end_text = end_text.split_whitespace().next().unwrap_or(end_text);
    (codec(start_text.trim()), codec(end_text))
}

// =============================================================================
// WebVTT
// =============================================================================

/// Returns true for a pure cue-index line (digits only)
fn is_cue_index(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// Parses WebVTT content into captions, in file order.
///
/// A line containing `-->` opens a cue; following non-blank lines (excluding
/// the literal `WEBVTT` header and pure cue-index lines) accumulate as its
/// text, joined with single spaces. A blank line closes the cue, and a cue
/// still open at end-of-input is flushed. Cues that accumulated no text are
/// dropped.
pub fn parse_vtt(raw: &str) -> Vec<Caption> {
    let mut cues = Vec::new();
    let mut timing: Option<(TimeSec, TimeSec)> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.contains("-->") {
            close_cue(&mut cues, timing.take(), &mut buffer);
            timing = Some(split_cue_times(trimmed, parse_vtt_time));
        } else if trimmed.is_empty() {
            close_cue(&mut cues, timing.take(), &mut buffer);
        } else if trimmed == "WEBVTT" || is_cue_index(trimmed) {
            continue;
        } else if timing.is_some() {
            buffer.push(trimmed);
        }
    }
    close_cue(&mut cues, timing.take(), &mut buffer);

    cues
}

/// Flushes an open cue into the result, dropping it when no text accumulated
fn close_cue(cues: &mut Vec<Caption>, timing: Option<(TimeSec, TimeSec)>, buffer: &mut Vec<&str>) {
    let text = buffer.join(" ");
    buffer.clear();

    if let Some((start, end)) = timing {
        if !text.is_empty() {
            cues.push(Caption::new(start, end, &text));
        }
    }
}

// =============================================================================
// SubRip
// =============================================================================

/// Parses SubRip content into captions, in file order.
///
/// Line endings are normalized to `\n` first, then the input is split on
/// blank lines into blocks. A block needs at least three lines: a sequence
/// index (ignored), a `start --> end` timing line, and one or more text lines
/// joined with single spaces. Blocks failing either check are skipped with a
/// warning; blocks producing empty text are dropped.
pub fn parse_srt(raw: &str) -> Vec<Caption> {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");

    let mut cues = Vec::new();
    for block in normalized.split("\n\n") {
        if block.trim().is_empty() {
            continue;
        }

        let lines: Vec<&str> = block.lines().collect();
        if lines.len() < 3 {
            warn!("Skipping SRT block with fewer than 3 lines: {:?}", block.trim());
            continue;
        }
        if !lines[1].contains("-->") {
            warn!("Skipping SRT block without a timing line: {:?}", lines[1]);
            continue;
        }

        let (start, end) = split_cue_times(lines[1], parse_srt_time);
        let text = lines[2..]
            .iter()
            .map(|l| l.trim())
            .collect::<Vec<_>>()
            .join(" ");
        let text = text.trim();

        if text.is_empty() {
            continue;
        }
        cues.push(Caption::new(start, end, text));
    }

    cues
}

// =============================================================================
// Structured JSON
// =============================================================================

/// Decodes a structured JSON caption array (`[{start, end, text}, ...]`).
///
/// Decode failure is fatal to this parse call only: the error is surfaced and
/// the caller falls back to an empty caption track. No partial recovery is
/// attempted.
pub fn parse_json(raw: &str) -> CoreResult<Vec<Caption>> {
    match serde_json::from_str::<Vec<Caption>>(raw) {
        Ok(cues) => Ok(cues),
        Err(e) => {
            warn!("Structured caption decode failed: {}", e);
            Err(CoreError::CaptionDecode(e))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
