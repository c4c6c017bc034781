//! StreamInsight Error Definitions
//!
//! Defines error types used throughout the core. Malformed caption cues and
//! timestamps are deliberately *not* errors: the parsers skip or degrade per
//! the tolerant ingestion policy, and only an undecodable structured caption
//! document surfaces as a failure.

use thiserror::Error;

use crate::{Page, QuestionId};

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    // =========================================================================
    // Caption Errors
    // =========================================================================
    #[error("Caption decode failed: {0}")]
    CaptionDecode(#[from] serde_json::Error),

    #[error("No captions available")]
    CaptionsUnavailable,

    // =========================================================================
    // Session Errors
    // =========================================================================
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Not allowed on the {0} page")]
    WrongPage(Page),

    #[error("Bookmark not found: {0}")]
    BookmarkNotFound(String),

    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Option {option} out of range for question {question}")]
    InvalidAnswer { question: QuestionId, option: usize },

    #[error("Quiz incomplete: {answered}/{total} answered")]
    QuizIncomplete { answered: usize, total: usize },
}

/// Core result type
pub type CoreResult<T> = Result<T, CoreError>;
