//! Validated question records.
//!
//! A [`Question`] can only be built through [`Question::from_parts`], which
//! enforces the shape the quiz screens rely on: exactly four distinct
//! options and an in-range correct index. Malformed source data is rejected
//! here so an unanswerable question can never reach a session.

use thiserror::Error;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// Why a question record was rejected at the source boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,

    #[error("expected {OPTION_COUNT} options, got {0}")]
    WrongOptionCount(usize),

    #[error("options are not distinct")]
    DuplicateOptions,

    #[error("correct answer index {0} out of range")]
    IndexOutOfRange(usize),
}

/// A single multiple-choice question. Read-only after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Ordinal position in the generated batch, 0-based.
    pub id: usize,
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer_index: usize,
    pub explanation: Option<String>,
}

impl Question {
    /// Validate raw fields into a question.
    ///
    /// An empty or whitespace-only explanation is normalized to `None`.
    pub fn from_parts(
        id: usize,
        text: String,
        options: Vec<String>,
        correct_answer_index: usize,
        explanation: Option<String>,
    ) -> Result<Self, QuestionError> {
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() != OPTION_COUNT {
            return Err(QuestionError::WrongOptionCount(options.len()));
        }
        for (i, a) in options.iter().enumerate() {
            for b in &options[i + 1..] {
                if a == b {
                    return Err(QuestionError::DuplicateOptions);
                }
            }
        }
        if correct_answer_index >= OPTION_COUNT {
            return Err(QuestionError::IndexOutOfRange(correct_answer_index));
        }

        let options: [String; OPTION_COUNT] = options
            .try_into()
            .map_err(|v: Vec<String>| QuestionError::WrongOptionCount(v.len()))?;

        Ok(Self {
            id,
            text,
            options,
            correct_answer_index,
            explanation: explanation.filter(|e| !e.trim().is_empty()),
        })
    }
}
