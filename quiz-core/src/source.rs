//! Question source adapter.
//!
//! Translates (subject, level, count) into validated [`Question`] records
//! by asking a generative model for structured JSON. Every failure class at
//! this boundary — transport, bad credentials, empty or malformed response,
//! schema violation — surfaces to the caller as one generic
//! [`GenerationError`]; the specific cause is kept as the error source and
//! logged here. A malformed individual record fails the whole batch.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::question::{Question, QuestionError, OPTION_COUNT};
use crate::subject::Subject;

/// The user-facing message carried by every generation failure.
const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate quiz questions. Please ensure your API key is valid and try again.";

/// Difficulty band derived from the numeric level. Used only to phrase the
/// instruction sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyTier {
    Novice,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Master,
}

impl DifficultyTier {
    /// Map a level in [1,1000] onto a tier using fixed breakpoints.
    pub fn from_level(level: u16) -> Self {
        match level {
            0..=100 => DifficultyTier::Novice,
            101..=300 => DifficultyTier::Beginner,
            301..=500 => DifficultyTier::Intermediate,
            501..=700 => DifficultyTier::Advanced,
            701..=900 => DifficultyTier::Expert,
            _ => DifficultyTier::Master,
        }
    }

    /// Context sentence describing this band in the generation prompt.
    pub fn prompt_context(&self) -> &'static str {
        match self {
            DifficultyTier::Novice => {
                "Level 1-100 (Novice): Very simple, fundamental facts suitable for elementary school."
            }
            DifficultyTier::Beginner => {
                "Level 101-300 (Beginner): Basic concepts, middle school level."
            }
            DifficultyTier::Intermediate => {
                "Level 301-500 (Intermediate): High school standard, combining multiple concepts."
            }
            DifficultyTier::Advanced => {
                "Level 501-700 (Advanced): Undergraduate level, technical details, complex reasoning."
            }
            DifficultyTier::Expert => {
                "Level 701-900 (Expert): Graduate level, niche exceptions, deep analysis."
            }
            DifficultyTier::Master => {
                "Level 901-1000 (Master): World-class difficulty. Extremely obscure facts or highly complex multi-step problems requiring PhD level knowledge."
            }
        }
    }
}

/// The specific cause behind a generation failure. Not shown to users.
#[derive(Debug, Error)]
pub enum SourceFailure {
    #[error("client error: {0}")]
    Client(#[from] gemini::Error),

    #[error("response was not a JSON question array: {0}")]
    MalformedJson(String),

    #[error("record {index} rejected: {reason}")]
    InvalidQuestion {
        index: usize,
        reason: QuestionError,
    },

    #[error("scripted failure: {0}")]
    Scripted(String),
}

/// The single externally visible failure kind at the source boundary.
///
/// Displays one generic user-facing message for every failure class; the
/// underlying cause is available through `std::error::Error::source`.
#[derive(Debug, Error)]
#[error("{GENERATION_FAILED_MESSAGE}")]
pub struct GenerationError {
    #[source]
    cause: SourceFailure,
}

impl GenerationError {
    pub(crate) fn new(cause: SourceFailure) -> Self {
        tracing::error!(%cause, "question generation failed");
        Self { cause }
    }

    /// The specific cause, for logging and tests.
    pub fn cause(&self) -> &SourceFailure {
        &self.cause
    }
}

/// A capability that turns (subject, level, count) into questions.
///
/// Callers pre-clamp `level` into [1,1000] and `count` into [10,50] via
/// [`crate::QuizConfig`]; implementations may rely on that.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn generate(
        &self,
        subject: Subject,
        level: u16,
        count: u8,
    ) -> Result<Vec<Question>, GenerationError>;
}

/// Question source backed by the Gemini API.
pub struct GeminiSource {
    client: gemini::Gemini,
}

impl GeminiSource {
    pub fn new(client: gemini::Gemini) -> Self {
        Self { client }
    }

    /// Create a source from the GEMINI_API_KEY environment variable.
    pub fn from_env() -> Result<Self, GenerationError> {
        let client = gemini::Gemini::from_env()
            .map_err(|e| GenerationError::new(SourceFailure::Client(e)))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl QuestionSource for GeminiSource {
    async fn generate(
        &self,
        subject: Subject,
        level: u16,
        count: u8,
    ) -> Result<Vec<Question>, GenerationError> {
        let request = gemini::Request::new(build_prompt(subject, level, count))
            .with_temperature(0.7)
            .with_json_schema(response_schema());

        tracing::info!(%subject, level, count, "requesting quiz questions");

        let response = self
            .client
            .generate(request)
            .await
            .map_err(|e| GenerationError::new(SourceFailure::Client(e)))?;

        let questions =
            parse_questions(&response.text, count).map_err(GenerationError::new)?;

        tracing::info!(returned = questions.len(), "quiz questions generated");
        Ok(questions)
    }
}

/// Build the natural-language instruction sent to the model.
pub fn build_prompt(subject: Subject, level: u16, count: u8) -> String {
    let tier = DifficultyTier::from_level(level);
    format!(
        "You are an advanced quiz engine.\n\
         Subject: {subject}\n\
         Target Question Count: {count}\n\
         \n\
         DIFFICULTY SETTING: {level}/1000\n\
         Context: {context}\n\
         \n\
         Instructions:\n\
         1. Generate exactly {count} multiple-choice questions.\n\
         2. Adhere STRICTLY to the difficulty level of {level}.\n\
            - If level is 10, questions must be trivial.\n\
            - If level is 990, questions must be incredibly hard for a human to solve without reference.\n\
         3. Provide {option_count} distinct options for each question.\n\
         4. Ensure the correct answer is unambiguous.\n\
         5. Return ONLY the JSON matching the schema.",
        context = tier.prompt_context(),
        option_count = OPTION_COUNT,
    )
}

/// Gemini response schema for an array of question records.
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "text": {
                    "type": "STRING",
                    "description": "The text of the quiz question."
                },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "A list of exactly 4 possible answer options."
                },
                "correctAnswerIndex": {
                    "type": "INTEGER",
                    "description": "The index (0-3) of the correct answer in the options array."
                },
                "explanation": {
                    "type": "STRING",
                    "description": "A brief explanation of why the answer is correct."
                }
            },
            "required": ["text", "options", "correctAnswerIndex"]
        }
    })
}

/// Wire shape of one generated record, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    text: String,
    options: Vec<String>,
    correct_answer_index: usize,
    #[serde(default)]
    explanation: Option<String>,
}

/// Parse and validate a JSON question batch.
///
/// Ids are assigned by position. The batch is capped at `count`; fewer
/// records than requested are accepted. Any invalid record fails the whole
/// batch — partially consuming a response is never allowed.
fn parse_questions(text: &str, count: u8) -> Result<Vec<Question>, SourceFailure> {
    let raw: Vec<RawQuestion> =
        serde_json::from_str(text).map_err(|e| SourceFailure::MalformedJson(e.to_string()))?;

    raw.into_iter()
        .take(usize::from(count))
        .enumerate()
        .map(|(id, q)| {
            Question::from_parts(id, q.text, q.options, q.correct_answer_index, q.explanation)
                .map_err(|reason| SourceFailure::InvalidQuestion { index: id, reason })
        })
        .collect()
}
