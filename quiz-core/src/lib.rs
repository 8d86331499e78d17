//! Quiz engine with AI-generated multiple-choice questions.
//!
//! This crate provides:
//! - The five-phase application state machine (Setup, Loading, Quiz,
//!   Results, Error)
//! - The per-question answer session with scoring
//! - Setup input clamping for difficulty level and question count
//! - A question source adapter backed by the Gemini API, with strict
//!   boundary validation and a scripted mock for tests
//!
//! # Quick Start
//!
//! ```ignore
//! use quiz_core::{GeminiSource, QuestionSource, QuizConfig, QuizFlow, Subject};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = QuizConfig::new(Subject::Science, 950, 10);
//!     let source = GeminiSource::from_env()?;
//!
//!     let mut flow = QuizFlow::new();
//!     flow.start()?;
//!
//!     match source
//!         .generate(config.subject, config.level, config.question_count)
//!         .await
//!     {
//!         Ok(questions) => flow.questions_ready(questions)?,
//!         Err(e) => flow.generation_failed(e.to_string())?,
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod flow;
pub mod question;
pub mod session;
pub mod source;
pub mod subject;
pub mod testing;

// Primary public API
pub use config::{
    CountSelector, LevelField, QuizConfig, COUNT_MAX, COUNT_MIN, LEVEL_MAX, LEVEL_MIN, LEVEL_STEP,
};
pub use flow::{percentage, FlowError, Phase, QuizFlow, FALLBACK_ERROR_MESSAGE};
pub use question::{Question, QuestionError, OPTION_COUNT};
pub use session::{Advance, OptionMark, QuizSession};
pub use source::{DifficultyTier, GeminiSource, GenerationError, QuestionSource};
pub use subject::Subject;
