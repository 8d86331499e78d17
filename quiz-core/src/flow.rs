//! Top-level application state machine.
//!
//! One [`Phase`] value is active at a time, and each phase carries exactly
//! the data that phase needs, so combinations like "a score without a
//! session" are unrepresentable. Transitions are caller-invoked operations
//! on [`QuizFlow`]; anything outside the state graph is an
//! [`FlowError::InvalidTransition`].
//!
//! ```text
//! Setup --start--> Loading --questions_ready--> Quiz --finish--> Results
//!                     |                                             |
//!                     +--generation_failed--> Error --restart--> Setup
//! ```

use thiserror::Error;

use crate::question::Question;
use crate::session::QuizSession;

/// Message shown when a generation failure carried no detail.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "We couldn't generate the quiz questions. Please check your connection or API key.";

/// The application phase, with per-phase payload.
#[derive(Debug, Clone)]
pub enum Phase {
    Setup,
    Loading,
    Quiz(QuizSession),
    Results { score: usize, total: usize },
    Error { message: String },
}

impl Phase {
    /// Short phase name for errors and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Setup => "Setup",
            Phase::Loading => "Loading",
            Phase::Quiz(_) => "Quiz",
            Phase::Results { .. } => "Results",
            Phase::Error { .. } => "Error",
        }
    }
}

/// Errors from the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("operation '{operation}' is not valid in the {phase} phase")]
    InvalidTransition {
        operation: &'static str,
        phase: &'static str,
    },
}

/// Owns the phase and exposes the transition operations the presentation
/// layer drives.
#[derive(Debug)]
pub struct QuizFlow {
    phase: Phase,
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizFlow {
    pub fn new() -> Self {
        Self { phase: Phase::Setup }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The active session, while in the Quiz phase.
    pub fn session(&self) -> Option<&QuizSession> {
        match &self.phase {
            Phase::Quiz(session) => Some(session),
            _ => None,
        }
    }

    /// Mutable access to the active session, while in the Quiz phase.
    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        match &mut self.phase {
            Phase::Quiz(session) => Some(session),
            _ => None,
        }
    }

    /// Setup -> Loading. Only Setup enters Loading, so at most one
    /// generation call is ever in flight.
    pub fn start(&mut self) -> Result<(), FlowError> {
        match self.phase {
            Phase::Setup => {
                self.phase = Phase::Loading;
                Ok(())
            }
            _ => Err(self.invalid("start")),
        }
    }

    /// Loading -> Quiz. An empty batch is treated as a generation failure
    /// rather than starting a quiz with nothing to show.
    pub fn questions_ready(&mut self, questions: Vec<Question>) -> Result<(), FlowError> {
        match self.phase {
            Phase::Loading => {
                if questions.is_empty() {
                    tracing::warn!("generation returned an empty batch");
                    self.phase = Phase::Error {
                        message: FALLBACK_ERROR_MESSAGE.to_string(),
                    };
                } else {
                    self.phase = Phase::Quiz(QuizSession::new(questions));
                }
                Ok(())
            }
            _ => Err(self.invalid("questions_ready")),
        }
    }

    /// Loading -> Error. An empty message falls back to the generic text.
    pub fn generation_failed(&mut self, message: impl Into<String>) -> Result<(), FlowError> {
        match self.phase {
            Phase::Loading => {
                let message = message.into();
                let message = if message.trim().is_empty() {
                    FALLBACK_ERROR_MESSAGE.to_string()
                } else {
                    message
                };
                self.phase = Phase::Error { message };
                Ok(())
            }
            _ => Err(self.invalid("generation_failed")),
        }
    }

    /// Quiz -> Results, with the session's final tally.
    pub fn finish(&mut self, score: usize, total: usize) -> Result<(), FlowError> {
        match self.phase {
            Phase::Quiz(_) => {
                self.phase = Phase::Results { score, total };
                Ok(())
            }
            _ => Err(self.invalid("finish")),
        }
    }

    /// Results|Error -> Setup. Drops all transient state; nothing from the
    /// previous quiz leaks into the new setup.
    pub fn restart(&mut self) -> Result<(), FlowError> {
        match self.phase {
            Phase::Results { .. } | Phase::Error { .. } => {
                self.phase = Phase::Setup;
                Ok(())
            }
            _ => Err(self.invalid("restart")),
        }
    }

    fn invalid(&self, operation: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            operation,
            phase: self.phase.name(),
        }
    }
}

/// Percentage for the results screen, rounded to the nearest whole number.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}
