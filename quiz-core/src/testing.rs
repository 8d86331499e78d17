//! Testing utilities for the quiz engine.
//!
//! `MockSource` is a scripted [`QuestionSource`] for deterministic tests
//! without API calls, and `sample_questions` builds valid batches.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::question::Question;
use crate::source::{GenerationError, QuestionSource, SourceFailure};
use crate::subject::Subject;

/// One scripted outcome for a `generate` call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Questions(Vec<Question>),
    Failure(String),
}

/// A question source that returns scripted outcomes in order.
///
/// Once the script runs out, further calls fail. Outcomes are queued behind
/// a mutex so the source can be shared with a spawned generation task.
pub struct MockSource {
    outcomes: Mutex<VecDeque<MockOutcome>>,
}

impl MockSource {
    pub fn new(outcomes: Vec<MockOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
        }
    }

    /// A source that succeeds once with the given batch.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self::new(vec![MockOutcome::Questions(questions)])
    }

    /// A source that fails once with the given scripted detail.
    pub fn with_failure(detail: impl Into<String>) -> Self {
        Self::new(vec![MockOutcome::Failure(detail.into())])
    }

    /// Queue another outcome.
    pub fn queue(&self, outcome: MockOutcome) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }
}

#[async_trait]
impl QuestionSource for MockSource {
    async fn generate(
        &self,
        _subject: Subject,
        _level: u16,
        _count: u8,
    ) -> Result<Vec<Question>, GenerationError> {
        let outcome = self.outcomes.lock().unwrap().pop_front();
        match outcome {
            Some(MockOutcome::Questions(questions)) => Ok(questions),
            Some(MockOutcome::Failure(detail)) => {
                Err(GenerationError::new(SourceFailure::Scripted(detail)))
            }
            None => Err(GenerationError::new(SourceFailure::Scripted(
                "no more scripted outcomes".into(),
            ))),
        }
    }
}

/// Build `n` valid questions. The correct answer for question `i` is
/// `i % 4`, so tests can answer correctly or incorrectly on purpose.
pub fn sample_questions(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| {
            Question::from_parts(
                i,
                format!("Sample question {}?", i + 1),
                vec![
                    format!("Option A{i}"),
                    format!("Option B{i}"),
                    format!("Option C{i}"),
                    format!("Option D{i}"),
                ],
                i % 4,
                Some(format!("Explanation for question {}.", i + 1)),
            )
            .expect("sample question is valid")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_source_plays_script_in_order() {
        let source = MockSource::new(vec![
            MockOutcome::Questions(sample_questions(2)),
            MockOutcome::Failure("second call fails".into()),
        ]);

        let first = source.generate(Subject::Science, 500, 10).await.unwrap();
        assert_eq!(first.len(), 2);

        let second = source.generate(Subject::Science, 500, 10).await;
        assert!(second.is_err());
    }

    #[tokio::test]
    async fn test_mock_source_exhausted_script_fails() {
        let source = MockSource::new(Vec::new());
        assert!(source.generate(Subject::History, 1, 10).await.is_err());
    }

    #[test]
    fn test_sample_questions_are_valid() {
        let questions = sample_questions(8);
        assert_eq!(questions.len(), 8);
        assert_eq!(questions[5].correct_answer_index, 1);
        assert_eq!(questions[5].id, 5);
    }
}
