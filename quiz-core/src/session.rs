//! Per-quiz answer session.
//!
//! Tracks the current question, the selected option, and the running score
//! while the application is in the Quiz phase. The session is created from
//! a generated batch and destroyed when the phase moves on; nothing here
//! survives a restart.

use crate::question::{Question, OPTION_COUNT};

/// Result of advancing past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next question.
    Next,
    /// The last question was answered; the session's final tally.
    Finished { score: usize, total: usize },
}

/// How an option row should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// Not yet answered; all options look the same.
    Neutral,
    /// The correct option, revealed after answering.
    Correct,
    /// The selected option when it differs from the correct one.
    WrongSelected,
    /// Any other option once answered.
    Dimmed,
}

/// Transient state for one quiz attempt.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    selected_option_index: Option<usize>,
    score: usize,
    is_answered: bool,
}

impl QuizSession {
    /// Start a session over a non-empty batch of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        debug_assert!(!questions.is_empty());
        Self {
            questions,
            current_index: 0,
            selected_option_index: None,
            score: 0,
            is_answered: false,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_answered(&self) -> bool {
        self.is_answered
    }

    pub fn selected_option_index(&self) -> Option<usize> {
        self.selected_option_index
    }

    /// Record an answer for the current question.
    ///
    /// Idempotent: once the question is answered, further calls are no-ops.
    /// This is the only place the score changes.
    pub fn select_option(&mut self, idx: usize) {
        if self.is_answered || idx >= OPTION_COUNT {
            return;
        }
        self.selected_option_index = Some(idx);
        self.is_answered = true;
        if idx == self.current_question().correct_answer_index {
            self.score += 1;
        }
    }

    /// Move to the next question, or finalize at the last one.
    ///
    /// Returns `None` while the current question is unanswered; callers are
    /// expected to disable the affordance in that state.
    pub fn advance(&mut self) -> Option<Advance> {
        if !self.is_answered {
            return None;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected_option_index = None;
            self.is_answered = false;
            Some(Advance::Next)
        } else {
            Some(Advance::Finished {
                score: self.score,
                total: self.questions.len(),
            })
        }
    }

    /// Fraction of questions started, in [0,1]. The current question does
    /// not count as complete, so this is 0 at the first question.
    pub fn progress(&self) -> f64 {
        self.current_index as f64 / self.questions.len() as f64
    }

    /// Presentation classification for the option at `idx`.
    pub fn option_mark(&self, idx: usize) -> OptionMark {
        if !self.is_answered {
            return OptionMark::Neutral;
        }
        if idx == self.current_question().correct_answer_index {
            OptionMark::Correct
        } else if Some(idx) == self.selected_option_index {
            OptionMark::WrongSelected
        } else {
            OptionMark::Dimmed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: usize, correct: usize) -> Question {
        Question::from_parts(
            id,
            format!("Question {id}?"),
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
            None,
        )
        .unwrap()
    }

    fn session(n: usize) -> QuizSession {
        QuizSession::new((0..n).map(|i| question(i, 1)).collect())
    }

    #[test]
    fn test_select_correct_scores_once() {
        let mut s = session(3);
        s.select_option(1);
        assert_eq!(s.score(), 1);
        assert!(s.is_answered());
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut s = session(3);
        s.select_option(0); // wrong
        s.select_option(1); // would be correct, but already answered
        assert_eq!(s.score(), 0);
        assert_eq!(s.selected_option_index(), Some(0));
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut s = session(3);
        s.select_option(9);
        assert!(!s.is_answered());
        assert_eq!(s.selected_option_index(), None);
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut s = session(2);
        assert_eq!(s.advance(), None);
        s.select_option(1);
        assert_eq!(s.advance(), Some(Advance::Next));
        assert_eq!(s.current_index(), 1);
        assert!(!s.is_answered());
        assert_eq!(s.selected_option_index(), None);
    }

    #[test]
    fn test_advance_finalizes_at_last_index() {
        let mut s = session(2);
        s.select_option(1);
        s.advance();
        s.select_option(0);
        assert_eq!(
            s.advance(),
            Some(Advance::Finished { score: 1, total: 2 })
        );
        // Index never moved out of range
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn test_score_never_exceeds_answered() {
        let mut s = session(5);
        for _ in 0..4 {
            s.select_option(1);
            s.advance();
        }
        s.select_option(1);
        assert_eq!(s.score(), 5);
        assert_eq!(
            s.advance(),
            Some(Advance::Finished { score: 5, total: 5 })
        );
    }

    #[test]
    fn test_progress_counts_started_questions() {
        let mut s = session(4);
        assert_eq!(s.progress(), 0.0);
        s.select_option(1);
        s.advance();
        assert_eq!(s.progress(), 0.25);
    }

    #[test]
    fn test_option_marks() {
        let mut s = session(1);
        assert_eq!(s.option_mark(0), OptionMark::Neutral);
        s.select_option(3); // correct is 1
        assert_eq!(s.option_mark(1), OptionMark::Correct);
        assert_eq!(s.option_mark(3), OptionMark::WrongSelected);
        assert_eq!(s.option_mark(0), OptionMark::Dimmed);
        assert_eq!(s.option_mark(2), OptionMark::Dimmed);
    }

    #[test]
    fn test_correct_selection_marked_correct_not_wrong() {
        let mut s = session(1);
        s.select_option(1);
        assert_eq!(s.option_mark(1), OptionMark::Correct);
    }
}
