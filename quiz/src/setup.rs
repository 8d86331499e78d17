//! Setup screen form state.
//!
//! Holds the subject selection, the free-form level field, and the
//! question-count slider, plus which of the three controls has focus. The
//! clamping rules themselves live in `quiz_core::config`; this form only
//! routes keys and applies blur on focus changes.

use quiz_core::{CountSelector, LevelField, QuizConfig, Subject};

/// Which setup control has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupFocus {
    #[default]
    Subject,
    Level,
    Count,
}

/// State of the setup screen.
#[derive(Debug, Default)]
pub struct SetupForm {
    pub subject_index: usize,
    pub level: LevelField,
    pub count: CountSelector,
    pub focus: SetupFocus,
}

impl SetupForm {
    pub fn subject(&self) -> Subject {
        Subject::ALL[self.subject_index]
    }

    /// Move focus to the next control. Leaving the level field blurs it,
    /// clamping a transient low value.
    pub fn next_focus(&mut self) {
        self.set_focus(match self.focus {
            SetupFocus::Subject => SetupFocus::Level,
            SetupFocus::Level => SetupFocus::Count,
            SetupFocus::Count => SetupFocus::Subject,
        });
    }

    /// Move focus to the previous control.
    pub fn prev_focus(&mut self) {
        self.set_focus(match self.focus {
            SetupFocus::Subject => SetupFocus::Count,
            SetupFocus::Level => SetupFocus::Subject,
            SetupFocus::Count => SetupFocus::Level,
        });
    }

    fn set_focus(&mut self, focus: SetupFocus) {
        if self.focus == SetupFocus::Level && focus != SetupFocus::Level {
            self.level.blur();
        }
        self.focus = focus;
    }

    pub fn subject_next(&mut self) {
        self.subject_index = (self.subject_index + 1) % Subject::ALL.len();
    }

    pub fn subject_prev(&mut self) {
        self.subject_index = (self.subject_index + Subject::ALL.len() - 1) % Subject::ALL.len();
    }

    /// Coarse difficulty label shown under the level field while editing.
    /// Intentionally coarser than the six prompt tiers.
    pub fn tier_label(&self) -> &'static str {
        match self.level.value().unwrap_or(0) {
            0..=200 => "Beginner",
            201..=500 => "Intermediate",
            501..=800 => "Advanced",
            _ => "Expert",
        }
    }

    /// Final configuration for the quiz start, always in range.
    pub fn commit(&self) -> QuizConfig {
        QuizConfig::new(self.subject(), self.level.commit(), self.count.value())
    }
}
