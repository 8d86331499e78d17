//! Quiz subject categories.

use std::fmt;

/// A quiz subject. Closed set; the setup screen offers exactly these five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subject {
    #[default]
    Mathematics,
    Science,
    History,
    Geography,
    CurrentAffairs,
}

impl Subject {
    /// All subjects in setup-screen order.
    pub const ALL: [Subject; 5] = [
        Subject::Mathematics,
        Subject::Science,
        Subject::History,
        Subject::Geography,
        Subject::CurrentAffairs,
    ];

    /// Human-readable label, as used in the generation prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Science => "Science",
            Subject::History => "History",
            Subject::Geography => "Geography",
            Subject::CurrentAffairs => "Current Affairs",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
