//! Color theme and styling for the quiz TUI

use ratatui::style::{Color, Modifier, Style};

/// Quiz UI color theme
#[derive(Debug, Clone)]
pub struct QuizTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,

    // Answer reveal colors
    pub correct: Color,
    pub wrong: Color,
    pub dimmed: Color,

    // Text colors
    pub hint_text: Color,
    pub explanation_text: Color,
    pub error_text: Color,
}

impl Default for QuizTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            accent: Color::Cyan,

            correct: Color::Green,
            wrong: Color::Red,
            dimmed: Color::DarkGray,

            hint_text: Color::DarkGray,
            explanation_text: Color::LightBlue,
            error_text: Color::LightRed,
        }
    }
}

impl QuizTheme {
    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Get style for highlighted/accented text
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Get style for a revealed correct option
    pub fn correct_style(&self) -> Style {
        Style::default().fg(self.correct).add_modifier(Modifier::BOLD)
    }

    /// Get style for a wrongly selected option
    pub fn wrong_style(&self) -> Style {
        Style::default().fg(self.wrong).add_modifier(Modifier::BOLD)
    }

    /// Get style for dimmed options after reveal
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed).add_modifier(Modifier::DIM)
    }

    /// Get style for key hints
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint_text).add_modifier(Modifier::DIM)
    }

    /// Get style for explanations shown after answering
    pub fn explanation_style(&self) -> Style {
        Style::default().fg(self.explanation_text)
    }

    /// Get style for error text
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_text).add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}
