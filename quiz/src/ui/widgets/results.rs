//! Results card widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use quiz_core::percentage;

use crate::ui::theme::QuizTheme;

/// Final score card for the Results phase.
pub struct ResultsWidget<'a> {
    score: usize,
    total: usize,
    theme: &'a QuizTheme,
}

impl<'a> ResultsWidget<'a> {
    pub fn new(score: usize, total: usize, theme: &'a QuizTheme) -> Self {
        Self {
            score,
            total,
            theme,
        }
    }

    /// Encouragement message tier for the final percentage.
    fn message(percent: u32) -> &'static str {
        if percent >= 90 {
            "Outstanding! You're an expert!"
        } else if percent >= 70 {
            "Great job! Very well done."
        } else if percent >= 50 {
            "Good effort! Keep practicing."
        } else {
            "Keep learning! You'll get there."
        }
    }
}

impl Widget for ResultsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Quiz Complete ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        let percent = percentage(self.score, self.total);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Score: {percent}%"),
                self.theme.accent_style(),
            ))
            .centered(),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "You got {} out of {} questions correct.",
                    self.score, self.total
                ),
                self.theme.text_style(),
            ))
            .centered(),
            Line::from(""),
            Line::from(Span::styled(Self::message(percent), self.theme.text_style()))
                .centered(),
            Line::from(""),
            Line::from(Span::styled(
                "Enter/r: play again    q: quit",
                self.theme.hint_style(),
            ))
            .centered(),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
