//! Loading spinner widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::QuizTheme;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner and flavor text for the Loading phase.
pub struct LoadingWidget<'a> {
    frame: u8,
    theme: &'a QuizTheme,
}

impl<'a> LoadingWidget<'a> {
    pub fn new(frame: u8, theme: &'a QuizTheme) -> Self {
        Self { frame, theme }
    }
}

impl Widget for LoadingWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spinner = SPINNER_FRAMES[usize::from(self.frame) % SPINNER_FRAMES.len()];

        let lines = vec![
            Line::from(Span::styled(spinner, self.theme.accent_style())).centered(),
            Line::from(""),
            Line::from(Span::styled(
                "Generating your quiz...",
                self.theme.text_style(),
            ))
            .centered(),
            Line::from(Span::styled(
                "Consulting the AI knowledge base",
                self.theme.hint_style(),
            ))
            .centered(),
        ];

        Paragraph::new(lines).render(area, buf);
    }
}
