//! Question card widget: question text, option rows, and explanation

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use quiz_core::{OptionMark, QuizSession};

use crate::ui::theme::QuizTheme;

/// The question card shown during the Quiz phase.
///
/// The option classification is a pure function of the session state, so
/// this widget carries no state of its own.
pub struct QuestionCardWidget<'a> {
    session: &'a QuizSession,
    theme: &'a QuizTheme,
}

impl<'a> QuestionCardWidget<'a> {
    pub fn new(session: &'a QuizSession, theme: &'a QuizTheme) -> Self {
        Self { session, theme }
    }
}

impl Widget for QuestionCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        let question = self.session.current_question();
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            question.text.clone(),
            self.theme.text_style(),
        )));
        lines.push(Line::from(""));

        for (idx, option) in question.options.iter().enumerate() {
            let (marker, style) = match self.session.option_mark(idx) {
                OptionMark::Neutral => ("  ", self.theme.text_style()),
                OptionMark::Correct => ("✓ ", self.theme.correct_style()),
                OptionMark::WrongSelected => ("✗ ", self.theme.wrong_style()),
                OptionMark::Dimmed => ("  ", self.theme.dimmed_style()),
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {}. ", idx + 1), style),
                Span::styled(option.clone(), style),
                Span::styled(format!(" {marker}"), style),
            ]));
        }

        if self.session.is_answered() {
            if let Some(explanation) = &question.explanation {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("💡 {explanation}"),
                    self.theme.explanation_style(),
                )));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
