//! Widgets for the setup screen controls

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use quiz_core::{LevelField, Subject, COUNT_MAX, COUNT_MIN, LEVEL_MAX};

use crate::ui::theme::QuizTheme;

/// Subject selection list
pub struct SubjectListWidget<'a> {
    selected: usize,
    theme: &'a QuizTheme,
    focused: bool,
}

impl<'a> SubjectListWidget<'a> {
    pub fn new(selected: usize, theme: &'a QuizTheme) -> Self {
        Self {
            selected,
            theme,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SubjectListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" 1. Choose Subject ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = Subject::ALL
            .iter()
            .enumerate()
            .map(|(i, subject)| {
                if i == self.selected {
                    Line::from(vec![
                        Span::styled("▸ ", self.theme.accent_style()),
                        Span::styled(subject.label(), self.theme.accent_style()),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled(subject.label(), self.theme.text_style()),
                    ])
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Free-form difficulty level field with step controls
pub struct LevelFieldWidget<'a> {
    level: &'a LevelField,
    tier_label: &'a str,
    theme: &'a QuizTheme,
    focused: bool,
}

impl<'a> LevelFieldWidget<'a> {
    pub fn new(level: &'a LevelField, tier_label: &'a str, theme: &'a QuizTheme) -> Self {
        Self {
            level,
            tier_label,
            theme,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for LevelFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" 2. Difficulty Level ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let value_line = match self.level.value() {
            Some(v) => Line::from(vec![
                Span::styled("  - ", self.theme.hint_style()),
                Span::styled(
                    format!("{v:^6}"),
                    self.theme.accent_style().add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(format!(" /{LEVEL_MAX}"), self.theme.hint_style()),
                Span::styled("  + ", self.theme.hint_style()),
            ]),
            None => Line::from(vec![
                Span::styled("  - ", self.theme.hint_style()),
                Span::styled(
                    format!("{:^6}", "1-1000"),
                    self.theme.dimmed_style().add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(format!(" /{LEVEL_MAX}"), self.theme.hint_style()),
                Span::styled("  + ", self.theme.hint_style()),
            ]),
        };

        let lines = vec![
            Line::from(""),
            value_line,
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", self.tier_label),
                self.theme.accent_style().add_modifier(Modifier::DIM),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Discrete question-count slider over [10,50]
pub struct CountSliderWidget<'a> {
    value: u8,
    fraction: f64,
    theme: &'a QuizTheme,
    focused: bool,
}

impl<'a> CountSliderWidget<'a> {
    pub fn new(value: u8, fraction: f64, theme: &'a QuizTheme) -> Self {
        Self {
            value,
            fraction,
            theme,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for CountSliderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" 3. Quiz Length ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let track_width = inner.width.saturating_sub(4).max(10) as usize;
        let filled = (self.fraction * track_width as f64).round() as usize;
        let track: String = "█".repeat(filled) + &"░".repeat(track_width.saturating_sub(filled));

        let lines = vec![
            Line::from(vec![
                Span::styled("  Total Questions: ", self.theme.text_style()),
                Span::styled(self.value.to_string(), self.theme.accent_style()),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(track, self.theme.accent_style()),
            ]),
            Line::from(Span::styled(
                format!("  {COUNT_MIN} Questions{:>width$}", format!("{COUNT_MAX} Questions"), width = track_width.saturating_sub(10)),
                self.theme.hint_style(),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
