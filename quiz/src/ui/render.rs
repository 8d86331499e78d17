//! Render orchestration for the quiz TUI

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
    Frame,
};

use quiz_core::{Phase, QuizSession};

use crate::app::App;
use crate::setup::SetupFocus;
use crate::ui::layout::{centered_rect_fixed, QuizLayout, SetupLayout};
use crate::ui::widgets::{
    CountSliderWidget, LevelFieldWidget, LoadingWidget, QuestionCardWidget, ResultsWidget,
    SubjectListWidget,
};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.flow.phase() {
        Phase::Setup => render_setup(frame, app, area),
        Phase::Loading => render_loading(frame, app, area),
        Phase::Quiz(session) => render_quiz(frame, app, session, area),
        Phase::Results { score, total } => render_results(frame, app, *score, *total, area),
        Phase::Error { message } => render_error(frame, app, message, area),
    }
}

/// Render the setup screen
fn render_setup(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SetupLayout::calculate(area);

    let title = Line::from(vec![
        Span::styled("MS ", app.theme.text_style().add_modifier(Modifier::BOLD)),
        Span::styled("Quiz", app.theme.accent_style()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(title), layout.title_area);

    let subject_widget = SubjectListWidget::new(app.setup.subject_index, &app.theme)
        .focused(app.setup.focus == SetupFocus::Subject);
    frame.render_widget(subject_widget, layout.subject_area);

    let level_widget = LevelFieldWidget::new(&app.setup.level, app.setup.tier_label(), &app.theme)
        .focused(app.setup.focus == SetupFocus::Level);
    frame.render_widget(level_widget, layout.level_area);

    let count_widget = CountSliderWidget::new(
        app.setup.count.value(),
        app.setup.count.fraction(),
        &app.theme,
    )
    .focused(app.setup.focus == SetupFocus::Count);
    frame.render_widget(count_widget, layout.count_area);

    let hint = Line::from(Span::styled(
        "Tab: next section    ←/→: change    Enter: start challenge    q: quit",
        app.theme.hint_style(),
    ))
    .centered();
    frame.render_widget(Paragraph::new(hint), layout.hint_area);
}

/// Render the loading screen
fn render_loading(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect_fixed(40, 5, area);
    frame.render_widget(LoadingWidget::new(app.animation_frame, &app.theme), popup);
}

/// Render the quiz screen
fn render_quiz(frame: &mut Frame, app: &App, session: &QuizSession, area: Rect) {
    let layout = QuizLayout::calculate(area);

    let header = Line::from(vec![
        Span::styled(
            format!(
                "Question {} of {}",
                session.current_index() + 1,
                session.total()
            ),
            app.theme.text_style(),
        ),
        Span::raw("    "),
        Span::styled(format!("Score: {}", session.score()), app.theme.accent_style()),
    ]);
    frame.render_widget(Paragraph::new(header), layout.header_area);

    // Fraction of questions started; the current one does not count yet
    let gauge = Gauge::default()
        .ratio(session.progress())
        .gauge_style(app.theme.accent_style())
        .label("");
    frame.render_widget(gauge, layout.progress_area);

    frame.render_widget(
        QuestionCardWidget::new(session, &app.theme),
        layout.question_area,
    );

    let hint = if session.is_answered() {
        let label = if session.current_index() + 1 == session.total() {
            "Enter: finish quiz"
        } else {
            "Enter: next question"
        };
        Line::from(Span::styled(
            format!("{label}    q: quit"),
            app.theme.hint_style(),
        ))
    } else {
        Line::from(Span::styled(
            "1-4: answer    q: quit",
            app.theme.hint_style(),
        ))
    };
    frame.render_widget(Paragraph::new(hint.centered()), layout.hint_area);
}

/// Render the results screen
fn render_results(frame: &mut Frame, app: &App, score: usize, total: usize, area: Rect) {
    let popup = centered_rect_fixed(50, 12, area);
    frame.render_widget(ResultsWidget::new(score, total, &app.theme), popup);
}

/// Render the error screen
fn render_error(frame: &mut Frame, app: &App, message: &str, area: Rect) {
    let popup = centered_rect_fixed(56, 10, area);

    let block = ratatui::widgets::Block::default()
        .title(" Something went wrong ")
        .borders(ratatui::widgets::Borders::ALL)
        .border_style(app.theme.error_style());
    let inner = block.inner(popup);
    block.render(popup, frame.buffer_mut());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), app.theme.text_style())).centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/r: try again    q: quit",
            app.theme.hint_style(),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
