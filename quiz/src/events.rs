//! Event handling for the quiz TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use quiz_core::Phase;

use crate::app::App;
use crate::setup::SetupFocus;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Ctrl+C always quits
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    match app.flow.phase() {
        Phase::Setup => handle_setup_key(app, key),
        // Loading has no user-triggered exit; the phase moves on when the
        // generation call settles.
        Phase::Loading => EventResult::Continue,
        Phase::Quiz(_) => handle_quiz_key(app, key),
        Phase::Results { .. } | Phase::Error { .. } => handle_end_key(app, key),
    }
}

/// Handle keys on the setup screen
fn handle_setup_key(app: &mut App, key: KeyEvent) -> EventResult {
    // 'q' quits unless the level field would swallow it anyway
    if key.code == KeyCode::Char('q') && app.setup.focus != SetupFocus::Level {
        return EventResult::Quit;
    }

    match key.code {
        KeyCode::Tab => {
            app.setup.next_focus();
            EventResult::NeedsRedraw
        }
        KeyCode::BackTab => {
            app.setup.prev_focus();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.start_quiz();
            EventResult::NeedsRedraw
        }
        _ => match app.setup.focus {
            SetupFocus::Subject => handle_subject_key(app, key),
            SetupFocus::Level => handle_level_key(app, key),
            SetupFocus::Count => handle_count_key(app, key),
        },
    }
}

fn handle_subject_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            app.setup.subject_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            app.setup.subject_next();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_level_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char(c @ '0'..='9') => {
            app.setup.level.type_char(c);
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            app.setup.level.backspace();
            EventResult::NeedsRedraw
        }
        KeyCode::Up | KeyCode::Char('+') => {
            app.setup.level.step(true);
            EventResult::NeedsRedraw
        }
        KeyCode::Down | KeyCode::Char('-') => {
            app.setup.level.step(false);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_count_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Left | KeyCode::Down | KeyCode::Char('h') | KeyCode::Char('-') => {
            app.setup.count.decrement();
            EventResult::NeedsRedraw
        }
        KeyCode::Right | KeyCode::Up | KeyCode::Char('l') | KeyCode::Char('+') => {
            app.setup.count.increment();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle keys on the quiz screen
fn handle_quiz_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => EventResult::Quit,
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c.to_digit(10).unwrap_or(1) as usize - 1;
            app.select_option(idx);
            EventResult::NeedsRedraw
        }
        // Advance only once answered; App::advance respects that
        KeyCode::Enter | KeyCode::Char('n') => {
            app.advance();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle keys on the results and error screens
fn handle_end_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => EventResult::Quit,
        KeyCode::Enter | KeyCode::Char('r') => {
            app.restart();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}
