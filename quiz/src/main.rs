//! AI quiz TUI application.
//!
//! Pick a subject, a difficulty level from 1 to 1000, and a question count;
//! the app asks Gemini for a batch of multiple-choice questions and runs
//! them one at a time.
//!
//! Requires `GEMINI_API_KEY` in the environment or a `.env` file. Set
//! `QUIZ_LOG=<file>` to write tracing output to a log file (stdout belongs
//! to the terminal UI).

mod app;
mod events;
mod setup;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quiz_core::GeminiSource;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Check for API key
    if std::env::var("GEMINI_API_KEY").is_err() {
        eprintln!("Error: GEMINI_API_KEY environment variable not set.");
        eprintln!("Please set it in .env file or with: export GEMINI_API_KEY=your_key_here");
        std::process::exit(1);
    }

    init_logging();

    let source = match GeminiSource::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to create question source: {e}");
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(Arc::new(source))).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

/// Write tracing output to the file named by QUIZ_LOG, if set.
fn init_logging() {
    let Ok(path) = std::env::var("QUIZ_LOG") else {
        return;
    };
    match std::fs::File::create(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => {
            eprintln!("Warning: could not open log file {path}: {e}");
        }
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        // Settle the in-flight generation call, if any
        app.poll_generation();

        // Poll for events with timeout for the loading animation
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(()),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
