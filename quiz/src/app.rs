//! Main application state and logic

use std::sync::Arc;

use quiz_core::{Advance, GenerationError, Question, QuestionSource, QuizFlow};
use tokio::sync::mpsc;

use crate::setup::SetupForm;
use crate::ui::theme::QuizTheme;

type GenerationResult = Result<Vec<Question>, GenerationError>;

/// Main application state
pub struct App {
    pub flow: QuizFlow,
    pub setup: SetupForm,
    pub theme: QuizTheme,

    source: Arc<dyn QuestionSource>,
    // Receiver for the single in-flight generation call; Some only while
    // the flow is in the Loading phase.
    generation_rx: Option<mpsc::Receiver<GenerationResult>>,

    // Animation
    pub animation_frame: u8,
    pub should_quit: bool,
}

impl App {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            flow: QuizFlow::new(),
            setup: SetupForm::default(),
            theme: QuizTheme::default(),
            source,
            generation_rx: None,
            animation_frame: 0,
            should_quit: false,
        }
    }

    /// Start a quiz from the setup form. Moves the flow to Loading and
    /// spawns the generation call; its result comes back via the channel.
    pub fn start_quiz(&mut self) {
        let config = self.setup.commit();
        if self.flow.start().is_err() {
            return;
        }

        let (tx, rx) = mpsc::channel(1);
        self.generation_rx = Some(rx);

        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            let result = source
                .generate(config.subject, config.level, config.question_count)
                .await;
            let _ = tx.send(result).await;
        });
    }

    /// Check whether the in-flight generation call has settled and, if so,
    /// transition out of Loading. The batch arrives atomically or not at all.
    pub fn poll_generation(&mut self) {
        let Some(rx) = &mut self.generation_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(questions)) => {
                self.generation_rx = None;
                let _ = self.flow.questions_ready(questions);
            }
            Ok(Err(e)) => {
                self.generation_rx = None;
                let _ = self.flow.generation_failed(e.to_string());
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                // Generation task died without reporting
                self.generation_rx = None;
                let _ = self.flow.generation_failed("");
            }
        }
    }

    /// Record an answer for the current question.
    pub fn select_option(&mut self, idx: usize) {
        if let Some(session) = self.flow.session_mut() {
            session.select_option(idx);
        }
    }

    /// Advance past an answered question, finalizing at the last one.
    pub fn advance(&mut self) {
        let Some(session) = self.flow.session_mut() else {
            return;
        };
        match session.advance() {
            Some(Advance::Finished { score, total }) => {
                let _ = self.flow.finish(score, total);
            }
            Some(Advance::Next) | None => {}
        }
    }

    /// Return to a fresh setup screen from Results or Error.
    pub fn restart(&mut self) {
        if self.flow.restart().is_ok() {
            self.setup = SetupForm::default();
        }
    }

    /// Tick for the loading animation
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }
}
