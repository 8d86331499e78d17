//! QA tests for live question generation.
//!
//! These hit the real Gemini API and are ignored by default.
//!
//! Run with: `GEMINI_API_KEY=$GEMINI_API_KEY cargo test -p quiz-core qa_generation -- --ignored --nocapture`

use quiz_core::{GeminiSource, QuestionSource, QuizConfig, Subject, OPTION_COUNT};

/// Load environment variables from .env file
fn setup() {
    let _ = dotenvy::dotenv();
}

/// Check if API key is available
fn has_api_key() -> bool {
    std::env::var("GEMINI_API_KEY").is_ok()
}

#[tokio::test]
#[ignore]
async fn test_generate_science_batch() {
    setup();
    if !has_api_key() {
        eprintln!("Skipping test: GEMINI_API_KEY not set");
        return;
    }

    let config = QuizConfig::new(Subject::Science, 500, 10);
    let source = GeminiSource::from_env().expect("client from env");

    let questions = source
        .generate(config.subject, config.level, config.question_count)
        .await
        .expect("generation succeeds");

    assert!(!questions.is_empty());
    assert!(questions.len() <= usize::from(config.question_count));
    for (i, q) in questions.iter().enumerate() {
        assert_eq!(q.id, i);
        assert!(!q.text.is_empty());
        assert_eq!(q.options.len(), OPTION_COUNT);
        assert!(q.correct_answer_index < OPTION_COUNT);
    }
}

#[tokio::test]
#[ignore]
async fn test_generate_master_tier_batch() {
    setup();
    if !has_api_key() {
        eprintln!("Skipping test: GEMINI_API_KEY not set");
        return;
    }

    let config = QuizConfig::new(Subject::Mathematics, 950, 10);
    let source = GeminiSource::from_env().expect("client from env");

    let questions = source
        .generate(config.subject, config.level, config.question_count)
        .await
        .expect("generation succeeds");

    assert!(!questions.is_empty());
}
