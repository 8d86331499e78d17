//! End-to-end flow tests driven by the scripted mock source.
//!
//! These exercise the full Setup -> Loading -> Quiz -> Results/Error graph
//! the way the presentation layer drives it, without touching the network.

use quiz_core::testing::{sample_questions, MockSource};
use quiz_core::{
    percentage, Advance, Phase, QuestionSource, QuizConfig, QuizFlow, Subject,
};

/// Drive the adapter call the way the Loading phase does: exactly one call,
/// whose settled result picks the next phase.
async fn load(flow: &mut QuizFlow, source: &MockSource, config: QuizConfig) {
    flow.start().unwrap();
    match source
        .generate(config.subject, config.level, config.question_count)
        .await
    {
        Ok(questions) => flow.questions_ready(questions).unwrap(),
        Err(e) => flow.generation_failed(e.to_string()).unwrap(),
    }
}

/// Answer the current question; pick the correct option iff `correctly`.
fn answer(flow: &mut QuizFlow, correctly: bool) {
    let session = flow.session_mut().expect("in quiz phase");
    let correct = session.current_question().correct_answer_index;
    let choice = if correctly { correct } else { (correct + 1) % 4 };
    session.select_option(choice);
}

#[tokio::test]
async fn full_quiz_seven_of_ten() {
    let source = MockSource::with_questions(sample_questions(10));
    let config = QuizConfig::new(Subject::Mathematics, 500, 10);
    let mut flow = QuizFlow::new();

    load(&mut flow, &source, config).await;
    assert!(matches!(flow.phase(), Phase::Quiz(_)));

    for i in 0..10 {
        answer(&mut flow, i < 7);
        let advance = flow.session_mut().unwrap().advance().unwrap();
        match advance {
            Advance::Next => assert!(i < 9),
            Advance::Finished { score, total } => {
                assert_eq!(i, 9);
                assert_eq!(score, 7);
                assert_eq!(total, 10);
                flow.finish(score, total).unwrap();
            }
        }
    }

    match flow.phase() {
        Phase::Results { score, total } => {
            assert_eq!((*score, *total), (7, 10));
            assert_eq!(percentage(*score, *total), 70);
        }
        other => panic!("expected Results, got {}", other.name()),
    }
}

#[tokio::test]
async fn short_batch_scores_against_returned_count() {
    // Requested 10, the source returns only 8 valid records.
    let source = MockSource::with_questions(sample_questions(8));
    let config = QuizConfig::new(Subject::Science, 950, 10);
    let mut flow = QuizFlow::new();

    load(&mut flow, &source, config).await;
    let session = flow.session().expect("in quiz phase");
    assert_eq!(session.total(), 8);

    for _ in 0..8 {
        answer(&mut flow, true);
        if let Advance::Finished { score, total } = flow.session_mut().unwrap().advance().unwrap()
        {
            assert_eq!((score, total), (8, 8));
            flow.finish(score, total).unwrap();
        }
    }

    match flow.phase() {
        Phase::Results { score, total } => assert_eq!(percentage(*score, *total), 100),
        other => panic!("expected Results, got {}", other.name()),
    }
}

#[tokio::test]
async fn generation_failure_reaches_error_with_message() {
    let source = MockSource::with_failure("transport exploded");
    let config = QuizConfig::new(Subject::Geography, 100, 10);
    let mut flow = QuizFlow::new();

    load(&mut flow, &source, config).await;
    match flow.phase() {
        Phase::Error { message } => assert!(!message.is_empty()),
        other => panic!("expected Error, got {}", other.name()),
    }

    flow.restart().unwrap();
    assert!(matches!(flow.phase(), Phase::Setup));
    assert!(flow.session().is_none());
}

#[tokio::test]
async fn restart_after_results_is_clean() {
    let source = MockSource::with_questions(sample_questions(10));
    let config = QuizConfig::new(Subject::History, 300, 10);
    let mut flow = QuizFlow::new();

    load(&mut flow, &source, config).await;
    for _ in 0..10 {
        answer(&mut flow, true);
        if let Advance::Finished { score, total } = flow.session_mut().unwrap().advance().unwrap()
        {
            flow.finish(score, total).unwrap();
        }
    }
    assert!(matches!(flow.phase(), Phase::Results { .. }));

    flow.restart().unwrap();
    assert!(matches!(flow.phase(), Phase::Setup));
    assert!(flow.session().is_none());

    // A new quiz starts from zero, unaffected by the previous session.
    source.queue(quiz_core::testing::MockOutcome::Questions(sample_questions(10)));
    load(&mut flow, &source, config).await;
    let session = flow.session().unwrap();
    assert_eq!(session.score(), 0);
    assert_eq!(session.current_index(), 0);
    assert!(!session.is_answered());
}

#[tokio::test]
async fn repeated_clicks_only_count_first_answer() {
    let source = MockSource::with_questions(sample_questions(10));
    let config = QuizConfig::new(Subject::CurrentAffairs, 700, 10);
    let mut flow = QuizFlow::new();

    load(&mut flow, &source, config).await;
    let session = flow.session_mut().unwrap();
    let correct = session.current_question().correct_answer_index;

    session.select_option((correct + 1) % 4);
    session.select_option(correct);
    session.select_option(correct);

    assert_eq!(session.score(), 0);
    assert_eq!(session.selected_option_index(), Some((correct + 1) % 4));
}
