use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use services::{
    QuestionQuery, QuestionSource, SimulatedFailure, SourceError, StaticQuestionSource,
};
use trivia_core::{Category, CategoryId, RawQuestion};

use super::quiz::QuizIntent;
use super::test_harness::setup_quiz_harness;

const GENERAL: CategoryId = CategoryId::new(9);

#[tokio::test(flavor = "current_thread")]
async fn start_screen_smoke_lists_categories() {
    let source = StaticQuestionSource::sample().unwrap();
    let mut harness = setup_quiz_harness(Arc::new(source), Duration::ZERO);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("QuizMaster"), "missing title in {html}");
    assert!(html.contains("Choose Your Category"), "missing subtitle in {html}");
    assert!(html.contains("Select a quiz category..."), "missing placeholder in {html}");
    assert!(html.contains("General Knowledge"), "missing category in {html}");
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_screen_smoke_renders_category_error() {
    let source = StaticQuestionSource::sample().unwrap();
    source.set_failure(Some(SimulatedFailure::Unreachable)).unwrap();
    let mut harness = setup_quiz_harness(Arc::new(source), Duration::ZERO);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to load quiz categories. Please try again."),
        "missing error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_plays_through_to_the_end_screen() {
    let source = StaticQuestionSource::sample().unwrap();
    let mut harness = setup_quiz_harness(Arc::new(source), Duration::ZERO);
    harness.rebuild();
    harness.drive_async().await;

    harness.dispatch(QuizIntent::ChooseCategory(Some(GENERAL)));
    harness.dispatch(QuizIntent::Start);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 4"), "missing progress in {html}");
    assert!(html.contains("Back to Home"), "missing back button in {html}");
    assert!(html.contains("How many days are there in a leap year?"), "missing question in {html}");

    // Answer the first question wrong and the rest right.
    let wrong = harness.wrong_answer().unwrap();
    harness.dispatch(QuizIntent::Select(wrong));
    while let Some(correct) = harness.correct_answer() {
        harness.dispatch(QuizIntent::Select(correct));
    }

    let html = harness.render();
    assert!(html.contains("Quiz Complete! 🎉"), "missing end title in {html}");
    assert!(html.contains("You scored 3 out of 4!"), "missing score in {html}");

    harness.dispatch(QuizIntent::PlayAgain);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Choose Your Category"), "missing start screen in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_smoke_highlights_and_locks_during_reveal() {
    let source = StaticQuestionSource::sample().unwrap();
    let mut harness = setup_quiz_harness(Arc::new(source), Duration::from_secs(60));
    harness.rebuild();
    harness.drive_async().await;
    harness.dispatch(QuizIntent::ChooseCategory(Some(GENERAL)));
    harness.dispatch(QuizIntent::Start);
    harness.drive_async().await;

    let wrong = harness.wrong_answer().unwrap();
    harness.dispatch(QuizIntent::Select(wrong));

    let html = harness.render();
    assert!(html.contains("quiz-answer--correct"), "missing correct highlight in {html}");
    assert!(html.contains("quiz-answer--incorrect"), "missing wrong highlight in {html}");
    assert!(html.contains("quiz-answer--dimmed"), "missing dimmed answers in {html}");
    assert!(html.contains("disabled"), "answers not locked in {html}");
    // Still on the first question until the reveal delay runs out.
    assert!(html.contains("Question 1 of 4"), "advanced early in {html}");

    harness.dispatch(QuizIntent::GoBack);
    let html = harness.render();
    assert!(html.contains("Choose Your Category"), "missing start screen in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_smoke_advances_once_the_reveal_delay_passes() {
    let source = StaticQuestionSource::sample().unwrap();
    let mut harness = setup_quiz_harness(Arc::new(source), Duration::from_millis(20));
    harness.rebuild();
    harness.drive_async().await;
    harness.dispatch(QuizIntent::ChooseCategory(Some(GENERAL)));
    harness.dispatch(QuizIntent::Start);
    harness.drive_async().await;

    let correct = harness.correct_answer().unwrap();
    harness.dispatch(QuizIntent::Select(correct));
    let html = harness.render();
    assert!(html.contains("Question 1 of 4"), "advanced early in {html}");
    assert!(html.contains("quiz-answer--correct"), "missing highlight in {html}");
    assert_eq!(harness.score(), 0);

    tokio::time::sleep(Duration::from_millis(40)).await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 2 of 4"), "did not advance in {html}");
    assert!(!html.contains("quiz-answer--correct"), "reveal still showing in {html}");
    assert_eq!(harness.score(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn start_screen_smoke_reports_empty_category() {
    let source = StaticQuestionSource::new();
    source
        .insert_category(Category::new(CategoryId::new(40), "Empty"), Vec::new())
        .unwrap();
    let mut harness = setup_quiz_harness(Arc::new(source), Duration::ZERO);
    harness.rebuild();
    harness.drive_async().await;

    harness.dispatch(QuizIntent::ChooseCategory(Some(CategoryId::new(40))));
    harness.dispatch(QuizIntent::Start);
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Could not retrieve questions. Try a different category."),
        "missing error in {html}"
    );
    assert!(html.contains("Choose Your Category"), "left start screen in {html}");
}

/// Lists categories but never serves questions.
struct QuestionsDown;

#[async_trait]
impl QuestionSource for QuestionsDown {
    async fn list_categories(&self) -> Result<Vec<Category>, SourceError> {
        Ok(vec![Category::new(GENERAL, "General Knowledge")])
    }

    async fn fetch_questions(&self, _query: QuestionQuery) -> Result<Vec<RawQuestion>, SourceError> {
        Err(SourceError::Unavailable("connection refused".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn start_screen_smoke_reports_unreachable_questions() {
    let mut harness = setup_quiz_harness(Arc::new(QuestionsDown), Duration::ZERO);
    harness.rebuild();
    harness.drive_async().await;

    harness.dispatch(QuizIntent::ChooseCategory(Some(GENERAL)));
    harness.dispatch(QuizIntent::Start);
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to load questions. Please check your network connection."),
        "missing error in {html}"
    );
}
