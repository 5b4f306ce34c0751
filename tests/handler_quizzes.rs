mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

fn quiz_fixture() -> (Vec<trivia_api::domain::entities::Question>, Vec<trivia_api::domain::entities::Category>) {
    let questions = vec![
        common::question(1, "a science question", 1),
        common::question(2, "an art question", 2),
        common::question(3, "another science question", 1),
    ];
    let categories = vec![common::category(1, "Science"), common::category(2, "Art")];
    (questions, categories)
}

#[tokio::test]
async fn test_quiz_never_repeats_previous_questions() {
    let (questions, categories) = quiz_fixture();
    let server = common::make_server(questions, categories);

    let response = server
        .post("/quizzes")
        .json(&json!({
            "previous_questions": [1, 3],
            "quiz_category": { "id": 0 }
        }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["id"], 2);
}

#[tokio::test]
async fn test_quiz_respects_the_category_filter() {
    let (questions, categories) = quiz_fixture();
    let server = common::make_server(questions, categories);

    let response = server
        .post("/quizzes")
        .json(&json!({
            "previous_questions": [1],
            "quiz_category": { "id": 1, "type": "Science" }
        }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    // Only question 3 is both unseen and in category 1.
    assert_eq!(body["question"]["id"], 3);
    assert_eq!(body["question"]["category"], 1);
}

#[tokio::test]
async fn test_exhausted_quiz_returns_null_question() {
    let (questions, categories) = quiz_fixture();
    let server = common::make_server(questions, categories);

    let response = server
        .post("/quizzes")
        .json(&json!({
            "previous_questions": [1, 2, 3],
            "quiz_category": { "id": 0 }
        }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body, json!({ "success": true, "question": null }));
}

#[tokio::test]
async fn test_missing_quiz_category_is_not_processable() {
    let (questions, categories) = quiz_fixture();
    let server = common::make_server(questions, categories);

    let response = server
        .post("/quizzes")
        .json(&json!({ "previous_questions": [] }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body = response.json::<Value>();
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": 422,
            "message": "Not Processable"
        })
    );
}

#[tokio::test]
async fn test_missing_previous_questions_is_not_processable() {
    let (questions, categories) = quiz_fixture();
    let server = common::make_server(questions, categories);

    let response = server
        .post("/quizzes")
        .json(&json!({ "quiz_category": { "id": 0 } }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_mistyped_previous_questions_is_bad_request() {
    let (questions, categories) = quiz_fixture();
    let server = common::make_server(questions, categories);

    let response = server
        .post("/quizzes")
        .json(&json!({
            "previous_questions": "not-a-list",
            "quiz_category": { "id": 0 }
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["message"], "Bad Request");
}
