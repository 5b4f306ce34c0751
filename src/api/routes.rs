//! API route configuration.

use crate::api::handlers::{
    category_list_handler, create_question_handler, delete_question_handler, question_list_handler,
    questions_by_category_handler, quiz_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /categories`                 - List categories
/// - `GET    /questions`                  - Paginated question list
/// - `POST   /questions`                  - Create a question, or search by body shape
/// - `DELETE /questions/{id}`             - Delete a question
/// - `GET    /categories/{id}/questions`  - Questions filtered by category
/// - `POST   /quizzes`                    - Pick the next quiz question
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category_list_handler))
        .route(
            "/questions",
            get(question_list_handler).post(create_question_handler),
        )
        .route("/questions/{id}", delete(delete_question_handler))
        .route(
            "/categories/{id}/questions",
            get(questions_by_category_handler),
        )
        .route("/quizzes", post(quiz_handler))
}
