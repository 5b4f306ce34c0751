//! Handler for quiz question selection.

use anyhow::anyhow;
use axum::{Json, extract::State};
use rand::seq::IndexedRandom;

use crate::api::dto::question::QuestionItem;
use crate::api::dto::quiz::{QuizRequest, QuizResponse};
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Picks the next quiz question uniformly at random.
///
/// # Endpoint
///
/// `POST /quizzes`
///
/// The body carries the ids already played (`previous_questions`) and a
/// category descriptor (`quiz_category`, id 0 meaning any category). The
/// chosen question is never one of the previous ids and, for a non-zero
/// category id, never outside that category. Once no eligible question
/// remains, the response is `question: null`.
///
/// # Errors
///
/// Returns 422 when either body field (or the descriptor's id) is missing,
/// or when the selection query fails.
pub async fn quiz_handler(
    State(state): State<AppState>,
    AppJson(body): AppJson<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let previous = body
        .previous_questions
        .ok_or_else(|| AppError::unprocessable(anyhow!("previous_questions is required")))?;
    let category_id = body
        .quiz_category
        .and_then(|c| c.id)
        .ok_or_else(|| AppError::unprocessable(anyhow!("quiz_category.id is required")))?;

    let category_filter = (category_id != 0).then_some(category_id);

    let eligible = state
        .questions
        .list_excluding(&previous, category_filter)
        .await
        .map_err(AppError::unprocessable)?;

    let question = eligible
        .choose(&mut rand::rng())
        .cloned()
        .map(QuestionItem::from);

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
