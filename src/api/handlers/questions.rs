//! Handlers for question listing, creation, search, and deletion.

use anyhow::anyhow;
use axum::{Json, extract::State};

use crate::api::dto::category::{CategoryItem, category_map};
use crate::api::dto::pagination::{PageParams, paginate};
use crate::api::dto::question::{
    CategoryQuestionsResponse, CreateQuestionRequest, DeleteQuestionResponse, QuestionBatchResponse,
    QuestionItem, QuestionListResponse,
};
use crate::api::extract::{AppJson, AppPath, AppQuery};
use crate::domain::entities::NewQuestion;
use crate::error::AppError;
use crate::state::AppState;

/// Lists one page of all questions.
///
/// # Endpoint
///
/// `GET /questions?page=N`
///
/// The page is a fixed window of 10 over the full id-ordered set;
/// `total_questions` reports the unpaginated count and `current_category`
/// is always `null` on this listing.
///
/// # Errors
///
/// Returns 404 when the requested page is empty, including a page number
/// past the available results.
pub async fn question_list_handler(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<Json<QuestionListResponse>, AppError> {
    let categories = state.categories.list().await.map_err(AppError::internal)?;
    let questions = state.questions.list().await.map_err(AppError::internal)?;
    let total_questions = state.questions.count().await.map_err(AppError::internal)?;

    let page = paginate(
        questions.into_iter().map(QuestionItem::from).collect(),
        params.page(),
    );

    if page.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page,
        total_questions,
        categories: category_map(categories),
        current_category: None,
    }))
}

/// Creates a question, or searches when the body carries a search term.
///
/// # Endpoint
///
/// `POST /questions`
///
/// A body with a non-empty `searchTerm` performs a case-insensitive
/// substring search over question text and returns every match,
/// unpaginated. Any other body is a creation attempt; the provided fields
/// are passed to the store as-is, and on success the response carries the
/// requested page of the full question set.
///
/// # Errors
///
/// Returns 422 when the store rejects the new question (missing fields,
/// unknown category) or a query fails.
pub async fn create_question_handler(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(body): AppJson<CreateQuestionRequest>,
) -> Result<Json<QuestionBatchResponse>, AppError> {
    if let Some(term) = body.search_term() {
        let matches = state
            .questions
            .search(term)
            .await
            .map_err(AppError::unprocessable)?;
        let total_questions = matches.len() as i64;

        return Ok(Json(QuestionBatchResponse {
            success: true,
            questions: matches.into_iter().map(QuestionItem::from).collect(),
            total_questions,
        }));
    }

    let new_question = NewQuestion {
        question: body.question,
        answer: body.answer,
        category: body.category,
        difficulty: body.difficulty,
    };

    let created = state
        .questions
        .create(new_question)
        .await
        .map_err(AppError::unprocessable)?;
    tracing::debug!(id = created.id, "question created");

    let questions = state
        .questions
        .list()
        .await
        .map_err(AppError::unprocessable)?;
    let total_questions = state
        .questions
        .count()
        .await
        .map_err(AppError::unprocessable)?;

    Ok(Json(QuestionBatchResponse {
        success: true,
        questions: paginate(
            questions.into_iter().map(QuestionItem::from).collect(),
            params.page(),
        ),
        total_questions,
    }))
}

/// Deletes a question by id.
///
/// # Endpoint
///
/// `DELETE /questions/{id}`
///
/// # Errors
///
/// Returns 404 when no question has the given id; 422 when the store
/// fails during the delete itself.
pub async fn delete_question_handler(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<DeleteQuestionResponse>, AppError> {
    let question = state
        .questions
        .find(id)
        .await
        .map_err(AppError::unprocessable)?;

    if question.is_none() {
        return Err(AppError::NotFound);
    }

    let deleted = state
        .questions
        .delete(id)
        .await
        .map_err(AppError::unprocessable)?;

    // The row can vanish between lookup and delete.
    if !deleted {
        return Err(AppError::NotFound);
    }

    tracing::debug!(id, "question deleted");

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: id,
    }))
}

/// Lists one page of a category's questions.
///
/// # Endpoint
///
/// `GET /categories/{id}/questions?page=N`
///
/// Route ids are offset by one from stored category ids; existing clients
/// depend on the shift, so `{id}` resolves to category `id + 1`.
///
/// Unlike the unfiltered listing, `categories` here is a bare list of type
/// names and `current_category` carries the resolved category.
///
/// # Errors
///
/// Returns 404 when the page is empty (no questions in the category, or a
/// page number past the available results).
pub async fn questions_by_category_handler(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let category_id = id + 1;

    let category = state
        .categories
        .find(category_id)
        .await
        .map_err(AppError::internal)?;
    let matching = state
        .questions
        .list_by_category(category_id)
        .await
        .map_err(AppError::internal)?;
    let total_questions = matching.len() as i64;

    let page = paginate(
        matching.into_iter().map(QuestionItem::from).collect(),
        params.page(),
    );

    if page.is_empty() {
        return Err(AppError::NotFound);
    }

    // A non-empty page implies the category row exists (questions carry a
    // foreign key to it), so a miss here is a storage-level inconsistency.
    let category = category.ok_or_else(|| {
        AppError::internal(anyhow!(
            "category {category_id} missing for a non-empty question set"
        ))
    })?;

    let all_categories = state.categories.list().await.map_err(AppError::internal)?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page,
        total_questions,
        categories: all_categories.into_iter().map(|c| c.kind).collect(),
        current_category: CategoryItem::from(category),
    }))
}
