//! Question request and response shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::dto::category::CategoryItem;
use crate::domain::entities::Question;

/// JSON representation of a single question.
#[derive(Debug, Serialize)]
pub struct QuestionItem {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl From<Question> for QuestionItem {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        }
    }
}

/// Request body for `POST /questions`.
///
/// The endpoint is dual-purpose: a body carrying a non-empty `searchTerm`
/// is a search, anything else is a creation attempt. All fields are
/// optional; creation passes absent ones through to the store untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i32>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl CreateQuestionRequest {
    /// The search term, if the body selects the search arm.
    ///
    /// An empty string counts as absent, matching what clients of the
    /// original service rely on.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }
}

/// Response body for `GET /questions`.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionItem>,
    pub total_questions: i64,
    pub categories: BTreeMap<i64, String>,
    /// Always `null` on the unfiltered listing; kept so the two question
    /// listings share a recognizable shape.
    pub current_category: Option<CategoryItem>,
}

/// Response body for both arms of `POST /questions`.
#[derive(Debug, Serialize)]
pub struct QuestionBatchResponse {
    pub success: bool,
    pub questions: Vec<QuestionItem>,
    pub total_questions: i64,
}

/// Response body for `GET /categories/{id}/questions`.
///
/// Unlike [`QuestionListResponse`], `categories` is a bare list of type
/// names here and `current_category` is always present.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionItem>,
    pub total_questions: i64,
    pub categories: Vec<String>,
    pub current_category: CategoryItem,
}

/// Response body for `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i64,
}
