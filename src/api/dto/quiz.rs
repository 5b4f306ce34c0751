//! Quiz request and response shapes.

use serde::{Deserialize, Serialize};

use crate::api::dto::question::QuestionItem;

/// Request body for `POST /quizzes`.
///
/// Both fields are required by the handler, but modeled as optional so a
/// missing one becomes a 422 instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

/// Client-supplied category descriptor; id 0 means "no category filter".
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuizCategory {
    pub id: Option<i64>,
}

/// Response body for `POST /quizzes`.
///
/// `question` is `null` once every eligible question has been played.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionItem>,
}
