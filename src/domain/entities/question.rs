//! Question entity: a single trivia question with its answer and rating.

/// A trivia question as stored in the database.
///
/// `category` references a [`super::Category`] id. Questions are created and
/// deleted through the API but never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// Input data for creating a new question.
///
/// Every field is optional at this layer; the API accepts partial payloads
/// and lets the store's NOT NULL constraints reject incomplete rows.
#[derive(Debug, Clone, Default)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i32>,
}
