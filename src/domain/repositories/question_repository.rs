//! Repository trait for question data access.

use crate::domain::entities::{NewQuestion, Question};
use async_trait::async_trait;

/// Repository interface for the question table.
///
/// Methods return `sqlx::Error` unmapped; handlers decide per call site
/// whether a storage failure surfaces as 422 or 500, since the two differ
/// by endpoint.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgQuestionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Lists all questions in ascending id order.
    async fn list(&self) -> Result<Vec<Question>, sqlx::Error>;

    /// Counts all questions, unfiltered.
    async fn count(&self) -> Result<i64, sqlx::Error>;

    /// Finds a question by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Question))` if found
    /// - `Ok(None)` if not found
    async fn find(&self, id: i64) -> Result<Option<Question>, sqlx::Error>;

    /// Inserts a new question and returns the stored row.
    ///
    /// Absent fields are passed to the store as NULL; the schema's NOT NULL
    /// constraints reject incomplete rows.
    async fn create(&self, new_question: NewQuestion) -> Result<Question, sqlx::Error>;

    /// Deletes a question by id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no row matched.
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;

    /// Case-insensitive substring search over question text.
    async fn search(&self, term: &str) -> Result<Vec<Question>, sqlx::Error>;

    /// Lists questions in a category, in ascending id order.
    async fn list_by_category(&self, category: i64) -> Result<Vec<Question>, sqlx::Error>;

    /// Lists questions whose id is not in `previous`, optionally restricted
    /// to a category. Used by quiz selection.
    async fn list_excluding(
        &self,
        previous: &[i64],
        category: Option<i64>,
    ) -> Result<Vec<Question>, sqlx::Error>;
}
