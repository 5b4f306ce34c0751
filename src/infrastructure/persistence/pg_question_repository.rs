//! PostgreSQL implementation of the question repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewQuestion, Question};
use crate::domain::repositories::QuestionRepository;

/// PostgreSQL repository for question storage and retrieval.
pub struct PgQuestionRepository {
    pool: Arc<PgPool>,
}

impl PgQuestionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn list(&self) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty
             FROM questions
             ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool.as_ref())
            .await
    }

    async fn find(&self, id: i64) -> Result<Option<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty
             FROM questions
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
    }

    async fn create(&self, new_question: NewQuestion) -> Result<Question, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING id, question, answer, category, difficulty",
        )
        .bind(new_question.question)
        .bind(new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .fetch_one(self.pool.as_ref())
        .await
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty
             FROM questions
             WHERE question ILIKE $1
             ORDER BY id",
        )
        .bind(format!("%{term}%"))
        .fetch_all(self.pool.as_ref())
        .await
    }

    async fn list_by_category(&self, category: i64) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty
             FROM questions
             WHERE category = $1
             ORDER BY id",
        )
        .bind(category)
        .fetch_all(self.pool.as_ref())
        .await
    }

    async fn list_excluding(
        &self,
        previous: &[i64],
        category: Option<i64>,
    ) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty
             FROM questions
             WHERE id <> ALL($1) AND ($2::bigint IS NULL OR category = $2)
             ORDER BY id",
        )
        .bind(previous)
        .bind(category)
        .fetch_all(self.pool.as_ref())
        .await
    }
}
