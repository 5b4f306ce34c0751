#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use axum_test::TestServer;
use trivia_api::AppState;
use trivia_api::domain::entities::{Category, NewQuestion, Question};
use trivia_api::domain::repositories::{CategoryRepository, QuestionRepository};

/// In-memory question store implementing the repository trait, so handler
/// tests run without a database. Mirrors the constraints the real schema
/// enforces: ids are assigned monotonically and incomplete rows are
/// rejected the way NOT NULL columns reject them.
pub struct InMemoryQuestions {
    rows: Mutex<Vec<Question>>,
    next_id: AtomicI64,
}

impl InMemoryQuestions {
    pub fn new(rows: Vec<Question>) -> Self {
        let next_id = rows.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicI64::new(next_id),
        }
    }

    fn sorted(&self) -> Vec<Question> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|q| q.id);
        rows
    }
}

fn not_null<T>(value: Option<T>, column: &str) -> Result<T, sqlx::Error> {
    value.ok_or_else(|| {
        sqlx::Error::Protocol(format!(
            "null value in column \"{column}\" violates not-null constraint"
        ))
    })
}

#[async_trait]
impl QuestionRepository for InMemoryQuestions {
    async fn list(&self) -> Result<Vec<Question>, sqlx::Error> {
        Ok(self.sorted())
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn find(&self, id: i64) -> Result<Option<Question>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().iter().find(|q| q.id == id).cloned())
    }

    async fn create(&self, new_question: NewQuestion) -> Result<Question, sqlx::Error> {
        let question = Question {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            question: not_null(new_question.question, "question")?,
            answer: not_null(new_question.answer, "answer")?,
            category: not_null(new_question.category, "category")?,
            difficulty: not_null(new_question.difficulty, "difficulty")?,
        };

        self.rows.lock().unwrap().push(question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|q| q.id != id);
        Ok(rows.len() < before)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let needle = term.to_lowercase();
        Ok(self
            .sorted()
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect())
    }

    async fn list_by_category(&self, category: i64) -> Result<Vec<Question>, sqlx::Error> {
        Ok(self
            .sorted()
            .into_iter()
            .filter(|q| q.category == category)
            .collect())
    }

    async fn list_excluding(
        &self,
        previous: &[i64],
        category: Option<i64>,
    ) -> Result<Vec<Question>, sqlx::Error> {
        Ok(self
            .sorted()
            .into_iter()
            .filter(|q| !previous.contains(&q.id))
            .filter(|q| category.is_none_or(|c| q.category == c))
            .collect())
    }
}

/// In-memory category store; rows are fixed at construction, matching the
/// read-only role categories have in the API.
pub struct InMemoryCategories {
    rows: Vec<Category>,
}

impl InMemoryCategories {
    pub fn new(mut rows: Vec<Category>) -> Self {
        rows.sort_by_key(|c| c.id);
        Self { rows }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn list(&self) -> Result<Vec<Category>, sqlx::Error> {
        Ok(self.rows.clone())
    }

    async fn find(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        Ok(self.rows.iter().find(|c| c.id == id).cloned())
    }
}

pub fn category(id: i64, kind: &str) -> Category {
    Category {
        id,
        kind: kind.to_string(),
    }
}

pub fn question(id: i64, text: &str, category: i64) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: format!("answer {id}"),
        category,
        difficulty: 1,
    }
}

pub fn state_with(questions: Vec<Question>, categories: Vec<Category>) -> AppState {
    AppState::new(
        Arc::new(InMemoryQuestions::new(questions)),
        Arc::new(InMemoryCategories::new(categories)),
    )
}

/// Build a test server over the API routes backed by the in-memory store.
pub fn make_server(questions: Vec<Question>, categories: Vec<Category>) -> TestServer {
    let app = trivia_api::api::routes::routes().with_state(state_with(questions, categories));
    TestServer::new(app).unwrap()
}
