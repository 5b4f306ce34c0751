//! Shared application state injected into all handlers.
//!
//! Handlers depend on the repository traits only, so tests can swap in
//! mock or in-memory implementations without a database.

use std::sync::Arc;

use crate::domain::repositories::{CategoryRepository, QuestionRepository};

#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<dyn QuestionRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl AppState {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }
}
