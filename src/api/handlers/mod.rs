//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod categories;
pub mod questions;
pub mod quizzes;

pub use categories::category_list_handler;
pub use questions::{
    create_question_handler, delete_question_handler, question_list_handler,
    questions_by_category_handler,
};
pub use quizzes::quiz_handler;
