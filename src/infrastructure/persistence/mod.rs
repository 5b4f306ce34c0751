//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx
//! runtime-checked queries mapped through `FromRow`.
//!
//! # Repositories
//!
//! - [`PgQuestionRepository`] - Question storage, search, and quiz queries
//! - [`PgCategoryRepository`] - Category lookups

pub mod pg_category_repository;
pub mod pg_question_repository;

pub use pg_category_repository::PgCategoryRepository;
pub use pg_question_repository::PgQuestionRepository;
