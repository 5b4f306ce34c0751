//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Question`] - A trivia question with its answer, category, and difficulty
//! - [`Category`] - A named grouping questions belong to
//!
//! # Design Pattern
//!
//! Creation input is a separate struct ([`NewQuestion`]) so that
//! storage-assigned fields (the id) never appear half-initialized.

pub mod category;
pub mod question;

pub use category::Category;
pub use question::{NewQuestion, Question};
