//! Category entity: a named grouping for questions.

/// A question category. Read-only from the API's perspective; rows are
/// seeded by migrations.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    /// Display name. The column is called `type`, which is a keyword in Rust.
    #[sqlx(rename = "type")]
    pub kind: String,
}
