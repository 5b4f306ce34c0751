//! Repository trait for category data access.

use crate::domain::entities::Category;
use async_trait::async_trait;

/// Repository interface for the category table.
///
/// Categories are read-only through the API; rows come from migrations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Lists all categories in ascending id order.
    async fn list(&self) -> Result<Vec<Category>, sqlx::Error>;

    /// Finds a category by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Category))` if found
    /// - `Ok(None)` if not found
    async fn find(&self, id: i64) -> Result<Option<Category>, sqlx::Error>;
}
