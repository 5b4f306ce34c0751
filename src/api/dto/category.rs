//! Category response shapes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::Category;

/// JSON representation of a single category.
#[derive(Debug, Serialize)]
pub struct CategoryItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Category> for CategoryItem {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            kind: category.kind,
        }
    }
}

/// Response body for `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
}

/// Builds the `{id: type}` mapping used by category and question listings.
///
/// A `BTreeMap` keeps the entries in ascending id order; JSON object keys
/// are serialized as strings.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
