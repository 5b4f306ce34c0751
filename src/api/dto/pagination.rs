//! Page-number query parameter and the fixed-size page window.

use serde::{Deserialize, Deserializer};

/// Maximum number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Pagination query parameters.
///
/// `page` is 1-based. A value that does not parse as an integer is treated
/// the same as an absent one, falling back to the first page; existing
/// clients send garbage here and expect a page back.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub page: Option<u32>,
}

impl PageParams {
    /// The requested page number, defaulting to 1.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1) as usize
    }
}

/// Deserializes an optional integer from its query-string form, mapping
/// unparseable input to `None` instead of an error.
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// Cuts the window `[(page - 1) * 10, (page - 1) * 10 + 10)` out of an
/// ordered result list.
///
/// Page 0 and pages past the end yield an empty window; callers translate
/// that into 404.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Vec<T> {
    if page == 0 {
        return Vec::new();
    }

    items
        .into_iter()
        .skip((page - 1) * QUESTIONS_PER_PAGE)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_is_default() {
        let params: PageParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page(), 1);
    }

    #[test]
    fn test_unparseable_page_falls_back_to_default() {
        let params: PageParams = serde_json::from_str(r#"{"page": "abc"}"#).unwrap();
        assert_eq!(params.page(), 1);
    }

    #[test]
    fn test_numeric_page_is_parsed() {
        let params: PageParams = serde_json::from_str(r#"{"page": "3"}"#).unwrap();
        assert_eq!(params.page(), 3);
    }

    #[test]
    fn test_page_window_is_contiguous() {
        let items: Vec<i64> = (1..=25).collect();

        assert_eq!(paginate(items.clone(), 1), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginate(items.clone(), 2), (11..=20).collect::<Vec<_>>());
        assert_eq!(paginate(items, 3), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let items: Vec<i64> = (1..=5).collect();
        assert!(paginate(items, 2).is_empty());
    }

    #[test]
    fn test_page_zero_is_empty() {
        let items: Vec<i64> = (1..=5).collect();
        assert!(paginate(items, 0).is_empty());
    }

    #[test]
    fn test_short_list_fits_one_page() {
        let items: Vec<i64> = (1..=5).collect();
        assert_eq!(paginate(items, 1).len(), 5);
    }
}
