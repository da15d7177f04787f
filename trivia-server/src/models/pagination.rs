//! Pagination types
//!
//! Pages are fixed-size windows over an ordered, already-filtered
//! collection of questions.

use std::ops::Range;

use serde::{Deserialize, Deserializer};

use super::ValidationError;

/// Questions per page
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Validated page position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination for a page number, rejecting anything below 1.
    pub fn new(page: i64) -> Result<Self, ValidationError> {
        if page <= 0 {
            return Err(ValidationError::InvalidPage { page });
        }

        let page = u32::try_from(page).map_err(|_| ValidationError::EmptyPage { page })?;

        Ok(Self {
            page,
            per_page: QUESTIONS_PER_PAGE,
        })
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page as u64
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    /// Index range of this page within a collection of `len` items.
    ///
    /// Clamped to `len`, so pages past the end yield an empty range.
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let end = start.saturating_add(self.per_page as usize).min(len);
        start..end
    }

    /// Slice an ordered collection down to this page.
    pub fn paginate<T>(&self, mut items: Vec<T>) -> Paginated<T> {
        let total = items.len() as i64;
        let window = self.window(items.len());
        items.truncate(window.end);
        let items = items.split_off(window.start);

        Paginated {
            items,
            total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: QUESTIONS_PER_PAGE,
        }
    }
}

/// Paginated result
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Query parameters for pagination. Range checks happen in [`Pagination::new`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    /// `?page=` with no value counts as absent
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<i64>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        let p = Pagination::new(1).unwrap();
        assert_eq!(p.offset(), 0);

        let p = Pagination::new(2).unwrap();
        assert_eq!(p.offset(), 10);

        let p = Pagination::new(6).unwrap();
        assert_eq!(p.offset(), 50);
    }

    #[test]
    fn rejects_non_positive_pages() {
        for page in [0, -1, -100, i64::MIN] {
            let err = Pagination::new(page).unwrap_err();
            assert_eq!(err, ValidationError::InvalidPage { page });
        }
    }

    #[test]
    fn window_clamps_to_len() {
        let p = Pagination::new(1).unwrap();
        assert_eq!(p.window(25), 0..10);

        let p = Pagination::new(3).unwrap();
        assert_eq!(p.window(25), 20..25);

        let p = Pagination::new(4).unwrap();
        assert!(p.window(25).is_empty());
    }

    #[test]
    fn blank_page_param_is_absent() {
        let params: PaginationParams = serde_json::from_str(r#"{"page": ""}"#).unwrap();
        assert_eq!(params.page, None);

        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, None);

        let params: PaginationParams = serde_json::from_str(r#"{"page": "3"}"#).unwrap();
        assert_eq!(params.page, Some(3));

        assert!(serde_json::from_str::<PaginationParams>(r#"{"page": "abc"}"#).is_err());
    }

    #[test]
    fn paginate_keeps_total() {
        let items: Vec<u32> = (1..=25).collect();

        let page = Pagination::new(2).unwrap().paginate(items.clone());
        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.total, 25);

        let page = Pagination::new(9).unwrap().paginate(items);
        assert!(page.is_empty());
        assert_eq!(page.total, 25);
    }
}
