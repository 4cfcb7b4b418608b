use serde::{Deserialize, Serialize};

/// Pagination block returned next to every list payload.
///
/// Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

impl PageMetadata {
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `{ data: [...], pagination: {...} }` envelope used by the list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub pagination: PageMetadata,
}

impl<T> Paged<T> {
    /// Concatenate contiguous pages in the order given.
    ///
    /// The pagination block of the result is the one of the last page, so
    /// `pagination.page` names the furthest page that was loaded. Returns
    /// `None` for an empty input.
    pub fn concat(pages: Vec<Paged<T>>) -> Option<Paged<T>> {
        let mut iter = pages.into_iter();
        let mut merged = iter.next()?;
        for next in iter {
            merged.data.extend(next.data);
            merged.pagination = next.pagination;
        }
        Some(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u32, items: Vec<&str>) -> Paged<String> {
        Paged {
            data: items.into_iter().map(String::from).collect(),
            pagination: PageMetadata {
                page: n,
                page_size: 2,
                total_count: 6,
                total_pages: 3,
            },
        }
    }

    #[test]
    fn test_has_more() {
        let mut meta = page(1, vec![]).pagination;
        assert!(meta.has_more());
        meta.page = 3;
        assert!(!meta.has_more());
    }

    #[test]
    fn test_concat_keeps_order_and_last_pagination() {
        let merged = Paged::concat(vec![page(2, vec!["c", "d"]), page(3, vec!["e", "f"])])
            .expect("two pages");
        assert_eq!(merged.data, vec!["c", "d", "e", "f"]);
        assert_eq!(merged.pagination.page, 3);
        assert!(!merged.pagination.has_more());
    }

    #[test]
    fn test_concat_empty() {
        assert!(Paged::<String>::concat(Vec::new()).is_none());
    }

    #[test]
    fn test_deserialize_envelope() {
        let raw = r#"{
            "data": ["x"],
            "pagination": {"page": 1, "page_size": 18, "total_count": 468, "total_pages": 26}
        }"#;
        let parsed: Paged<String> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.pagination.total_pages, 26);
        assert_eq!(parsed.data.len(), 1);
    }
}
