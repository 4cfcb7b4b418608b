use serde::{Deserialize, Serialize};

/// Top-level discipline category (门类), e.g. `{ "08", "工学" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub category_id: String,
    pub category_name: String,
}

/// `GET /api/categories` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub data: Vec<Category>,
}

/// Find the category whose id matches `id`.
pub fn find_by_id<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.category_id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_find() {
        let parsed: CategoriesResponse = serde_json::from_str(
            r#"{"data":[{"category_id":"07","category_name":"理学"},{"category_id":"08","category_name":"工学"}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(
            find_by_id(&parsed.data, "08").map(|c| c.category_name.as_str()),
            Some("工学")
        );
        assert!(find_by_id(&parsed.data, "99").is_none());
    }
}
