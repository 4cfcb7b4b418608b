//! Request shapes of the majors catalog endpoints.
//!
//! Precedence rule: a keyword that is non-blank after trimming always goes to
//! the search endpoint and ignores the category; otherwise the listing
//! endpoint is used, filtered by category when one is selected.

use super::aggregate::MajorId;
use serde::{Deserialize, Serialize};

/// Active filter of a majors listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilter {
    pub category_id: Option<String>,
    pub keyword: Option<String>,
}

impl ListingFilter {
    pub fn by_category(category_id: impl Into<String>) -> Self {
        Self::default().with_category(category_id)
    }

    pub fn by_keyword(keyword: impl Into<String>) -> Self {
        Self {
            category_id: None,
            keyword: Some(keyword.into()),
        }
    }

    /// Select a category. An empty id means "all majors".
    ///
    /// Picking a category is an explicit request for that listing, so any
    /// keyword is dropped.
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        let id = category_id.into();
        self.category_id = if id.trim().is_empty() { None } else { Some(id) };
        self.keyword = None;
        self
    }

    /// Replace the keyword, keeping the selected category.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        self.keyword = if keyword.is_empty() { None } else { Some(keyword) };
        self
    }

    /// Trimmed keyword, `None` when blank.
    pub fn effective_keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn effective_category(&self) -> Option<&str> {
        self.category_id
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// True when both filters resolve to the same backend request.
    pub fn same_request_as(&self, other: &ListingFilter) -> bool {
        match (self.effective_keyword(), other.effective_keyword()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.effective_category() == other.effective_category(),
            _ => false,
        }
    }
}

/// One GET against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
    /// `GET /api/majors?page&page_size[&category]`
    Listing {
        page: u32,
        page_size: u32,
        category: Option<String>,
    },
    /// `GET /api/majors/search?keyword&page&page_size`
    Search {
        keyword: String,
        page: u32,
        page_size: u32,
    },
    /// `GET /api/majors?subject&page&page_size`, used for related majors.
    BySubject {
        subject_id: String,
        page: u32,
        page_size: u32,
    },
}

impl CatalogRequest {
    pub fn for_filter(filter: &ListingFilter, page: u32, page_size: u32) -> Self {
        match filter.effective_keyword() {
            Some(keyword) => CatalogRequest::Search {
                keyword: keyword.to_string(),
                page,
                page_size,
            },
            None => CatalogRequest::Listing {
                page,
                page_size,
                category: filter.effective_category().map(str::to_string),
            },
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            CatalogRequest::Listing { page, .. }
            | CatalogRequest::Search { page, .. }
            | CatalogRequest::BySubject { page, .. } => *page,
        }
    }

    /// Path plus query string, relative to the backend origin.
    pub fn path(&self) -> String {
        match self {
            CatalogRequest::Listing {
                page,
                page_size,
                category,
            } => {
                let mut url = format!("/api/majors?page={}&page_size={}", page, page_size);
                if let Some(category) = category {
                    url.push_str(&format!("&category={}", urlencoding::encode(category)));
                }
                url
            }
            CatalogRequest::Search {
                keyword,
                page,
                page_size,
            } => format!(
                "/api/majors/search?keyword={}&page={}&page_size={}",
                urlencoding::encode(keyword),
                page,
                page_size
            ),
            CatalogRequest::BySubject {
                subject_id,
                page,
                page_size,
            } => format!(
                "/api/majors?subject={}&page={}&page_size={}",
                urlencoding::encode(subject_id),
                page,
                page_size
            ),
        }
    }
}

pub fn categories_path() -> &'static str {
    "/api/categories"
}

pub fn major_path(id: &MajorId) -> String {
    format!("/api/majors/{}", urlencoding::encode(id.as_str()))
}

pub fn qa_path(id: &MajorId) -> String {
    format!("{}/qa", major_path(id))
}

pub fn intro_path(id: &MajorId) -> String {
    format!("{}/intro", major_path(id))
}

pub fn ask_path(id: &MajorId) -> String {
    format!("{}/ask", major_path(id))
}
