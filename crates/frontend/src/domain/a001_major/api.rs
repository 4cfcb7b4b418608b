//! Majors catalog API.

use contracts::domain::a001_major::request::{ask_path, intro_path, major_path, qa_path};
use contracts::domain::a001_major::{
    AskRequest, AskResponse, CatalogRequest, IntroResponse, ListingFilter, MajorId,
    MajorSummary, MajorsPage, QaEntry,
};
use contracts::shared::error::NetworkError;
use std::ops::RangeInclusive;

use crate::shared::http::{get_json, post_json};

/// One page of the listing selected by `filter` (search when it has a keyword).
pub async fn fetch_page(
    page: u32,
    page_size: u32,
    filter: &ListingFilter,
) -> Result<MajorsPage, NetworkError> {
    let request = CatalogRequest::for_filter(filter, page, page_size);
    get_json(&request.path()).await
}

/// Several consecutive pages, fetched in order and concatenated.
///
/// Stops at the first failure so a partial range is never applied.
pub async fn fetch_pages(
    pages: RangeInclusive<u32>,
    page_size: u32,
    filter: &ListingFilter,
) -> Result<MajorsPage, NetworkError> {
    let mut fetched = Vec::new();
    for page in pages {
        let result = fetch_page(page, page_size, filter).await?;
        let last = !result.pagination.has_more();
        fetched.push(result);
        if last {
            break;
        }
    }
    MajorsPage::concat(fetched).ok_or_else(|| NetworkError::Decode("empty page range".to_string()))
}

/// Majors of one subject (first page only), used for the related list.
pub async fn fetch_by_subject(
    subject_id: &str,
    page_size: u32,
) -> Result<MajorsPage, NetworkError> {
    let request = CatalogRequest::BySubject {
        subject_id: subject_id.to_string(),
        page: 1,
        page_size,
    };
    get_json(&request.path()).await
}

/// `Ok(None)` when the backend has no such major.
pub async fn fetch_major(id: &MajorId) -> Result<Option<MajorSummary>, NetworkError> {
    match get_json::<MajorSummary>(&major_path(id)).await {
        Ok(major) => Ok(Some(major)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn fetch_qa(id: &MajorId) -> Result<Vec<QaEntry>, NetworkError> {
    get_json(&qa_path(id)).await
}

/// Markdown introduction, `None` when none was written yet.
pub async fn fetch_intro(id: &MajorId) -> Result<Option<String>, NetworkError> {
    let response: IntroResponse = get_json(&intro_path(id)).await?;
    Ok(response.data.map(|d| d.intro_content))
}

pub async fn ask(id: &MajorId, request: &AskRequest) -> Result<String, NetworkError> {
    let response: AskResponse = post_json(&ask_path(id), request).await?;
    Ok(response.answer)
}
