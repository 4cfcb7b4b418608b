use contracts::domain::a001_major::{MajorId, MajorSummary};

/// Shown in place of an answer when the ask request fails.
pub const ASK_FAILED_MESSAGE: &str =
    "Sorry, I encountered an error while processing your question. Please try again.";

/// Wall filtered to the major's category.
pub fn back_href(id: &MajorId) -> String {
    let prefix = id.category_prefix();
    if prefix.is_empty() {
        "/majors".to_string()
    } else {
        format!("/majors?categoryId={}", prefix)
    }
}

pub fn compare_href(id: &MajorId) -> String {
    format!("/compare?left={}", id)
}

/// Majors of the same subject, without the one being viewed.
pub fn related_without_self(related: Vec<MajorSummary>, id: &MajorId) -> Vec<MajorSummary> {
    related.into_iter().filter(|m| &m.major_id != id).collect()
}

/// Enter sends the question, Shift+Enter keeps typing on a new line.
pub fn submits_question(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

pub fn qa_error_text(error: &str) -> String {
    format!("获取专业详情失败: {}", error)
}
