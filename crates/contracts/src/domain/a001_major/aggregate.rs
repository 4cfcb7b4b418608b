use crate::domain::common::Paged;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Catalog code of a major, e.g. `"080901"`.
///
/// The first two digits are the code of the category the major belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MajorId(pub String);

impl MajorId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Category code encoded in the first two characters of the id.
    pub fn category_prefix(&self) -> &str {
        match self.0.char_indices().nth(2) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for MajorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MajorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ============================================================================
// Records
// ============================================================================

/// One row of the majors catalog. Immutable once fetched; identity is `major_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorSummary {
    pub major_id: MajorId,
    pub major_name: String,
    pub category_name: String,
    pub subject_id: String,
    pub subject_name: String,
}

/// `GET /api/majors` and `GET /api/majors/search` payload.
pub type MajorsPage = Paged<MajorSummary>;

/// Prepared question/answer pair shown in the detail page accordion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    pub id: i64,
    pub major_id: MajorId,
    pub question: String,
    pub answer: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Markdown introduction of a major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroContent {
    pub intro_content: String,
    pub created_at: String,
    pub updated_at: String,
}

/// `GET /api/majors/{id}/intro` envelope. `data` is null when no intro was written yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroResponse {
    #[serde(default)]
    pub data: Option<IntroContent>,
}

// ============================================================================
// Ask AI
// ============================================================================

/// Context sent along with a free-form question so the answer stays on topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskContext {
    pub major_name: String,
    pub major_id: MajorId,
    pub intro_content: String,
}

/// `POST /api/majors/{id}/ask` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub context: AskContext,
}

impl AskRequest {
    /// Build a request for `major`. Returns `None` for a blank question.
    pub fn new(question: &str, major: &MajorSummary, intro_content: Option<&str>) -> Option<Self> {
        if question.trim().is_empty() {
            return None;
        }
        Some(Self {
            question: question.to_string(),
            context: AskContext {
                major_name: major.major_name.clone(),
                major_id: major.major_id.clone(),
                intro_content: intro_content.unwrap_or_default().to_string(),
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn major() -> MajorSummary {
        MajorSummary {
            major_id: MajorId::new("080901"),
            major_name: "计算机科学与技术".to_string(),
            category_name: "工学".to_string(),
            subject_id: "0809".to_string(),
            subject_name: "计算机类".to_string(),
        }
    }

    #[test]
    fn test_category_prefix() {
        assert_eq!(MajorId::new("080901").category_prefix(), "08");
        assert_eq!(MajorId::new("1").category_prefix(), "1");
        assert_eq!(MajorId::new("").category_prefix(), "");
    }

    #[test]
    fn test_major_id_is_transparent_on_the_wire() {
        let parsed: MajorSummary = serde_json::from_str(
            r#"{"major_id":"080901","major_name":"计算机科学与技术","category_name":"工学","subject_id":"0809","subject_name":"计算机类"}"#,
        )
        .unwrap();
        assert_eq!(parsed, major());
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["major_id"], "080901");
    }

    #[test]
    fn test_intro_response_accepts_null_and_missing_data() {
        let null: IntroResponse = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(null.data.is_none());
        let missing: IntroResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.data.is_none());
    }

    #[test]
    fn test_ask_request_rejects_blank_question() {
        assert!(AskRequest::new("   ", &major(), None).is_none());
    }

    #[test]
    fn test_ask_request_carries_context() {
        let req = AskRequest::new("就业前景如何？", &major(), Some("## 简介")).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["question"], "就业前景如何？");
        assert_eq!(json["context"]["major_id"], "080901");
        assert_eq!(json["context"]["major_name"], "计算机科学与技术");
        assert_eq!(json["context"]["intro_content"], "## 简介");
    }
}
