//! ViewModel of the major details page
//!
//! One RwSignal per piece of UI state. Every section (major, related, Q&A,
//! intro, ask) loads independently and keeps its own error, so one failing
//! call never blanks the rest of the page.

use super::model::{self, ASK_FAILED_MESSAGE};
use crate::domain::a001_major::api;
use crate::shared::api_utils::client_config;
use contracts::domain::a001_major::{AskRequest, MajorId, MajorSummary, QaEntry};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct MajorDetailVm {
    pub id: RwSignal<Option<MajorId>>,
    pub major: RwSignal<Option<MajorSummary>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,

    pub related: RwSignal<Vec<MajorSummary>>,
    pub related_error: RwSignal<Option<String>>,

    pub qa: RwSignal<Vec<QaEntry>>,
    pub qa_loading: RwSignal<bool>,
    pub qa_error: RwSignal<Option<String>>,
    pub open_qa: RwSignal<Option<i64>>,

    pub intro: RwSignal<Option<String>>,
    pub intro_loading: RwSignal<bool>,
    pub intro_error: RwSignal<Option<String>>,

    pub question: RwSignal<String>,
    pub answer: RwSignal<Option<String>>,
    pub asking: RwSignal<bool>,
}

impl MajorDetailVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            major: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            related: RwSignal::new(Vec::new()),
            related_error: RwSignal::new(None),
            qa: RwSignal::new(Vec::new()),
            qa_loading: RwSignal::new(false),
            qa_error: RwSignal::new(None),
            open_qa: RwSignal::new(None),
            intro: RwSignal::new(None),
            intro_loading: RwSignal::new(false),
            intro_error: RwSignal::new(None),
            question: RwSignal::new(String::new()),
            answer: RwSignal::new(None),
            asking: RwSignal::new(false),
        }
    }

    /// Responses for a major the user already navigated away from are dropped.
    fn is_current(&self, id: &MajorId) -> bool {
        self.id.with_untracked(|current| current.as_ref() == Some(id))
    }

    /// Load the major, then everything that hangs off it.
    pub fn load(&self, id: MajorId) {
        let this = *self;
        this.id.set(Some(id.clone()));
        this.major.set(None);
        this.related.set(Vec::new());
        this.related_error.set(None);
        this.qa.set(Vec::new());
        this.qa_loading.set(false);
        this.qa_error.set(None);
        this.open_qa.set(None);
        this.intro.set(None);
        this.intro_loading.set(false);
        this.intro_error.set(None);
        this.answer.set(None);
        this.asking.set(false);
        this.error.set(None);
        this.loading.set(true);

        spawn_local(async move {
            let result = api::fetch_major(&id).await;
            if !this.is_current(&id) {
                return;
            }
            match result {
                Ok(Some(major)) => {
                    this.major.set(Some(major.clone()));
                    this.loading.set(false);
                    this.load_related(major);
                    this.load_qa(id.clone());
                    this.load_intro(id);
                }
                Ok(None) => {
                    log::warn!("major {} not found", id);
                    this.loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to fetch major {}: {}", id, e);
                    this.error.set(Some(e.to_string()));
                    this.loading.set(false);
                }
            }
        });
    }

    fn load_related(&self, major: MajorSummary) {
        let this = *self;
        let page_size = client_config().listing.related_page_size;
        spawn_local(async move {
            let result = api::fetch_by_subject(&major.subject_id, page_size).await;
            if !this.is_current(&major.major_id) {
                return;
            }
            match result {
                Ok(page) => this
                    .related
                    .set(model::related_without_self(page.data, &major.major_id)),
                Err(e) => {
                    log::error!("Failed to fetch related majors: {}", e);
                    this.related_error.set(Some(e.to_string()));
                }
            }
        });
    }

    fn load_qa(&self, id: MajorId) {
        let this = *self;
        this.qa_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_qa(&id).await;
            if !this.is_current(&id) {
                return;
            }
            match result {
                Ok(entries) => this.qa.set(entries),
                Err(e) => {
                    log::error!("Failed to fetch Q&A of {}: {}", id, e);
                    this.qa_error.set(Some(e.to_string()));
                }
            }
            this.qa_loading.set(false);
        });
    }

    fn load_intro(&self, id: MajorId) {
        let this = *self;
        this.intro_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_intro(&id).await;
            if !this.is_current(&id) {
                return;
            }
            match result {
                Ok(intro) => this.intro.set(intro),
                Err(e) => {
                    log::error!("Failed to fetch intro of {}: {}", id, e);
                    this.intro_error.set(Some(e.to_string()));
                }
            }
            this.intro_loading.set(false);
        });
    }

    /// Toggle one accordion entry; opening one closes the others.
    pub fn toggle_qa(&self, qa_id: i64) {
        self.open_qa.update(|open| {
            *open = if *open == Some(qa_id) { None } else { Some(qa_id) };
        });
    }

    pub fn can_ask(&self) -> bool {
        !self.asking.get() && !self.question.get().trim().is_empty()
    }

    /// Send the current question. Blank questions and double submits are ignored.
    pub fn ask(&self) {
        if self.asking.get_untracked() {
            return;
        }
        let Some(major) = self.major.get_untracked() else {
            return;
        };
        let question = self.question.get_untracked();
        let intro = self.intro.get_untracked();
        let Some(request) = AskRequest::new(&question, &major, intro.as_deref()) else {
            return;
        };

        let this = *self;
        this.asking.set(true);
        this.answer.set(None);

        spawn_local(async move {
            let result = api::ask(&major.major_id, &request).await;
            if !this.is_current(&major.major_id) {
                return;
            }
            match result {
                Ok(answer) => {
                    this.answer.set(Some(answer));
                    this.question.set(String::new());
                }
                Err(e) => {
                    log::error!("Ask request failed: {}", e);
                    this.answer.set(Some(ASK_FAILED_MESSAGE.to_string()));
                }
            }
            this.asking.set(false);
        });
    }
}

impl Default for MajorDetailVm {
    fn default() -> Self {
        Self::new()
    }
}
