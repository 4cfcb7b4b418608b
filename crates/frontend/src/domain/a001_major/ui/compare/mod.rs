//! Side-by-side comparison of two majors (`/compare?left=..&right=..`)

use contracts::domain::a001_major::comparison::ComparisonSummary;
use contracts::domain::a001_major::{MajorId, MajorSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use serde::{Deserialize, Serialize};
use thaw::{Button, ButtonAppearance, ButtonType, Card, Input, Spinner};

use crate::domain::a001_major::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::markdown::render_markdown;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl CompareQuery {
    pub fn new(left: &str, right: &str) -> Self {
        let clean = |v: &str| {
            let v = v.trim();
            (!v.is_empty()).then(|| v.to_string())
        };
        Self {
            left: clean(left),
            right: clean(right),
        }
    }

    pub fn href(&self) -> String {
        let query = serde_qs::to_string(self).unwrap_or_default();
        if query.is_empty() {
            "/compare".to_string()
        } else {
            format!("/compare?{}", query)
        }
    }
}

/// One column: a major and its introduction.
#[derive(Clone, Copy)]
struct ColumnVm {
    id: RwSignal<Option<MajorId>>,
    major: RwSignal<Option<MajorSummary>>,
    intro: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl ColumnVm {
    fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            major: RwSignal::new(None),
            intro: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    fn is_current(&self, id: &MajorId) -> bool {
        self.id.with_untracked(|current| current.as_ref() == Some(id))
    }

    fn load(&self, id: Option<MajorId>) {
        let this = *self;
        if this.id.get_untracked() == id {
            return;
        }
        this.id.set(id.clone());
        this.major.set(None);
        this.intro.set(None);
        this.error.set(None);

        let Some(id) = id else {
            this.loading.set(false);
            return;
        };
        this.loading.set(true);

        spawn_local(async move {
            let result = api::fetch_major(&id).await;
            if !this.is_current(&id) {
                return;
            }
            match result {
                Ok(Some(major)) => this.major.set(Some(major)),
                Ok(None) => this.error.set(Some(format!("Major {} not found", id))),
                Err(e) => {
                    log::error!("Failed to fetch major {}: {}", id, e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.loading.set(false);

            if this.major.with_untracked(|m| m.is_some()) {
                match api::fetch_intro(&id).await {
                    Ok(intro) if this.is_current(&id) => this.intro.set(intro),
                    Ok(_) => {}
                    Err(e) => log::warn!("No intro for {}: {}", id, e),
                }
            }
        });
    }
}

#[component]
fn CompareColumn(vm: ColumnVm, #[prop(into)] accent: String) -> impl IntoView {
    view! {
        <div class=format!("compare-column compare-column--{}", accent)>
            {move || {
                if vm.loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                if let Some(error) = vm.error.get() {
                    return view! { <div class="error-text">{error}</div> }.into_any();
                }
                match vm.major.get() {
                    Some(major) => {
                        let href = format!("/detail/{}", major.major_id);
                        view! {
                            <div class="compare-column__hero">
                                <h2>{major.major_name}</h2>
                                <p>{format!("{} · {}", major.category_name, major.subject_name)}</p>
                                <A href=href>"查看详情"</A>
                            </div>
                            <Card class="detail-card">
                                {move || match vm.intro.get() {
                                    Some(intro) => view! {
                                        <div class="markdown-content" inner_html=render_markdown(&intro)></div>
                                    }.into_any(),
                                    None => view! { <p class="muted">"暂无专业介绍"</p> }.into_any(),
                                }}
                            </Card>
                        }.into_any()
                    }
                    None => view! { <p class="muted">"输入专业代码进行对比"</p> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
pub fn MajorCompare() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    let left = ColumnVm::new();
    let right = ColumnVm::new();

    let left_input = RwSignal::new(query.with_untracked(|q| q.get("left")).unwrap_or_default());
    let right_input = RwSignal::new(query.with_untracked(|q| q.get("right")).unwrap_or_default());

    Effect::new(move |_| {
        let (l, r) = query.with(|q| (q.get("left"), q.get("right")));
        let parsed = CompareQuery::new(&l.unwrap_or_default(), &r.unwrap_or_default());
        left.load(parsed.left.map(MajorId::new));
        right.load(parsed.right.map(MajorId::new));
    });

    let summary = Memo::new(move |_| {
        let l = left.major.get()?;
        let r = right.major.get()?;
        Some(ComparisonSummary::between(&l, &r))
    });

    let on_compare = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let href = CompareQuery::new(&left_input.get_untracked(), &right_input.get_untracked()).href();
        navigate(&href, Default::default());
    };

    view! {
        <PageFrame page_id="a001_major--compare" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <PageHeader title="Major Comparison" icon_name="columns" />
            </div>

            <div class="page__content">
                <form class="compare-inputs" on:submit=on_compare>
                    <Input value=left_input placeholder="专业代码, 如 080901" />
                    <Input value=right_input placeholder="专业代码, 如 020101" />
                    <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                        "Compare Different Majors"
                    </Button>
                </form>

                {move || summary.get().map(|s| view! {
                    <div class="compare-summary">{s.headline()}</div>
                })}

                <div class="compare-grid">
                    <CompareColumn vm=left accent="left" />
                    <CompareColumn vm=right accent="right" />
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_with_both_sides() {
        assert_eq!(
            CompareQuery::new("080901", " 020101 ").href(),
            "/compare?left=080901&right=020101"
        );
    }

    #[test]
    fn test_href_skips_blank_side() {
        assert_eq!(CompareQuery::new("080901", "  ").href(), "/compare?left=080901");
        assert_eq!(CompareQuery::new("", "").href(), "/compare");
    }
}
