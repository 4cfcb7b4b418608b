pub mod state;

use contracts::domain::a001_major::{ListingFilter, MajorSummary};
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use serde::{Deserialize, Serialize};
use thaw::{MessageBar, MessageBarIntent};

use self::state::{create_state, ApplyOutcome, FetchTicket};
use crate::domain::a001_major::api;
use crate::domain::a002_category::store::use_categories;
use crate::domain::a002_category::ui::buttons::CategoryButtons;
use crate::shared::api_utils::client_config;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::load_more::LoadMoreButton;
use crate::shared::components::page_header::PageHeader;
use crate::shared::list_utils::SearchInput;
use crate::shared::near_end::use_near_end;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Query string of the wall: `?categoryId=08&q=计算`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallQuery {
    #[serde(rename = "categoryId", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl WallQuery {
    pub fn from_filter(filter: &ListingFilter) -> Self {
        Self {
            category_id: filter.effective_category().map(str::to_string),
            q: filter.effective_keyword().map(str::to_string),
        }
    }

    pub fn into_filter(self) -> ListingFilter {
        let filter = match self.category_id {
            Some(id) => ListingFilter::by_category(id),
            None => ListingFilter::default(),
        };
        match self.q {
            Some(q) => filter.with_keyword(q),
            None => filter,
        }
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

/// Keep the address bar in step with the filter so the view can be shared.
fn sync_url(filter: &ListingFilter) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let query = WallQuery::from_filter(filter).to_query_string();
    let path = window.location().pathname().unwrap_or_else(|_| "/majors".to_string());
    let new_url = if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query)
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}

#[component]
fn MajorCard(major: MajorSummary, delay_ms: u32) -> impl IntoView {
    let href = format!("/detail/{}", major.major_id);
    view! {
        <A href=href attr:class="major-card-link">
            <CardAnimated delay_ms=delay_ms class="major-card">
                <div class="major-card__code">{major.major_id.to_string()}</div>
                <h2 class="major-card__name">{major.major_name}</h2>
                <p class="major-card__category">{major.category_name}</p>
                <p class="major-card__subject">{major.subject_name}</p>
            </CardAnimated>
        </A>
    }
}

/// Major wall: category filter, debounced search, growing grid.
#[component]
pub fn MajorWall() -> impl IntoView {
    let config = client_config();
    let state = create_state(config.listing.page_size);

    let initial_filter = use_query_map().with_untracked(|q| {
        WallQuery {
            category_id: q.get("categoryId").filter(|v| !v.trim().is_empty()),
            q: q.get("q").filter(|v| !v.trim().is_empty()),
        }
        .into_filter()
    });
    let filter = RwSignal::new(initial_filter.clone());

    let run = move |ticket: FetchTicket| {
        spawn_local(async move {
            let result = api::fetch_pages(ticket.pages.clone(), ticket.page_size, &ticket.filter).await;
            match result {
                Ok(page) => {
                    let outcome = state.try_update(|s| s.apply_success(&ticket, page));
                    if let Some(ApplyOutcome::Applied { added }) = outcome {
                        log::debug!("majors page(s) {:?}: {} new", ticket.pages, added);
                    }
                }
                Err(e) => {
                    log::error!("Failed to fetch majors {:?}: {}", ticket.pages, e);
                    state.try_update(|s| s.apply_failure(&ticket, e.to_string()));
                }
            }
        });
    };

    let reset = move |next: ListingFilter| {
        sync_url(&next);
        filter.set(next.clone());
        if let Some(ticket) = state.try_update(|s| s.begin_reset(next)) {
            run(ticket);
        }
    };

    let load_more = Callback::new(move |_: ()| {
        if let Some(ticket) = state.try_update(|s| s.begin_load_more()).flatten() {
            run(ticket);
        }
    });

    let on_category = Callback::new(move |id: String| {
        reset(filter.get_untracked().with_category(id));
    });

    let on_keyword = Callback::new(move |text: String| {
        let next = filter.get_untracked().with_keyword(text);
        if state.with_untracked(|s| s.keyword_needs_reset(&next)) {
            reset(next);
        } else {
            filter.set(next);
        }
    });

    reset(initial_filter);

    let sentinel = NodeRef::<Div>::new();
    let near_end = use_near_end(sentinel, load_more);

    // After a page landed the sentinel may still be in view.
    Effect::new(move |seen: Option<u64>| {
        let (generation, rearm) =
            state.with(|s| (s.generation, s.should_rearm_near_end(seen.unwrap_or(0))));
        if rearm {
            near_end.rearm();
        }
        generation
    });

    let categories = use_categories();
    let subtitle = Signal::derive(move || {
        filter.with(|f| match (f.effective_keyword(), f.effective_category()) {
            (Some(keyword), _) => Some(format!("搜索: {}", keyword)),
            (None, Some(id)) => categories.name_of(id),
            (None, None) => None,
        })
    });
    let selected_category = Signal::derive(move || {
        filter.with(|f| f.category_id.clone().unwrap_or_default())
    });
    let keyword = Signal::derive(move || filter.with(|f| f.keyword.clone().unwrap_or_default()));
    let has_more = Signal::derive(move || state.with(|s| s.has_more && s.current_page > 0));
    let loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let page_size = config.listing.page_size as usize;

    view! {
        <PageFrame page_id="a001_major--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title="Explore Majors" subtitle=subtitle icon_name="compass">
                    <span class="wall-counter">
                        {move || state.with(|s| {
                            if s.total_count > 0 {
                                format!("{} / {}", s.items.len(), s.total_count)
                            } else {
                                String::new()
                            }
                        })}
                    </span>
                </PageHeader>
            </div>

            <div class="page__content">
                <CategoryButtons selected=selected_category on_select=on_category />

                <div class="wall-search">
                    <SearchInput
                        value=keyword
                        on_change=on_keyword
                        placeholder="试试输入 'Ji Suan'..."
                        debounce_ms=config.listing.search_debounce_ms
                    />
                </div>

                <Show when=move || state.with(|s| s.error().is_some())>
                    <MessageBar intent=MessageBarIntent::Error>
                        {move || state.with(|s| s.error().map(|e| format!("Failed to load majors: {}", e)).unwrap_or_default())}
                    </MessageBar>
                </Show>

                <Show when=move || state.with(|s| s.is_loading() && s.items.is_empty())>
                    <p class="wall-status">"Loading majors..."</p>
                </Show>

                <div class="majors-grid">
                    <For
                        each=move || { state.with(|s| s.items.iter().cloned().enumerate().collect::<Vec<_>>()) }
                        key=|(_, major)| major.major_id.clone()
                        children=move |(index, major)| {
                            view! { <MajorCard major=major delay_ms=stagger_delay(index % page_size) /> }
                        }
                    />
                </div>

                <Show when=move || state.with(|s| !s.is_loading() && s.error().is_none() && s.current_page > 0 && s.is_empty())>
                    <p class="wall-status wall-status--empty">
                        "No majors found matching your search criteria. Try something else!"
                    </p>
                </Show>

                <div node_ref=sentinel class="wall-sentinel" aria-hidden="true"></div>

                <LoadMoreButton has_more=has_more loading=loading on_load_more=load_more />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_from_filter() {
        let filter = ListingFilter::by_category("08").with_keyword("math ");
        let query = WallQuery::from_filter(&filter);
        assert_eq!(query.category_id.as_deref(), Some("08"));
        assert_eq!(query.q.as_deref(), Some("math"));
        assert_eq!(query.to_query_string(), "categoryId=08&q=math");
    }

    #[test]
    fn test_empty_filter_has_empty_query() {
        assert_eq!(WallQuery::from_filter(&ListingFilter::default()).to_query_string(), "");
    }

    #[test]
    fn test_query_into_filter() {
        let filter = WallQuery {
            category_id: Some("07".to_string()),
            q: None,
        }
        .into_filter();
        assert_eq!(filter, ListingFilter::by_category("07"));

        let filter = WallQuery {
            category_id: Some("07".to_string()),
            q: Some("物理".to_string()),
        }
        .into_filter();
        assert_eq!(filter.effective_keyword(), Some("物理"));
        assert_eq!(filter.effective_category(), Some("07"));
    }

    #[test]
    fn test_query_string_parses_back() {
        let parsed: WallQuery = serde_qs::from_str("categoryId=03").unwrap();
        assert_eq!(parsed.category_id.as_deref(), Some("03"));
        assert_eq!(parsed.q, None);
    }
}
