use contracts::domain::a003_resource::default_resources;
use leptos::prelude::*;
use thaw::Input;

use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Directory of external sites, filtered by name or description as you type.
#[component]
pub fn ResourceList() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let visible = Memo::new(move |_| search.with(|s| filter_list(default_resources(), s)));

    view! {
        <PageFrame page_id="a003_resource--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title="University Resources" icon_name="book">
                    <div class="page__header-search">
                        <Input value=search placeholder="Search resources..." />
                    </div>
                </PageHeader>
            </div>

            <div class="page__content resources-grid">
                <For
                    each=move || { visible.get().into_iter().enumerate().collect::<Vec<_>>() }
                    key=|(_, r)| r.id
                    children=move |(index, resource)| {
                        let name = resource.name.clone();
                        let description = resource.description.clone();
                        view! {
                            <CardAnimated delay_ms=stagger_delay(index) class="resource-card">
                                <h2 class="resource-card__name">
                                    {move || highlight_matches(&name, &search.get())}
                                </h2>
                                <p class="resource-card__description">
                                    {move || highlight_matches(&description, &search.get())}
                                </p>
                                <a class="button-link" href=resource.url target="_blank" rel="noopener noreferrer">
                                    "Visit Website" {icon("external-link")}
                                </a>
                            </CardAnimated>
                        }
                    }
                />
                <Show when=move || visible.with(|v| v.is_empty())>
                    <p class="muted">"No resources match your search."</p>
                </Show>
            </div>
        </PageFrame>
    }
}
