use contracts::domain::a001_major::featured::featured_majors;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Card, Input};

use crate::shared::list_utils::{filter_list, highlight_matches};

/// Landing-page shortlist with an instant name filter.
#[component]
pub fn FeaturedMajors() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let visible = Memo::new(move |_| search.with(|s| filter_list(featured_majors(), s)));

    view! {
        <section class="featured-majors">
            <div class="featured-majors__search">
                <Input value=search placeholder="Search majors..." />
            </div>

            <Card class="featured-majors__card">
                <div class="featured-majors__grid">
                    <For
                        each=move || visible.get()
                        key=|m| m.id
                        children=move |m| {
                            let href = m.wall_href();
                            view! {
                                <A href=href attr:class="featured-majors__link">
                                    {move || highlight_matches(m.name, &search.get())}
                                </A>
                            }
                        }
                    />
                </div>
                <Show when=move || visible.with(|v| v.is_empty())>
                    <p class="muted">"No majors found matching your search criteria. Try something else!"</p>
                </Show>
            </Card>

            <div class="featured-majors__all">
                <A href="/majors" attr:class="button-link button-link--large">"View All Majors"</A>
            </div>
        </section>
    }
}
