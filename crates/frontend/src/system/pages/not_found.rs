use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="sys_not_found--system" category=PAGE_CAT_SYSTEM class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <A href="/majors" attr:class="button-link">"Explore Majors"</A>
        </PageFrame>
    }
}
