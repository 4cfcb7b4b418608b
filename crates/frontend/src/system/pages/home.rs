use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::a001_major::ui::featured::FeaturedMajors;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LANDING;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="sys_home--landing" category=PAGE_CAT_LANDING>
            <section class="hero">
                <div class="hero__icon">{icon("compass")}</div>
                <h1 class="hero__title">"Find Your Perfect Major"</h1>
                <p class="hero__subtitle">
                    "Explore hundreds of majors, compare them side by side and ask questions about what you will study."
                </p>
                <div class="hero__actions">
                    <A href="/majors" attr:class="button-link button-link--large">"Explore Majors"</A>
                    <A href="/compare" attr:class="button-link button-link--ghost">"Compare Majors"</A>
                </div>
            </section>

            <FeaturedMajors />
        </PageFrame>
    }
}
