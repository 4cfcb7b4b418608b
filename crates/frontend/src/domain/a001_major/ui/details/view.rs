//! Major details page component

use super::ask::AskCard;
use super::model::{back_href, compare_href};
use super::qa::QaCard;
use super::view_model::MajorDetailVm;
use crate::shared::icons::icon;
use crate::shared::markdown::render_markdown;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_major::{MajorId, MajorSummary};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::{Card, MessageBar, MessageBarIntent, Spinner};

#[component]
pub fn MajorDetail() -> impl IntoView {
    let vm = MajorDetailVm::new();
    let params = use_params_map();

    // Re-runs when the route param changes (related-major links stay on this page).
    Effect::new(move |_| {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        let id = MajorId::new(id.trim());
        let already = vm.id.with_untracked(|current| current.as_ref() == Some(&id));
        if !already {
            vm.load(id);
        }
    });

    view! {
        <PageFrame page_id="a001_major--detail" category=PAGE_CAT_DETAIL>
            {move || {
                if vm.loading.get() {
                    return view! { <div class="detail-status"><Spinner label="Loading..." /></div> }.into_any();
                }
                if let Some(error) = vm.error.get() {
                    return view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            {format!("Failed to load major: {}", error)}
                        </MessageBar>
                    }.into_any();
                }
                match vm.major.get() {
                    Some(major) => view! { <DetailBody vm=vm major=major /> }.into_any(),
                    None => view! { <div class="detail-status">"Major not found"</div> }.into_any(),
                }
            }}
        </PageFrame>
    }
}

#[component]
fn DetailBody(vm: MajorDetailVm, major: MajorSummary) -> impl IntoView {
    let back = back_href(&major.major_id);
    let compare = compare_href(&major.major_id);

    view! {
        <div class="page__header">
            <A href=back attr:class="back-link">{icon("arrow-left")} "Back to Majors"</A>
        </div>

        <div class="page__content detail-layout">
            <div class="detail-main">
                <h1 class="detail-title">{major.major_name.clone()}</h1>

                <IntroSection vm=vm />

                <div class="detail-actions">
                    <A href=compare attr:class="button-link">{icon("columns")} "Compare"</A>
                </div>

                <section class="related-majors">
                    <h2 class="section-title">{icon("book")} "相关专业学科"</h2>
                    {move || vm.related_error.get().map(|e| view! {
                        <div class="error-text">{e}</div>
                    })}
                    <div class="related-majors__grid">
                        <For
                            each=move || vm.related.get()
                            key=|m| m.major_id.clone()
                            children=|m| {
                                let href = format!("/detail/{}", m.major_id);
                                view! {
                                    <A href=href attr:class="related-major">{m.major_name}</A>
                                }
                            }
                        />
                    </div>
                </section>
            </div>

            <aside class="detail-side">
                <Card class="detail-card">
                    <h2 class="detail-card__title">"专业信息"</h2>
                    <p>"专业代码: " {major.major_id.to_string()}</p>
                    <p>"所属门类: " {major.category_name.clone()}</p>
                    <p>"所属学科: " {major.subject_name.clone()}</p>
                </Card>

                <QaCard vm=vm />
                <AskCard vm=vm />
            </aside>
        </div>
    }
}

#[component]
fn IntroSection(vm: MajorDetailVm) -> impl IntoView {
    let html = Memo::new(move |_| vm.intro.with(|intro| intro.as_deref().map(render_markdown)));

    view! {
        <div class="detail-intro">
            <Show when=move || vm.intro_loading.get()>
                <Spinner />
            </Show>
            {move || vm.intro_error.get().map(|e| view! {
                <div class="error-text">{format!("Failed to load introduction: {}", e)}</div>
            })}
            {move || html.get().map(|html| view! {
                <div class="markdown-content" inner_html=html></div>
            })}
        </div>
    }
}
