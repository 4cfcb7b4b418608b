use super::model::qa_error_text;
use super::view_model::MajorDetailVm;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Card, Spinner};

/// Prepared questions about the major, one answer open at a time.
#[component]
pub fn QaCard(vm: MajorDetailVm) -> impl IntoView {
    view! {
        <Card class="detail-card">
            <h2 class="detail-card__title">{icon("info")} "Q&A"</h2>

            <Show when=move || vm.qa_loading.get()>
                <Spinner />
            </Show>

            <div class="qa-accordion">
                <For
                    each=move || vm.qa.get()
                    key=|entry| entry.id
                    children=move |entry| {
                        let qa_id = entry.id;
                        let question = entry.question;
                        let answer = entry.answer;
                        let updated = format!("更新于 {}", format_datetime(&entry.updated_at));
                        let is_open = move || vm.open_qa.get() == Some(qa_id);
                        view! {
                            <div class=move || if is_open() { "qa-item qa-item--open" } else { "qa-item" }>
                                <button
                                    class="qa-item__question"
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| vm.toggle_qa(qa_id)
                                >
                                    {question}
                                </button>
                                <Show when=is_open>
                                    <div class="qa-item__answer">
                                        <p>{answer.clone()}</p>
                                        <span class="qa-item__date">{updated.clone()}</span>
                                    </div>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>

            {move || vm.qa_error.get().map(|e| view! {
                <div class="error-text">{qa_error_text(&e)}</div>
            })}
        </Card>
    }
}
