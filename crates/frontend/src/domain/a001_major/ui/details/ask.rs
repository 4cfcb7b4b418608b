use super::model::submits_question;
use super::view_model::MajorDetailVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonType, Card};

/// Free-form question about the major, answered by the backend.
#[component]
pub fn AskCard(vm: MajorDetailVm) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.ask();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if submits_question(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            vm.ask();
        }
    };

    view! {
        <Card class="detail-card">
            <h2 class="detail-card__title">{icon("send")} "我来问问"</h2>
            <form class="ask-form" on:submit=on_submit>
                <textarea
                    class="ask-form__question"
                    placeholder="我想问问..."
                    prop:value=move || vm.question.get()
                    on:input=move |ev| vm.question.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <Button
                    appearance=ButtonAppearance::Primary
                    button_type=ButtonType::Submit
                    disabled=Signal::derive(move || !vm.can_ask())
                >
                    {move || if vm.asking.get() { "处理中..." } else { "问问AI" }}
                </Button>
            </form>

            {move || vm.answer.get().map(|answer| view! {
                <div class="ask-answer">
                    <h3 class="ask-answer__title">"AI Response:"</h3>
                    <p class="ask-answer__text">{answer}</p>
                </div>
            })}
        </Card>
    }
}
