use leptos::prelude::*;

use crate::shared::icons::icon;

/// Title row of a catalogue page.
///
/// `subtitle` is reactive so pages can reflect the active filter in it.
/// Children land on the right (counters, search boxes).
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Name understood by [`icon`], shown before the title.
    #[prop(optional)]
    icon_name: Option<&'static str>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">
                    {icon_name.map(icon)}
                    <span>{title}</span>
                </h1>
                {move || subtitle.get().map(|s| view! {
                    <p class="page-header__subtitle">{s}</p>
                })}
            </div>
            <div class="page-header__actions">{children.map(|c| c())}</div>
        </div>
    }
}
