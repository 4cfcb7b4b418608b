use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// "Load More" button under a growing list.
///
/// Hidden once there is nothing more to load; disabled while a page is in
/// flight so a double click cannot issue a second request.
#[component]
pub fn LoadMoreButton(
    #[prop(into)]
    has_more: Signal<bool>,
    #[prop(into)]
    loading: Signal<bool>,
    on_load_more: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || has_more.get()>
            <div class="load-more">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=loading
                    on_click=move |_| on_load_more.run(())
                >
                    {move || if loading.get() { "Loading..." } else { "Load More" }}
                </Button>
            </div>
        </Show>
    }
}
