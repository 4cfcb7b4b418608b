use leptos::prelude::*;

use crate::domain::a002_category::store::use_categories;

/// Label of the button that clears the category filter.
pub const ALL_MAJORS_LABEL: &str = "全部专业";

/// Row of category toggles. `""` stands for "all majors".
#[component]
pub fn CategoryButtons(
    #[prop(into)]
    selected: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    let store = use_categories();
    store.ensure_loaded();

    let button_class = move |id: &str| {
        if selected.get() == id {
            "category-button category-button--active"
        } else {
            "category-button"
        }
    };

    view! {
        <div class="category-buttons">
            <button
                class=move || button_class("")
                on:click=move |_| on_select.run(String::new())
            >
                {ALL_MAJORS_LABEL}
            </button>
            <For
                each=move || store.categories.get()
                key=|c| c.category_id.clone()
                children=move |category| {
                    let id = category.category_id.clone();
                    let click_id = id.clone();
                    view! {
                        <button
                            class=move || button_class(&id)
                            on:click=move |_| on_select.run(click_id.clone())
                        >
                            {category.category_name}
                        </button>
                    }
                }
            />
            <Show when=move || store.error.get().is_some()>
                <button class="category-button category-button--retry" on:click=move |_| store.ensure_loaded()>
                    "重试加载门类"
                </button>
            </Show>
        </div>
    }
}
