//! PageFrame: root wrapper for every routed page.
//!
//! Sets `id="{entity}--{category}"` and `data-page-category` on the root element.
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="a001_major--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_major--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_LANDING => "page page--landing",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
