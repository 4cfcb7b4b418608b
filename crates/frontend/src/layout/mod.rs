pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              Navigation                  |
/// +------------------------------------------+
/// |              page content                |
/// +------------------------------------------+
/// |              Footer                      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Navigation />
            <main class="app-main">{children()}</main>
            <footer::Footer />
        </div>
    }
}
