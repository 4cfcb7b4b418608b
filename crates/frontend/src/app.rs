use crate::domain::a002_category::store::CategoryStore;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Signed-in visitor, read by the navigation bar.
    provide_context(SessionContext::new());

    // Categories are fetched once and shared by every page that shows them.
    provide_context(CategoryStore::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
