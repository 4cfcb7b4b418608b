use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_major::ui::compare::MajorCompare;
use crate::domain::a001_major::ui::details::MajorDetail;
use crate::domain::a001_major::ui::list::MajorWall;
use crate::domain::a003_resource::ui::list::ResourceList;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::register::RegisterPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/majors") view=MajorWall />
                    <Route path=path!("/detail/:id") view=MajorDetail />
                    <Route path=path!("/compare") view=MajorCompare />
                    <Route path=path!("/resources") view=ResourceList />
                    <Route path=path!("/user/login") view=LoginPage />
                    <Route path=path!("/user/register") view=RegisterPage />
                </Routes>
            </Shell>
        </Router>
    }
}
