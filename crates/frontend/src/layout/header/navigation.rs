use contracts::system::auth::SessionUser;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

/// Top-level sections shown in the navigation bar.
const NAV_LINKS: &[(&str, &str)] = &[
    ("/majors", "Majors"),
    ("/compare", "Compare"),
    ("/resources", "Resources"),
];

/// A section stays highlighted on its sub-pages (`/detail/..` belongs to Majors).
pub fn is_active(section: &str, pathname: &str) -> bool {
    if pathname == section || pathname.starts_with(&format!("{}/", section)) {
        return true;
    }
    section == "/majors" && pathname.starts_with("/detail/")
}

#[component]
pub fn Navigation() -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);
    let user_menu_open = RwSignal::new(false);

    // Close the menus after navigating.
    Effect::new(move |_| {
        pathname.track();
        menu_open.set(false);
        user_menu_open.set(false);
    });

    let links = move || {
        let current = pathname.get();
        NAV_LINKS
            .iter()
            .map(|&(href, label)| {
                let class = if is_active(href, &current) {
                    "nav__link nav__link--active"
                } else {
                    "nav__link"
                };
                view! { <A href=href attr:class=class>{label}</A> }
            })
            .collect_view()
    };

    let user_area = move || match session.user.get() {
        Some(user) => {
            let initials = user.initials();
            let SessionUser { display_name, email } = user;
            view! {
                <div class="nav__user">
                    <button
                        class="nav__avatar"
                        title=display_name
                        on:click=move |_| user_menu_open.update(|open| *open = !*open)
                    >
                        {initials}
                    </button>
                    <Show when=move || user_menu_open.get()>
                        <div class="nav__user-menu">
                            <div class="nav__user-email">{email.clone()}</div>
                            <button class="nav__user-item" on:click=move |_| session.sign_out()>
                                {icon("log-out")} "Log out"
                            </button>
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
        None => view! {
            <A href="/user/login" attr:class="button-link">"Get Started"</A>
        }
        .into_any(),
    };

    view! {
        <nav data-zone="header" class="nav">
            <div class="nav__content">
                <A href="/" attr:class="nav__brand">
                    {icon("compass")}
                    <span class="nav__title">"小高AI报考助手"</span>
                </A>

                <div class="nav__links">{links}</div>
                <div class="nav__actions">{user_area}</div>

                <button
                    class="nav__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav__mobile">
                    {links}
                    {user_area}
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(is_active("/majors", "/majors"));
        assert!(is_active("/majors", "/detail/080901"));
        assert!(is_active("/compare", "/compare"));
        assert!(!is_active("/compare", "/majors"));
        assert!(!is_active("/resources", "/resources-old"));
    }
}
