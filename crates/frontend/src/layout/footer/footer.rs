use contracts::domain::a001_major::request::categories_path;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::api_url;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "API: online",
            ServerStatus::Offline => "API: offline",
            ServerStatus::Checking => "API: checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    Effect::new(move |_| {
        spawn_local(async move {
            let online = ping_backend().await;
            status.set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    view! {
        <footer data-zone="footer" class="footer">
            <span>"© 2024 DegreeCompass. All rights reserved."</span>
            <span class=move || format!("footer__status {}", status.get().css_class())>
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}

/// The categories endpoint is cheap and always present.
async fn ping_backend() -> bool {
    match Request::get(&api_url(categories_path())).send().await {
        Ok(response) => response.ok(),
        Err(e) => {
            log::warn!("backend unreachable: {}", e);
            false
        }
    }
}
