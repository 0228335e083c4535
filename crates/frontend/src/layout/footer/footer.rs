use crate::shared::http;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Cheapest request the API answers
const PING_PATH: &str = "/categories/list?page=1&pageSize=1";

#[derive(Clone, Copy, Debug, PartialEq)]
enum ApiStatus {
    Online,
    Offline,
    Checking,
}

impl ApiStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ApiStatus::Online => "API: đang hoạt động",
            ApiStatus::Offline => "API: mất kết nối",
            ApiStatus::Checking => "API: đang kiểm tra...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ApiStatus::Online => "status-online",
            ApiStatus::Offline => "status-offline",
            ApiStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ApiStatus::Checking);

    let check_api = move || {
        status.set(ApiStatus::Checking);
        spawn_local(async move {
            let online = http::ping(PING_PATH).await;
            status.set(if online { ApiStatus::Online } else { ApiStatus::Offline });
        });
    };

    Effect::new(move |_| {
        check_api();
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class="status-bar__brand">"© Du lịch Việt Nam"</span>
            <button
                class=move || format!("status-bar__api {}", status.get().css_class())
                title="Kiểm tra lại"
                on:click=move |_| check_api()
            >
                {move || status.get().display_text()}
            </button>
        </footer>
    }
}
