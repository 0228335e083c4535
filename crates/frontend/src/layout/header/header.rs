use leptos::prelude::*;
use leptos_router::components::A;

/// Public sections shown in the top navigation
const NAV_LINKS: [(&str, &str); 5] = [
    ("/places", "Địa điểm"),
    ("/events", "Sự kiện"),
    ("/tours", "Tour"),
    ("/accommodations", "Lưu trú"),
    ("/restaurants", "Ẩm thực"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__title">"Du lịch Việt Nam"</A>
                <nav class="header__nav">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <A href=href attr:class="header__link">{label}</A> })
                        .collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <A href="/admin" attr:class="button button--ghost">"Quản trị"</A>
            </div>
        </header>
    }
}
