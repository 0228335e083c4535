use super::catalog::ServerFilters;
use super::detail::{detail_view, use_detail};
use crate::domain::a001_category::api as category_api;
use crate::shared::components::cards::{card_delay, ContentCard, Gallery};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::crud::PagedListVm;
use crate::shared::date_utils::format_span;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use chrono::Utc;
use contracts::domain::a001_category::aggregate::{Category, CategoryKind};
use contracts::domain::a003_event::aggregate::Event;
use contracts::domain::common::Illustrated;
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

#[component]
pub fn EventsPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = PagedListVm::<Event>::scoped(toasts, ListQuery::new().published(true), config().lists.public_page_size);
    vm.load();

    let categories = RwSignal::new(Vec::<Category>::new());
    spawn_local(async move {
        if let Ok(cats) = category_api::list_for(CategoryKind::Event).await {
            categories.set(cats);
        }
    });

    view! {
        <section class="catalog">
            <header class="catalog__header">
                <h1>"Sự kiện & lễ hội"</h1>
            </header>
            <ServerFilters
                search=Signal::derive(move || vm.state.with(|s| s.search.clone()))
                category_id=Signal::derive(move || vm.state.with(|s| s.scope.category_id))
                categories=categories
                on_search=Callback::new(move |text| vm.set_search(text))
                on_category=Callback::new(move |id| vm.set_category(id))
            />
            <Show
                when=move || vm.state.with(|s| s.is_loaded || !s.is_loading)
                fallback=|| view! { <div class="page-loading"><Spinner /></div> }
            >
                <Show
                    when=move || vm.state.with(|s| !s.items.is_empty())
                    fallback=|| view! { <p class="catalog__empty">"Chưa có sự kiện"</p> }
                >
                    <div class="card-grid">
                        {move || {
                            vm.state
                                .get()
                                .items
                                .into_iter()
                                .enumerate()
                                .map(|(i, event)| event_card(event, i))
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
            <PaginationControls
                current_page=Signal::derive(move || vm.state.with(|s| s.page))
                total_pages=Signal::derive(move || vm.state.with(|s| s.total_pages()))
                total_count=Signal::derive(move || vm.state.with(|s| s.total))
                on_page_change=Callback::new(move |page| vm.set_page(page))
            />
        </section>
    }
}

pub fn event_card(event: Event, index: usize) -> impl IntoView {
    let past = !event.is_upcoming(Utc::now());
    view! {
        <ContentCard
            href=format!("/events/{}", event.id)
            title=event.title.clone()
            summary=event.summary.clone()
            image=event.cover_url().map(str::to_string)
            delay_ms=card_delay(index)
        >
            {icon("calendar")}
            <span>{format_span(event.start_time.as_ref(), event.end_time.as_ref())}</span>
            {past.then(|| view! { <span class="tag tag--muted">"Đã diễn ra"</span> })}
        </ContentCard>
    }
}

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let state = use_detail::<Event>();
    detail_view(state, "/events", "Sự kiện", |event| {
        view! {
            <h1>{event.title.clone()}</h1>
            <p class="detail-page__meta">
                {icon("calendar")}
                <span>{format_span(event.start_time.as_ref(), event.end_time.as_ref())}</span>
            </p>
            <p class="detail-page__meta">
                {icon("map-pin")}
                <span>{event.location.clone()}</span>
                {event.place_id.map(|id| view! {
                    <a href=format!("/places/{}", id)>" Xem địa điểm"</a>
                })}
            </p>
            <Gallery images=event.images.clone() />
            <p class="detail-page__summary">{event.summary.clone()}</p>
            <div class="detail-page__content">{event.content.clone()}</div>
        }
        .into_any()
    })
}
