use super::catalog::{CatalogFilters, CatalogState};
use super::detail::{detail_view, use_detail};
use crate::domain::a001_category::api as category_api;
use crate::domain::a002_place::api as place_api;
use crate::shared::components::cards::{card_delay, ContentCard, Gallery};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::crud::ReadService;
use crate::shared::date_utils::format_span;
use crate::shared::icons::icon;
use contracts::domain::a001_category::aggregate::{Category, CategoryKind};
use contracts::domain::a002_place::aggregate::Place;
use contracts::domain::a003_event::aggregate::Event;
use contracts::domain::common::{EntityId, Illustrated};
use contracts::shared::list_query::ListQuery;
use futures_util::future::join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

#[component]
pub fn PlacesPage() -> impl IntoView {
    let state = RwSignal::new(CatalogState::<Place>::new(config().lists.public_page_size));
    let categories = RwSignal::new(Vec::<Category>::new());

    spawn_local(async move {
        let (places, cats) = join(place_api::list_all(true), category_api::list_for(CategoryKind::Place)).await;
        match places {
            Ok(places) => state.update(|s| s.set_items(places)),
            Err(_) => state.update(|s| s.is_loaded = true),
        }
        if let Ok(cats) = cats {
            categories.set(cats);
        }
    });

    let current = Memo::new(move |_| state.with(|s| s.current(|p, f| f.matches(p))));

    view! {
        <section class="catalog">
            <header class="catalog__header">
                <h1>"Địa điểm du lịch"</h1>
                <p>"Khám phá những điểm đến nổi bật"</p>
            </header>
            <CatalogFilters
                filter=Signal::derive(move || state.with(|s| s.filter.clone()))
                categories=categories
                on_change=Callback::new(move |f| state.update(|s| s.set_filter(f)))
            />
            <Show when=move || state.with(|s| s.is_loaded) fallback=|| view! { <div class="page-loading"><Spinner /></div> }>
                <Show
                    when=move || current.with(|p| !p.rows.is_empty())
                    fallback=|| view! { <p class="catalog__empty">"Không có địa điểm phù hợp"</p> }
                >
                    <div class="card-grid">
                        {move || {
                            current
                                .get()
                                .rows
                                .into_iter()
                                .enumerate()
                                .map(|(i, place)| place_card(place, i))
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
            <PaginationControls
                current_page=Signal::derive(move || current.with(|p| p.page))
                total_pages=Signal::derive(move || current.with(|p| p.total_pages))
                total_count=Signal::derive(move || current.with(|p| p.total))
                on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
            />
        </section>
    }
}

pub fn place_card(place: Place, index: usize) -> impl IntoView {
    view! {
        <ContentCard
            href=format!("/places/{}", place.id)
            title=place.name.clone()
            summary=place.summary.clone()
            image=place.cover_url().map(str::to_string)
            delay_ms=card_delay(index)
        >
            {icon("map-pin")}
            <span>{place.address.clone()}</span>
        </ContentCard>
    }
}

#[component]
pub fn PlaceDetailPage() -> impl IntoView {
    let state = use_detail::<Place>();
    detail_view(state, "/places", "Địa điểm du lịch", |place| {
        let maps_link = match (place.latitude, place.longitude) {
            (Some(lat), Some(lng)) => Some(format!("https://www.google.com/maps?q={},{}", lat, lng)),
            _ => None,
        };
        view! {
            <h1>{place.name.clone()}</h1>
            <p class="detail-page__meta">
                {icon("map-pin")}
                <span>{place.address.clone()}</span>
                {maps_link.map(|href| view! {
                    <a href=href target="_blank" rel="noopener">" Xem bản đồ"</a>
                })}
            </p>
            <Gallery images=place.images.clone() />
            <p class="detail-page__summary">{place.summary.clone()}</p>
            <div class="detail-page__content">{place.content.clone()}</div>
            <PlaceEvents place_id=place.id />
        }
        .into_any()
    })
}

/// Published events held at a place
#[component]
fn PlaceEvents(place_id: EntityId) -> impl IntoView {
    let events = RwSignal::new(Vec::<Event>::new());
    spawn_local(async move {
        let query = ListQuery::paged(1, 6).published(true).place(Some(place_id));
        if let Ok(page) = Event::list(&query).await {
            events.set(page.data);
        }
    });

    view! {
        <Show when=move || events.with(|e| !e.is_empty())>
            <section class="related">
                <h2>"Sự kiện tại đây"</h2>
                <ul class="related__list">
                    {move || {
                        events
                            .get()
                            .into_iter()
                            .map(|e| view! {
                                <li>
                                    <a href=format!("/events/{}", e.id)>{e.title.clone()}</a>
                                    <span class="related__meta">
                                        {format_span(e.start_time.as_ref(), e.end_time.as_ref())}
                                    </span>
                                </li>
                            })
                            .collect_view()
                    }}
                </ul>
            </section>
        </Show>
    }
}
