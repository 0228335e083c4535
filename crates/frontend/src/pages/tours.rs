use super::catalog::{CatalogFilters, CatalogState};
use super::detail::{detail_view, use_detail};
use crate::domain::a001_category::api as category_api;
use crate::domain::a004_tour::api as tour_api;
use crate::shared::components::cards::{card_delay, ContentCard, Gallery};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::date_utils::format_vnd;
use crate::shared::icons::icon;
use contracts::domain::a001_category::aggregate::{Category, CategoryKind};
use contracts::domain::a004_tour::aggregate::Tour;
use contracts::domain::common::Illustrated;
use futures_util::future::join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

#[component]
pub fn ToursPage() -> impl IntoView {
    let state = RwSignal::new(CatalogState::<Tour>::new(config().lists.public_page_size));
    let categories = RwSignal::new(Vec::<Category>::new());

    spawn_local(async move {
        let (tours, cats) = join(tour_api::list_published(), category_api::list_for(CategoryKind::Tour)).await;
        match tours {
            Ok(tours) => state.update(|s| s.set_items(tours)),
            Err(_) => state.update(|s| s.is_loaded = true),
        }
        if let Ok(cats) = cats {
            categories.set(cats);
        }
    });

    let current = Memo::new(move |_| state.with(|s| s.current(|t, f| f.matches_priced(t))));

    view! {
        <section class="catalog">
            <header class="catalog__header">
                <h1>"Tour du lịch"</h1>
            </header>
            <CatalogFilters
                with_price=true
                filter=Signal::derive(move || state.with(|s| s.filter.clone()))
                categories=categories
                on_change=Callback::new(move |f| state.update(|s| s.set_filter(f)))
            />
            <Show when=move || state.with(|s| s.is_loaded) fallback=|| view! { <div class="page-loading"><Spinner /></div> }>
                <Show
                    when=move || current.with(|p| !p.rows.is_empty())
                    fallback=|| view! { <p class="catalog__empty">"Không có tour phù hợp"</p> }
                >
                    <div class="card-grid">
                        {move || {
                            current
                                .get()
                                .rows
                                .into_iter()
                                .enumerate()
                                .map(|(i, tour)| tour_card(tour, i))
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

pub fn tour_card(tour: Tour, index: usize) -> impl IntoView {
    view! {
        <ContentCard
            href=format!("/tours/{}", tour.id)
            title=tour.name.clone()
            summary=tour.summary.clone()
            image=tour.cover_url().map(str::to_string)
            delay_ms=card_delay(index)
        >
            {icon("calendar")}
            <span>{format!("{} ngày", tour.duration_days)}</span>
            <strong class="price">{format_vnd(tour.price)}</strong>
        </ContentCard>
    }
}

#[component]
pub fn TourDetailPage() -> impl IntoView {
    let state = use_detail::<Tour>();
    detail_view(state, "/tours", "Tour du lịch", |tour| {
        view! {
            <h1>{tour.name.clone()}</h1>
            <dl class="detail-page__facts">
                <dt>"Thời lượng"</dt>
                <dd>{format!("{} ngày", tour.duration_days)}</dd>
                <dt>"Khởi hành"</dt>
                <dd>{tour.departure_point.clone()}</dd>
                <dt>"Giá"</dt>
                <dd class="price">{format_vnd(tour.price)}</dd>
            </dl>
            <Gallery images=tour.images.clone() />
            <p class="detail-page__summary">{tour.summary.clone()}</p>
            <h2>"Lịch trình"</h2>
            <div class="detail-page__content detail-page__itinerary">{tour.itinerary.clone()}</div>
            <div class="detail-page__content">{tour.content.clone()}</div>
        }
        .into_any()
    })
}
