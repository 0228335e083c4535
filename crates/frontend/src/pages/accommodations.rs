use super::catalog::{CatalogFilters, CatalogState};
use super::detail::{detail_view, use_detail};
use crate::domain::a001_category::api as category_api;
use crate::domain::a005_accommodation::api as accommodation_api;
use crate::shared::components::cards::{card_delay, ContentCard, Gallery};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::date_utils::{format_price_band, format_stars};
use crate::shared::icons::icon;
use contracts::domain::a001_category::aggregate::{Category, CategoryKind};
use contracts::domain::a005_accommodation::aggregate::Accommodation;
use contracts::domain::common::Illustrated;
use futures_util::future::join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

#[component]
pub fn AccommodationsPage() -> impl IntoView {
    let state = RwSignal::new(CatalogState::<Accommodation>::new(config().lists.public_page_size));
    let categories = RwSignal::new(Vec::<Category>::new());

    spawn_local(async move {
        let (items, cats) = join(
            accommodation_api::list_published(),
            category_api::list_for(CategoryKind::Accommodation),
        )
        .await;
        match items {
            Ok(items) => state.update(|s| s.set_items(items)),
            Err(_) => state.update(|s| s.is_loaded = true),
        }
        if let Ok(cats) = cats {
            categories.set(cats);
        }
    });

    let current = Memo::new(move |_| state.with(|s| s.current(|a, f| f.matches_priced(a))));

    view! {
        <section class="catalog">
            <header class="catalog__header">
                <h1>"Lưu trú"</h1>
                <p>"Khách sạn, homestay và resort"</p>
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
                    fallback=|| view! { <p class="catalog__empty">"Không có cơ sở lưu trú phù hợp"</p> }
                >
                    <div class="card-grid">
                        {move || {
                            current
                                .get()
                                .rows
                                .into_iter()
                                .enumerate()
                                .map(|(i, item)| accommodation_card(item, i))
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

fn accommodation_card(item: Accommodation, index: usize) -> impl IntoView {
    view! {
        <ContentCard
            href=format!("/accommodations/{}", item.id)
            title=item.name.clone()
            summary=item.summary.clone()
            image=item.cover_url().map(str::to_string)
            delay_ms=card_delay(index)
        >
            <span class="stars">{format_stars(item.star_rating)}</span>
            <strong class="price">{format_price_band(item.min_price, item.max_price)}</strong>
        </ContentCard>
    }
}

#[component]
pub fn AccommodationDetailPage() -> impl IntoView {
    let state = use_detail::<Accommodation>();
    detail_view(state, "/accommodations", "Lưu trú", |item| {
        view! {
            <h1>{item.name.clone()} " " <span class="stars">{format_stars(item.star_rating)}</span></h1>
            <p class="detail-page__meta">{icon("map-pin")}<span>{item.address.clone()}</span></p>
            <dl class="detail-page__facts">
                <dt>"Giá phòng"</dt>
                <dd class="price">{format_price_band(item.min_price, item.max_price)}</dd>
                {item.phone.clone().map(|phone| view! {
                    <dt>"Điện thoại"</dt>
                    <dd><a href=format!("tel:{}", phone)>{phone.clone()}</a></dd>
                })}
                {item.website.clone().map(|site| view! {
                    <dt>"Website"</dt>
                    <dd><a href=site.clone() target="_blank" rel="noopener">{site.clone()}</a></dd>
                })}
            </dl>
            <Gallery images=item.images.clone() />
            <p class="detail-page__summary">{item.summary.clone()}</p>
            <div class="detail-page__content">{item.content.clone()}</div>
        }
        .into_any()
    })
}
