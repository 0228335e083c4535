use super::catalog::ServerFilters;
use super::detail::{detail_view, use_detail};
use crate::domain::a001_category::api as category_api;
use crate::shared::components::cards::{card_delay, ContentCard, Gallery};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::crud::PagedListVm;
use crate::shared::date_utils::format_price_band;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::aggregate::{Category, CategoryKind};
use contracts::domain::a006_restaurant::aggregate::Restaurant;
use contracts::domain::common::Illustrated;
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

#[component]
pub fn RestaurantsPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = PagedListVm::<Restaurant>::scoped(
        toasts,
        ListQuery::new().published(true),
        config().lists.public_page_size,
    );
    vm.load();

    let categories = RwSignal::new(Vec::<Category>::new());
    spawn_local(async move {
        if let Ok(cats) = category_api::list_for(CategoryKind::Restaurant).await {
            categories.set(cats);
        }
    });

    view! {
        <section class="catalog">
            <header class="catalog__header">
                <h1>"Ẩm thực"</h1>
                <p>"Nhà hàng và quán ăn địa phương"</p>
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
                    fallback=|| view! { <p class="catalog__empty">"Chưa có nhà hàng"</p> }
                >
                    <div class="card-grid">
                        {move || {
                            vm.state
                                .get()
                                .items
                                .into_iter()
                                .enumerate()
                                .map(|(i, r)| view! {
                                    <ContentCard
                                        href=format!("/restaurants/{}", r.id)
                                        title=r.name.clone()
                                        summary=r.summary.clone()
                                        image=r.cover_url().map(str::to_string)
                                        delay_ms=card_delay(i)
                                    >
                                        <span class="tag">{r.cuisine.clone()}</span>
                                        <strong class="price">{format_price_band(r.min_price, r.max_price)}</strong>
                                    </ContentCard>
                                })
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

#[component]
pub fn RestaurantDetailPage() -> impl IntoView {
    let state = use_detail::<Restaurant>();
    detail_view(state, "/restaurants", "Ẩm thực", |r| {
        view! {
            <h1>{r.name.clone()}</h1>
            <p class="detail-page__meta">{icon("map-pin")}<span>{r.address.clone()}</span></p>
            <dl class="detail-page__facts">
                <dt>"Ẩm thực"</dt>
                <dd>{r.cuisine.clone()}</dd>
                <dt>"Giá"</dt>
                <dd class="price">{format_price_band(r.min_price, r.max_price)}</dd>
                {r.opening_hours.clone().map(|hours| view! {
                    <dt>"Giờ mở cửa"</dt>
                    <dd>{hours}</dd>
                })}
                {r.phone.clone().map(|phone| view! {
                    <dt>"Điện thoại"</dt>
                    <dd>{icon("phone")}<a href=format!("tel:{}", phone)>{phone.clone()}</a></dd>
                })}
            </dl>
            <Gallery images=r.images.clone() />
            <p class="detail-page__summary">{r.summary.clone()}</p>
            <div class="detail-page__content">{r.content.clone()}</div>
        }
        .into_any()
    })
}
