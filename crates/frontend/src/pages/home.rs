use super::events::event_card;
use super::places::place_card;
use super::tours::tour_card;
use crate::shared::crud::ReadService;
use chrono::Utc;
use contracts::domain::a002_place::aggregate::Place;
use contracts::domain::a003_event::aggregate::Event;
use contracts::domain::a004_tour::aggregate::Tour;
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

/// Cards per home page section
const SECTION_SIZE: u32 = 3;

/// First records of a published list; failures leave the section empty
fn load_section<E>(target: RwSignal<Vec<E>>, page_size: u32)
where
    E: ReadService + Send + Sync + 'static,
{
    spawn_local(async move {
        let query = ListQuery::paged(1, page_size).published(true);
        if let Ok(page) = E::list(&query).await {
            target.set(page.data);
        }
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let places = RwSignal::new(Vec::<Place>::new());
    let events = RwSignal::new(Vec::<Event>::new());
    let tours = RwSignal::new(Vec::<Tour>::new());

    load_section(places, SECTION_SIZE);
    // Past events are dropped client-side, so ask for a few more
    load_section(events, SECTION_SIZE * 3);
    load_section(tours, SECTION_SIZE);

    let upcoming = move || {
        let now = Utc::now();
        events
            .get()
            .into_iter()
            .filter(|e| e.is_upcoming(now))
            .take(SECTION_SIZE as usize)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="home">
            <section class="hero">
                <h1>"Khám phá Việt Nam"</h1>
                <p>"Điểm đến, lễ hội, tour, nơi nghỉ và ẩm thực cho chuyến đi của bạn"</p>
            </section>

            <section class="home__section">
                <header class="home__section-header">
                    <h2>"Địa điểm nổi bật"</h2>
                    <A href="/places">"Xem tất cả"</A>
                </header>
                <div class="card-grid">
                    {move || places.get().into_iter().enumerate().map(|(i, p)| place_card(p, i)).collect_view()}
                </div>
            </section>

            <Show when=move || !upcoming().is_empty()>
                <section class="home__section">
                    <header class="home__section-header">
                        <h2>"Sự kiện sắp diễn ra"</h2>
                        <A href="/events">"Xem tất cả"</A>
                    </header>
                    <div class="card-grid">
                        {move || upcoming().into_iter().enumerate().map(|(i, e)| event_card(e, i)).collect_view()}
                    </div>
                </section>
            </Show>

            <section class="home__section">
                <header class="home__section-header">
                    <h2>"Tour gợi ý"</h2>
                    <A href="/tours">"Xem tất cả"</A>
                </header>
                <div class="card-grid">
                    {move || tours.get().into_iter().enumerate().map(|(i, t)| tour_card(t, i)).collect_view()}
                </div>
            </section>
        </div>
    }
}
