use crate::dashboards::AdminDashboard;
use crate::layout::Shell;
use crate::pages::accommodations::{AccommodationDetailPage, AccommodationsPage};
use crate::pages::events::{EventDetailPage, EventsPage};
use crate::pages::home::HomePage;
use crate::pages::places::{PlaceDetailPage, PlacesPage};
use crate::pages::restaurants::{RestaurantDetailPage, RestaurantsPage};
use crate::pages::tours::{TourDetailPage, ToursPage};
use crate::shared::components::cards::NotFound;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! {
                    <NotFound
                        message="Trang bạn tìm không tồn tại"
                        back_href="/"
                        back_label="Trang chủ"
                    />
                }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/places") view=PlacesPage />
                    <Route path=path!("/places/:id") view=PlaceDetailPage />
                    <Route path=path!("/events") view=EventsPage />
                    <Route path=path!("/events/:id") view=EventDetailPage />
                    <Route path=path!("/tours") view=ToursPage />
                    <Route path=path!("/tours/:id") view=TourDetailPage />
                    <Route path=path!("/accommodations") view=AccommodationsPage />
                    <Route path=path!("/accommodations/:id") view=AccommodationDetailPage />
                    <Route path=path!("/restaurants") view=RestaurantsPage />
                    <Route path=path!("/restaurants/:id") view=RestaurantDetailPage />
                    <Route path=path!("/admin") view=AdminDashboard />
                </Routes>
            </Shell>
        </Router>
    }
}
