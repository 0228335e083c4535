//! Admin dashboard: one tab per content type. Each tab mounts its own list
//! with its own state, so switching tabs loads only that entity.

use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_place::ui::list::PlaceList;
use crate::domain::a003_event::ui::list::EventList;
use crate::domain::a004_tour::ui::list::TourList;
use crate::domain::a005_accommodation::ui::list::AccommodationList;
use crate::domain::a006_restaurant::ui::list::RestaurantList;
use crate::domain::a007_media::ui::list::MediaList;
use leptos::logging::log;
use leptos::prelude::*;
use std::collections::HashMap;

/// URL query key holding the active tab
const TAB_PARAM: &str = "tab";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Categories,
    Places,
    Events,
    Tours,
    Accommodations,
    Restaurants,
    Images,
}

impl AdminTab {
    pub const ALL: [AdminTab; 7] = [
        AdminTab::Categories,
        AdminTab::Places,
        AdminTab::Events,
        AdminTab::Tours,
        AdminTab::Accommodations,
        AdminTab::Restaurants,
        AdminTab::Images,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminTab::Categories => "categories",
            AdminTab::Places => "places",
            AdminTab::Events => "events",
            AdminTab::Tours => "tours",
            AdminTab::Accommodations => "accommodations",
            AdminTab::Restaurants => "restaurants",
            AdminTab::Images => "images",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Categories => "Danh mục",
            AdminTab::Places => "Địa điểm",
            AdminTab::Events => "Sự kiện",
            AdminTab::Tours => "Tour",
            AdminTab::Accommodations => "Lưu trú",
            AdminTab::Restaurants => "Nhà hàng",
            AdminTab::Images => "Thư viện ảnh",
        }
    }

    pub fn parse(key: &str) -> Option<AdminTab> {
        AdminTab::ALL.into_iter().find(|t| t.as_str() == key)
    }

    /// Tab named by a `?tab=...` query string; unknown or missing keys fall
    /// back to the first tab
    pub fn from_query(search: &str) -> AdminTab {
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        params
            .get(TAB_PARAM)
            .and_then(|key| AdminTab::parse(key))
            .unwrap_or_default()
    }

    pub fn to_query(&self) -> String {
        let params = HashMap::from([(TAB_PARAM.to_string(), self.as_str().to_string())]);
        format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
    }
}

fn render_tab_content(tab: AdminTab) -> AnyView {
    match tab {
        AdminTab::Categories => view! { <CategoryList /> }.into_any(),
        AdminTab::Places => view! { <PlaceList /> }.into_any(),
        AdminTab::Events => view! { <EventList /> }.into_any(),
        AdminTab::Tours => view! { <TourList /> }.into_any(),
        AdminTab::Accommodations => view! { <AccommodationList /> }.into_any(),
        AdminTab::Restaurants => view! { <RestaurantList /> }.into_any(),
        AdminTab::Images => view! { <MediaList /> }.into_any(),
    }
}

fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Mirror the active tab into the address bar without adding a history entry
fn sync_url(tab: AdminTab) {
    let new_url = tab.to_query();
    if current_search() == new_url {
        return;
    }
    if let Some(Ok(history)) = web_sys::window().map(|w| w.history()) {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let active = RwSignal::new(AdminTab::from_query(&current_search()));

    Effect::new(move |_| {
        let tab = active.get();
        log!("Admin tab: {}", tab.as_str());
        sync_url(tab);
    });

    view! {
        <div class="admin">
            <nav class="admin__tabs" role="tablist">
                {AdminTab::ALL
                    .into_iter()
                    .map(|tab| view! {
                        <button
                            role="tab"
                            class=move || if active.get() == tab { "admin__tab admin__tab--active" } else { "admin__tab" }
                            aria-selected=move || (active.get() == tab).to_string()
                            on:click=move |_| active.set(tab)
                        >
                            {tab.label()}
                        </button>
                    })
                    .collect_view()}
            </nav>
            <div class="admin__content" role="tabpanel">
                {move || render_tab_content(active.get())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for tab in AdminTab::ALL {
            assert_eq!(AdminTab::parse(tab.as_str()), Some(tab));
        }
        assert_eq!(AdminTab::parse("orders"), None);
    }

    #[test]
    fn test_from_query() {
        assert_eq!(AdminTab::from_query("?tab=places"), AdminTab::Places);
        assert_eq!(AdminTab::from_query("tab=images"), AdminTab::Images);
        assert_eq!(AdminTab::from_query("?tab=nope"), AdminTab::Categories);
        assert_eq!(AdminTab::from_query(""), AdminTab::Categories);
    }

    #[test]
    fn test_to_query() {
        assert_eq!(AdminTab::Restaurants.to_query(), "?tab=restaurants");
        assert_eq!(AdminTab::from_query(&AdminTab::Tours.to_query()), AdminTab::Tours);
    }
}
