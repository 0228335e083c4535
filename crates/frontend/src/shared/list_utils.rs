//! Search and filtering helpers for lists rendered from a fully loaded
//! collection.
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_place::aggregate::Place;
use contracts::domain::a003_event::aggregate::Event;
use contracts::domain::a004_tour::aggregate::Tour;
use contracts::domain::a005_accommodation::aggregate::Accommodation;
use contracts::domain::a006_restaurant::aggregate::Restaurant;
use contracts::domain::a007_media::aggregate::Media;
use contracts::domain::common::{slugify, EntityId, Publishable};
use leptos::prelude::*;

/// Types that can be matched against free search text
pub trait Searchable {
    /// Text the search runs over
    fn search_text(&self) -> String;

    /// Accent- and case-insensitive containment: "ha long" finds "Vịnh Hạ Long"
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = slugify(filter);
        needle.is_empty() || slugify(&self.search_text()).contains(&needle)
    }
}

/// Items with a price, for the min/max price filter
pub trait Priced {
    /// Inclusive `(low, high)` price band
    fn price_band(&self) -> (f64, f64);
}

/// Filter options of a public list page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListFilter {
    pub search: String,
    pub category_id: Option<EntityId>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ListFilter {
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || self.category_id.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
    }

    fn matches_common<T: Searchable + Publishable>(&self, item: &T) -> bool {
        if let Some(category_id) = self.category_id {
            if item.category_id() != Some(category_id) {
                return false;
            }
        }
        item.matches_filter(&self.search)
    }

    pub fn matches<T: Searchable + Publishable>(&self, item: &T) -> bool {
        self.matches_common(item)
    }

    /// Like `matches`, plus the price window: an item passes when its band
    /// overlaps `[min_price, max_price]`
    pub fn matches_priced<T: Searchable + Publishable + Priced>(&self, item: &T) -> bool {
        if !self.matches_common(item) {
            return false;
        }
        let (low, high) = item.price_band();
        if let Some(min) = self.min_price {
            if high < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if low > max {
                return false;
            }
        }
        true
    }
}

/// Keep the items accepted by `keep`, preserving order
pub fn filter_list<T: Clone>(items: &[T], keep: impl Fn(&T) -> bool) -> Vec<T> {
    items.iter().filter(|item| keep(item)).cloned().collect()
}

/// Parse an optional numeric filter input; blank or garbage means "no bound"
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace() && *c != '.').collect();
    cleaned.parse::<f64>().ok().filter(|v| *v >= 0.0)
}

// ============================================================================
// Entity impls
// ============================================================================

impl Searchable for Category {
    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.slug)
    }
}

impl Searchable for Place {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.summary, self.address)
    }
}

impl Searchable for Event {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.summary, self.location)
    }
}

impl Searchable for Tour {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.summary, self.departure_point)
    }
}

impl Searchable for Accommodation {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.summary, self.address)
    }
}

impl Searchable for Restaurant {
    fn search_text(&self) -> String {
        format!("{} {} {} {}", self.name, self.cuisine, self.summary, self.address)
    }
}

impl Searchable for Media {
    fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.file_name,
            self.alt_text.clone().unwrap_or_default()
        )
    }
}

impl Priced for Tour {
    fn price_band(&self) -> (f64, f64) {
        (self.price, self.price)
    }
}

impl Priced for Accommodation {
    fn price_band(&self) -> (f64, f64) {
        (self.min_price, self.max_price)
    }
}

impl Priced for Restaurant {
    fn price_band(&self) -> (f64, f64) {
        (self.min_price, self.max_price)
    }
}

/// Search box with a clear button. Every keystroke is reported.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Tìm kiếm...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Xóa tìm kiếm"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Search box for server-side lists: the query is only sent on Enter or
/// on the search button, never per keystroke
#[component]
pub fn SubmitSearch(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_submit: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let draft = RwSignal::new(value.get_untracked());
    Effect::new(move |_| draft.set(value.get()));
    let placeholder = if placeholder.is_empty() {
        "Tìm kiếm...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        on_submit.run(draft.get_untracked());
                    }
                }
            />
            <button
                class="search-input__submit"
                title="Tìm"
                on:click=move |_| on_submit.run(draft.get_untracked())
            >
                {crate::shared::icons::icon("search")}
            </button>
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Xóa tìm kiếm"
                    on:click=move |_| on_submit.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tour(name: &str, price: f64, category_id: Option<EntityId>) -> Tour {
        Tour {
            name: name.into(),
            price,
            category_id,
            ..Default::default()
        }
    }

    fn hotel(name: &str, min: f64, max: f64) -> Accommodation {
        Accommodation {
            name: name.into(),
            min_price: min,
            max_price: max,
            category_id: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_ignores_accents_and_case() {
        let place = Place {
            name: "Vịnh Hạ Long".into(),
            address: "Quảng Ninh".into(),
            ..Default::default()
        };
        assert!(place.matches_filter("ha long"));
        assert!(place.matches_filter("QUẢNG"));
        assert!(place.matches_filter("  "));
        assert!(!place.matches_filter("đà lạt"));
    }

    #[test]
    fn test_category_filter() {
        let tours = vec![tour("Sapa", 1.0, Some(1)), tour("Mekong", 1.0, Some(2))];
        let filter = ListFilter {
            category_id: Some(2),
            ..Default::default()
        };
        let kept = filter_list(&tours, |t| filter.matches(t));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Mekong");
    }

    #[test]
    fn test_price_window_overlap() {
        let hotels = vec![
            hotel("Cheap", 200_000.0, 400_000.0),
            hotel("Mid", 800_000.0, 1_500_000.0),
            hotel("Lux", 3_000_000.0, 9_000_000.0),
        ];
        let filter = ListFilter {
            min_price: Some(300_000.0),
            max_price: Some(1_000_000.0),
            ..Default::default()
        };
        let kept: Vec<String> = filter_list(&hotels, |h| filter.matches_priced(h))
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(kept, vec!["Cheap", "Mid"]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let tours = vec![tour("A", 1.0, None), tour("B", 2.0, Some(3))];
        let filter = ListFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter_list(&tours, |t| filter.matches_priced(t)).len(), 2);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("1.500.000"), Some(1_500_000.0));
        assert_eq!(parse_price(" 250000 "), Some(250_000.0));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("-5"), None);
    }
}
