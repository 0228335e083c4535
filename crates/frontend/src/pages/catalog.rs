//! Filtering for the public list pages: the client-side catalog of pages
//! that load every published record once, and the filter bar of the
//! server-paginated ones.

use crate::shared::components::form_fields::parse_id;
use crate::shared::list_utils::{filter_list, parse_price, ListFilter, SearchInput, SubmitSearch};
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::common::EntityId;
use contracts::shared::pagination::{clamp_page, page_slice, total_pages};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState<T> {
    pub items: Vec<T>,
    pub filter: ListFilter,
    pub page: u32,
    pub page_size: u32,
    pub is_loaded: bool,
}

/// One rendered page of the filtered catalog
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogPage<T> {
    pub rows: Vec<T>,
    pub page: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl<T: Clone> CatalogState<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            filter: ListFilter::default(),
            page: 1,
            page_size,
            is_loaded: false,
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.page = 1;
        self.is_loaded = true;
    }

    /// Any filter change starts again from the first page
    pub fn set_filter(&mut self, filter: ListFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.page = 1;
        }
    }

    /// Filter, then cut out the current page. The page is clamped in case
    /// the filter shrank the result below it.
    pub fn current(&self, keep: impl Fn(&T, &ListFilter) -> bool) -> CatalogPage<T> {
        let filtered = filter_list(&self.items, |item| keep(item, &self.filter));
        let total = filtered.len() as u64;
        let pages = total_pages(total, self.page_size);
        let page = clamp_page(self.page, pages);
        CatalogPage {
            rows: page_slice(&filtered, page, self.page_size).to_vec(),
            page,
            total,
            total_pages: pages,
        }
    }
}

/// Search box, category select and (optionally) the price window of a
/// public list
#[component]
pub fn CatalogFilters(
    #[prop(into)] filter: Signal<ListFilter>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    on_change: Callback<ListFilter>,
    #[prop(optional)] with_price: bool,
) -> impl IntoView {
    let change = move |edit: &dyn Fn(&mut ListFilter)| {
        let mut next = filter.get_untracked();
        edit(&mut next);
        on_change.run(next);
    };

    view! {
        <div class="catalog-filters">
            <SearchInput
                value=Signal::derive(move || filter.with(|f| f.search.clone()))
                on_change=Callback::new(move |text: String| change(&|f: &mut ListFilter| f.search = text.clone()))
            />
            <select
                class="form__select"
                on:change=move |ev| {
                    let id = parse_id(&event_target_value(&ev));
                    change(&|f: &mut ListFilter| f.category_id = id);
                }
            >
                <option value="">"Tất cả danh mục"</option>
                {move || {
                    let selected = filter.with(|f| f.category_id);
                    categories
                        .get()
                        .into_iter()
                        .map(|c| view! {
                            <option value=c.id.to_string() selected=selected == Some(c.id)>{c.name}</option>
                        })
                        .collect_view()
                }}
            </select>
            {with_price.then(|| view! {
                <input
                    class="form__input catalog-filters__price"
                    type="text"
                    inputmode="numeric"
                    placeholder="Giá từ"
                    on:input=move |ev| {
                        let min = parse_price(&event_target_value(&ev));
                        change(&|f: &mut ListFilter| f.min_price = min);
                    }
                />
                <input
                    class="form__input catalog-filters__price"
                    type="text"
                    inputmode="numeric"
                    placeholder="Giá đến"
                    on:input=move |ev| {
                        let max = parse_price(&event_target_value(&ev));
                        change(&|f: &mut ListFilter| f.max_price = max);
                    }
                />
            })}
            <Show when=move || filter.with(|f| f.is_active())>
                <button class="button button--ghost" on:click=move |_| on_change.run(ListFilter::default())>
                    "Xóa bộ lọc"
                </button>
            </Show>
        </div>
    }
}

/// Filter bar of a server-paginated public list: the search is submitted
/// explicitly, the category applies immediately
#[component]
pub fn ServerFilters(
    #[prop(into)] search: Signal<String>,
    #[prop(into)] category_id: Signal<Option<EntityId>>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    on_search: Callback<String>,
    on_category: Callback<Option<EntityId>>,
) -> impl IntoView {
    view! {
        <div class="catalog-filters">
            <SubmitSearch value=search on_submit=on_search />
            <select
                class="form__select"
                on:change=move |ev| on_category.run(parse_id(&event_target_value(&ev)))
            >
                <option value="">"Tất cả danh mục"</option>
                {move || {
                    let selected = category_id.get();
                    categories
                        .get()
                        .into_iter()
                        .map(|c| view! {
                            <option value=c.id.to_string() selected=selected == Some(c.id)>{c.name}</option>
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keep_containing(item: &String, filter: &ListFilter) -> bool {
        item.contains(filter.search.as_str())
    }

    fn state_of(n: usize) -> CatalogState<String> {
        let mut state = CatalogState::new(9);
        state.set_items((1..=n).map(|i| format!("item {}", i)).collect());
        state
    }

    #[test]
    fn test_pages_of_nine() {
        let mut state = state_of(20);
        let first = state.current(keep_containing);
        assert_eq!(first.total, 20);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.rows.len(), 9);

        state.page = 3;
        let last = state.current(keep_containing);
        assert_eq!(last.rows, vec!["item 19".to_string(), "item 20".to_string()]);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = state_of(20);
        state.page = 2;
        state.set_filter(ListFilter {
            search: "item 1".into(),
            ..ListFilter::default()
        });
        assert_eq!(state.page, 1);
        // "item 1" and "item 10".."item 19"
        assert_eq!(state.current(keep_containing).total, 11);
    }

    #[test]
    fn test_page_is_clamped_to_filtered_result() {
        let mut state = state_of(20);
        state.page = 3;
        state.filter.search = "item 2".into();
        let page = state.current(keep_containing);
        assert_eq!(page.page, 1);
        assert_eq!(page.rows.len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let state: CatalogState<String> = CatalogState::new(9);
        let page = state.current(keep_containing);
        assert_eq!(page.total_pages, 0);
        assert!(page.rows.is_empty());
    }
}
