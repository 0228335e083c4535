use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page numbers to render around `current`, `None` marks a gap.
///
/// Always contains the first and the last page.
pub fn page_window(current: u32, total: u32) -> Vec<Option<u32>> {
    if total <= 7 {
        return (1..=total).map(Some).collect();
    }
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);

    let mut pages = vec![Some(1)];
    if start > 2 {
        pages.push(None);
    }
    pages.extend((start..=end).map(Some));
    if end < total - 1 {
        pages.push(None);
    }
    pages.push(Some(total));
    pages
}

/// Pagination controls with 1-based pages.
///
/// Nothing is rendered when there is a single page or none.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total number of records, shown next to the page buttons
    #[prop(into)]
    total_count: Signal<u64>,

    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination-controls" aria-label="Phân trang">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled={move || current_page.get() <= 1}
                    title="Trang trước"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    page_window(current, total_pages.get())
                        .into_iter()
                        .map(|slot| match slot {
                            Some(page) => view! {
                                <button
                                    class=move || if page == current {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }.into_any(),
                            None => view! { <span class="pagination-gap">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled={move || current_page.get() >= total_pages.get()}
                    title="Trang sau"
                >
                    {icon("chevron-right")}
                </button>
                <span class="pagination-info">
                    {move || format!("{} kết quả", total_count.get())}
                </span>
            </nav>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_ranges_show_every_page() {
        assert_eq!(page_window(1, 3), vec![Some(1), Some(2), Some(3)]);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_long_ranges_collapse() {
        assert_eq!(
            page_window(5, 10),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
        assert_eq!(
            page_window(1, 10),
            vec![Some(1), Some(2), None, Some(10)]
        );
        assert_eq!(
            page_window(10, 10),
            vec![Some(1), None, Some(9), Some(10)]
        );
    }
}
