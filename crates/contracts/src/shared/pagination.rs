//! Page arithmetic shared by server-side and client-side paginated lists.
//! Pages are 1-based.

/// `ceil(total / page_size)`; zero when either side is zero
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size as u64) as u32
}

/// Records `[(page-1)*page_size, page*page_size)` clipped to the slice length
pub fn page_slice<T>(items: &[T], page: u32, page_size: u32) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page as usize - 1).saturating_mul(page_size as usize);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size as usize).min(items.len());
    &items[start..end]
}

/// Keep `page` inside `1..=total_pages` (1 for an empty list)
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Pagination controls are only rendered when there is more than one page
pub fn needs_pagination(total: u64, page_size: u32) -> bool {
    total_pages(total, page_size) > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(1000, 9), 112);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_page_slice_matches_range() {
        let items: Vec<u32> = (0..23).collect();
        for page_size in 1..=25u32 {
            let pages = total_pages(items.len() as u64, page_size);
            let mut seen = Vec::new();
            for page in 1..=pages {
                let slice = page_slice(&items, page, page_size);
                let start = ((page - 1) * page_size) as usize;
                let end = (page * page_size).min(items.len() as u32) as usize;
                assert_eq!(slice, &items[start..end]);
                seen.extend_from_slice(slice);
            }
            assert_eq!(seen, items);
        }
    }

    #[test]
    fn test_page_slice_out_of_range() {
        let items = [1, 2, 3];
        assert!(page_slice(&items, 0, 2).is_empty());
        assert!(page_slice(&items, 3, 2).is_empty());
        assert_eq!(page_slice(&items, 2, 2), &[3]);
    }

    #[test]
    fn test_single_category_needs_no_pagination() {
        assert!(!needs_pagination(1, 20));
        assert!(!needs_pagination(20, 20));
        assert!(needs_pagination(21, 20));
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(7, 5), 5);
        assert_eq!(clamp_page(3, 0), 1);
    }
}
