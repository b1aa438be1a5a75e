//! Client-style pagination over the filtered set
//!
//! Pages are 1-indexed and unbounded: navigation never clamps, and a page
//! outside the data simply yields an empty slice.

/// Items of `page` for the given page size
///
/// Bounds are `[(page - 1) * page_size, page * page_size)`, truncated to the
/// slice. Pages below 1 and pages past the end are empty.
#[must_use]
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> &[T] {
    let Some(index) = page.checked_sub(1).and_then(|index| usize::try_from(index).ok()) else {
        return &[];
    };
    let start = index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages reported to the pagination control
///
/// Rounds `total / page_size` to the nearest integer (halves round up), so
/// 11 items at page size 10 report a single page and 3 items report none.
#[must_use]
pub const fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    (total.saturating_mul(2).saturating_add(page_size)) / page_size.saturating_mul(2)
}

/// Page reached by the "previous" control
#[must_use]
pub const fn prev_page(current: i64) -> i64 {
    current.saturating_sub(1)
}

/// Page reached by the "next" control
#[must_use]
pub const fn next_page(current: i64) -> i64 {
    current.saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_and_second_page() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 2, 10), &items[10..20]);
        assert_eq!(paginate(&items, 3, 10), &items[20..25]);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 2, 10).is_empty());
        assert!(paginate(&items, 0, 10).is_empty());
        assert!(paginate(&items, -3, 10).is_empty());
        assert!(paginate(&items, i64::MAX, 10).is_empty());
    }

    #[test]
    fn test_total_pages_rounds_to_nearest() {
        assert_eq!(total_pages(3, 10), 0);
        assert_eq!(total_pages(5, 10), 1);
        assert_eq!(total_pages(11, 10), 1);
        assert_eq!(total_pages(15, 10), 2);
        assert_eq!(total_pages(24, 10), 2);
        assert_eq!(total_pages(50, 10), 5);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_rounding_hides_trailing_items() {
        // The 11th item lives on page 2, which the control does not report.
        let items: Vec<u32> = (1..=11).collect();
        assert_eq!(total_pages(items.len(), 10), 1);
        assert_eq!(paginate(&items, 2, 10), &[11]);
    }

    #[test]
    fn test_navigation_is_unbounded() {
        assert_eq!(prev_page(1), 0);
        assert_eq!(prev_page(0), -1);
        assert_eq!(next_page(7), 8);
    }

    proptest! {
        #[test]
        fn prop_page_never_exceeds_page_size(
            len in 0usize..200,
            page in -5i64..40,
            page_size in 1usize..30,
        ) {
            let items: Vec<usize> = (0..len).collect();
            prop_assert!(paginate(&items, page, page_size).len() <= page_size);
        }

        #[test]
        fn prop_pages_reconstruct_input(len in 0usize..200, page_size in 1usize..30) {
            let items: Vec<usize> = (0..len).collect();
            let pages = i64::try_from(len.div_ceil(page_size)).unwrap();
            let rebuilt: Vec<usize> = (1..=pages)
                .flat_map(|page| paginate(&items, page, page_size).iter().copied())
                .collect();
            prop_assert_eq!(rebuilt, items);
        }

        #[test]
        fn prop_next_then_prev_is_identity(page in -1000i64..1000) {
            prop_assert_eq!(prev_page(next_page(page)), page);
            prop_assert_eq!(next_page(prev_page(page)), page);
        }
    }
}
