use std::ops::Range;

/// Rows per page until the user picks another size. Also the row count at
/// which the pagination bar appears.
pub const DEFAULT_PAGE_SIZE: usize = 100;

pub const PAGE_SIZE_OPTIONS: [usize; 6] = [5, 10, 20, 25, 50, 100];

/// The pagination bar is shown once the *unfiltered* list reaches the
/// default page size. Filtering never hides it.
pub fn show_pagination(unfiltered_len: usize, default_page_size: usize) -> bool {
    unfiltered_len >= default_page_size
}

pub fn page_count(rows: usize, page_size: usize) -> usize {
    rows.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(index: usize, rows: usize, page_size: usize) -> usize {
    index.min(page_count(rows, page_size) - 1)
}

/// Row indices shown on page `index`.
pub fn page_range(index: usize, rows: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = (clamp_page(index, rows, page_size) * page_size).min(rows);
    start..(start + page_size).min(rows)
}

/// Picks the page that keeps the first row of the current page in view
/// after a page size change.
pub fn rebase_page(index: usize, old_size: usize, new_size: usize) -> usize {
    index * old_size.max(1) / new_size.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_threshold() {
        assert!(!show_pagination(0, DEFAULT_PAGE_SIZE));
        assert!(!show_pagination(99, DEFAULT_PAGE_SIZE));
        assert!(show_pagination(100, DEFAULT_PAGE_SIZE));
        assert!(show_pagination(250, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn counts_and_ranges() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 5);

        assert_eq!(page_range(0, 0, 10), 0..0);
        assert_eq!(page_range(0, 25, 10), 0..10);
        assert_eq!(page_range(2, 25, 10), 20..25);
        // out of range pages land on the last page
        assert_eq!(page_range(7, 25, 10), 20..25);
    }

    #[test]
    fn rebase_keeps_first_row_visible() {
        // rows 40..50 with size 10 -> row 40 is on page 1 at size 25
        assert_eq!(rebase_page(4, 10, 25), 1);
        assert_eq!(rebase_page(1, 25, 5), 5);
        assert_eq!(rebase_page(0, 100, 5), 0);
    }
}
