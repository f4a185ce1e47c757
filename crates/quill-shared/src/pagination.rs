//! Paginator payload and the page-window computation for navigation controls.

use serde::{Deserialize, Serialize};

/// Fixed page size for post listings.
pub const PER_PAGE: u64 = 10;

/// Half-width of the numeric window around the current page.
const DELTA: u64 = 3;

/// A paginated collection, shaped the way the page renderer expects it:
/// the rows plus the counters and URLs needed to draw prev/next controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub prev_page_url: Option<String>,
    pub next_page_url: Option<String>,
    /// Base path for constructing numbered page links.
    pub path: String,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, current_page: u64, last_page: u64, total: u64, path: &str) -> Self {
        let prev_page_url =
            (current_page > 1).then(|| format!("{path}?page={}", current_page - 1));
        let next_page_url =
            (current_page < last_page).then(|| format!("{path}?page={}", current_page + 1));

        Self {
            data,
            current_page,
            last_page,
            per_page: PER_PAGE,
            total,
            prev_page_url,
            next_page_url,
            path: path.to_string(),
        }
    }
}

/// One entry in the rendered pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(u64),
    Ellipsis,
}

impl PageMarker {
    pub fn as_page(self) -> Option<u64> {
        match self {
            PageMarker::Page(n) => Some(n),
            PageMarker::Ellipsis => None,
        }
    }
}

/// Compute the window of page numbers to show around `current_page`.
///
/// The window spans `current_page ± 3` clamped to `[1, last_page]`. When the
/// window does not touch an end of the range, the first (or last) page is
/// kept reachable behind an ellipsis, so navigation can always jump to either
/// extreme.
pub fn page_window(current_page: u64, last_page: u64) -> Vec<PageMarker> {
    let left = current_page.saturating_sub(DELTA).max(1);
    let right = current_page.saturating_add(DELTA).min(last_page);

    let mut pages = Vec::new();
    if left > 1 {
        pages.push(PageMarker::Page(1));
        pages.push(PageMarker::Ellipsis);
    }
    for n in left..=right {
        pages.push(PageMarker::Page(n));
    }
    if right.saturating_add(1) < last_page {
        pages.push(PageMarker::Ellipsis);
    }
    if right < last_page {
        pages.push(PageMarker::Page(last_page));
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    use PageMarker::{Ellipsis, Page};

    #[test]
    fn single_page_collapses_to_one_entry() {
        assert_eq!(page_window(1, 1), vec![Page(1)]);
    }

    #[test]
    fn middle_of_long_range_has_both_ellipses() {
        assert_eq!(
            page_window(5, 20),
            vec![
                Page(1),
                Ellipsis,
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Ellipsis,
                Page(20),
            ]
        );
    }

    #[test]
    fn left_extreme_drops_leading_ellipsis() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn right_extreme_drops_trailing_ellipsis() {
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn window_adjacent_to_last_page_skips_ellipsis() {
        // right == last_page - 1: appending "…" before 10 would hide nothing.
        assert_eq!(
            page_window(6, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Page(10),
            ]
        );
    }

    #[test]
    fn window_survives_extreme_page_numbers() {
        assert_eq!(
            page_window(u64::MAX, u64::MAX),
            vec![
                Page(1),
                Ellipsis,
                Page(u64::MAX - 3),
                Page(u64::MAX - 2),
                Page(u64::MAX - 1),
                Page(u64::MAX),
            ]
        );
    }

    #[test]
    fn window_always_reaches_both_extremes() {
        for last in 1..=40u64 {
            for current in 1..=last {
                let window = page_window(current, last);
                let pages: Vec<u64> = window.iter().filter_map(|m| m.as_page()).collect();

                assert_eq!(pages.first(), Some(&1), "({current},{last})");
                assert_eq!(pages.last(), Some(&last), "({current},{last})");
                assert!(pages.windows(2).all(|w| w[0] < w[1]), "({current},{last})");
                assert!(pages.contains(&current), "({current},{last})");

                // At most one ellipsis on each side of the numeric run.
                let ellipses = window.iter().filter(|m| **m == Ellipsis).count();
                assert!(ellipses <= 2, "({current},{last})");
            }
        }
    }
}
