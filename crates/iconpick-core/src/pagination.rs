use std::ops::Range;

use crate::trigger::OneShot;

/// Infinite-scroll cursor over the filtered view.
///
/// `displayed` only grows between resets and never exceeds `total`. While more
/// entries remain a sentinel trigger is armed at the end of the rendered list.
#[derive(Debug, Clone)]
pub struct Paginator {
    page_size: usize,
    displayed: usize,
    total: usize,
    sentinel: Option<OneShot>,
}

impl Paginator {
    /// A zero page size is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            displayed: 0,
            total: 0,
            sentinel: None,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.displayed < self.total
    }

    /// Whether a sentinel is currently placed and waiting.
    pub fn sentinel_armed(&self) -> bool {
        self.sentinel.as_ref().is_some_and(OneShot::is_armed)
    }

    /// Start over for a freshly computed view of `total` entries.
    pub fn reset(&mut self, total: usize) {
        self.displayed = 0;
        self.total = total;
        self.sentinel = None;
    }

    /// Advance by one page. Returns the range of newly displayed positions,
    /// empty once the view is exhausted.
    pub fn next_page(&mut self) -> Range<usize> {
        let start = self.displayed;
        let end = (start + self.page_size).min(self.total);
        self.displayed = end;

        // Old sentinel is removed; a new one goes at the end if anything is left.
        self.sentinel = if self.has_more() {
            Some(OneShot::armed())
        } else {
            None
        };

        start..end
    }

    /// The sentinel scrolled into view. Loads the next page only if the
    /// sentinel was still armed.
    pub fn sentinel_visible(&mut self) -> Range<usize> {
        let fired = self.sentinel.as_mut().is_some_and(OneShot::fire);
        if !fired {
            return self.displayed..self.displayed;
        }
        self.next_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_clamps_to_total() {
        let mut pager = Paginator::new(60);
        pager.reset(10);

        assert_eq!(pager.next_page(), 0..10);
        assert!(!pager.has_more());
        assert!(!pager.sentinel_armed());
    }

    #[test]
    fn test_pages_until_exhausted() {
        let mut pager = Paginator::new(60);
        pager.reset(150);

        assert_eq!(pager.next_page(), 0..60);
        assert!(pager.sentinel_armed());
        assert_eq!(pager.sentinel_visible(), 60..120);
        assert_eq!(pager.sentinel_visible(), 120..150);
        assert_eq!(pager.displayed(), 150);
        assert!(!pager.sentinel_armed());
    }

    #[test]
    fn test_displayed_is_monotonic_and_bounded() {
        let mut pager = Paginator::new(7);
        pager.reset(30);
        pager.next_page();

        let mut last = pager.displayed();
        for _ in 0..10 {
            pager.sentinel_visible();
            assert!(pager.displayed() >= last);
            assert!(pager.displayed() <= pager.total());
            last = pager.displayed();
        }
        assert_eq!(last, 30);
    }

    #[test]
    fn test_exhausted_sentinel_is_a_no_op() {
        let mut pager = Paginator::new(5);
        pager.reset(5);
        pager.next_page();

        assert!(pager.sentinel_visible().is_empty());
        assert_eq!(pager.displayed(), 5);
    }

    #[test]
    fn test_reset_clears_cursor() {
        let mut pager = Paginator::new(5);
        pager.reset(20);
        pager.next_page();
        pager.reset(3);

        assert_eq!(pager.displayed(), 0);
        assert!(!pager.sentinel_armed());
        assert_eq!(pager.next_page(), 0..3);
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let pager = Paginator::new(0);
        assert_eq!(pager.page_size(), 1);
    }
}
