//! Infinite-scroll trigger.
//!
//! Watches the last row of the display subset (the sentinel) and reports
//! once each time it scrolls into the viewport.

use std::ops::Range;

/// Identity of the sentinel row.
///
/// The generation ties it to one rendering of the display subset, so a
/// search or sort change yields a new sentinel even when the last row
/// itself is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel {
    /// Position of the row in the display subset
    pub position: usize,
    /// Rank of the college shown in that row
    pub rank: u32,
    /// Display generation the row was rendered in
    pub generation: u64,
}

/// Edge-triggered pagination signal.
///
/// Visibility is reported every frame, so the raw signal is level-triggered.
/// The trigger only fires on a transition from hidden to visible, and
/// observing a different sentinel re-arms it.
#[derive(Debug, Default)]
pub struct PaginationTrigger {
    sentinel: Option<Sentinel>,
    was_visible: bool,
}

impl PaginationTrigger {
    /// Create a trigger with nothing observed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the current sentinel row.
    ///
    /// # Arguments
    /// * `sentinel` - Last row of the display subset, None when it is empty
    ///
    /// # Details
    /// Stops watching the previous sentinel if it differs.
    pub fn observe(&mut self, sentinel: Option<Sentinel>) {
        if self.sentinel != sentinel {
            self.sentinel = sentinel;
            self.was_visible = false;
        }
    }

    /// Report the sentinel's visibility.
    ///
    /// # Arguments
    /// * `visible` - Whether the sentinel row is inside the viewport
    ///
    /// # Returns
    /// * `bool` - True exactly once per crossing into view
    pub fn signal(&mut self, visible: bool) -> bool {
        let visible = visible && self.sentinel.is_some();
        let fire = visible && !self.was_visible;
        self.was_visible = visible;
        fire
    }

    /// Currently observed sentinel.
    pub fn sentinel(&self) -> Option<Sentinel> {
        self.sentinel
    }
}

/// Rows of the display subset inside the viewport.
///
/// # Arguments
/// * `selected` - Selected row position
/// * `len` - Number of rows in the display subset
/// * `capacity` - Number of rows that fit in the viewport
///
/// # Returns
/// * `Range<usize>` - Window of row positions, centred on the selection
pub fn scroll_window(selected: usize, len: usize, capacity: usize) -> Range<usize> {
    let capacity = capacity.max(1);
    if len == 0 {
        return 0..0;
    }
    let selected = selected.min(len - 1);
    let center_offset = capacity / 2;
    let start = selected.saturating_sub(center_offset);
    let start = start.min(len.saturating_sub(capacity));
    let end = (start + capacity).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentinel(position: usize, rank: u32) -> Option<Sentinel> {
        Some(Sentinel {
            position,
            rank,
            generation: 0,
        })
    }

    #[test]
    fn test_fires_once_while_visible() {
        let mut trigger = PaginationTrigger::new();
        trigger.observe(sentinel(9, 10));
        assert!(trigger.signal(true));
        assert!(!trigger.signal(true));
        assert!(!trigger.signal(true));
    }

    #[test]
    fn test_rearms_on_new_sentinel() {
        let mut trigger = PaginationTrigger::new();
        trigger.observe(sentinel(9, 10));
        assert!(trigger.signal(true));

        trigger.observe(sentinel(19, 20));
        assert!(trigger.signal(true));

        // Same sentinel re-observed after a re-render stays disarmed.
        trigger.observe(sentinel(19, 20));
        assert!(!trigger.signal(true));
    }

    #[test]
    fn test_rearms_on_new_generation_of_same_row() {
        let mut trigger = PaginationTrigger::new();
        let first = Sentinel {
            position: 9,
            rank: 10,
            generation: 3,
        };
        trigger.observe(Some(first));
        assert!(trigger.signal(true));
        assert!(!trigger.signal(true));

        trigger.observe(Some(Sentinel {
            generation: 4,
            ..first
        }));
        assert!(trigger.signal(true));
    }

    #[test]
    fn test_fires_again_after_leaving_view() {
        let mut trigger = PaginationTrigger::new();
        trigger.observe(sentinel(9, 10));
        assert!(!trigger.signal(false));
        assert!(trigger.signal(true));
        assert!(!trigger.signal(false));
        assert!(trigger.signal(true));
    }

    #[test]
    fn test_no_sentinel_never_fires() {
        let mut trigger = PaginationTrigger::new();
        trigger.observe(None);
        assert!(!trigger.signal(true));
        assert_eq!(trigger.sentinel(), None);
    }

    #[test]
    fn test_scroll_window() {
        assert_eq!(scroll_window(0, 0, 5), 0..0);
        assert_eq!(scroll_window(0, 3, 5), 0..3);
        assert_eq!(scroll_window(0, 10, 4), 0..4);
        assert_eq!(scroll_window(5, 10, 4), 3..7);
        assert_eq!(scroll_window(9, 10, 4), 6..10);
        assert_eq!(scroll_window(42, 10, 4), 6..10);
        assert_eq!(scroll_window(3, 10, 0), 3..4);
    }
}
