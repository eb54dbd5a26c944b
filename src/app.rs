//! Application state management.
//!
//! Wires the list controller, selection, scroll trigger, banner, and UI mode
//! together. Every handler runs to completion on one input event.

use crate::actions::{self, RowAction};
use crate::college::CollegeRecord;
use crate::notifier::TransientNotifier;
use crate::pagination::{PaginationTrigger, Sentinel, scroll_window};
use crate::query::{ListController, SortColumn};
use std::cmp;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Application state and UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal table view
    List,
    /// Search box has focus
    Search,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Dataset and query state
    pub controller: ListController,
    /// Selected row position in the display subset
    pub selected_index: usize,
    /// Current UI mode
    pub mode: UiMode,
    /// Download confirmation banner
    pub notifier: TransientNotifier,
    /// Infinite-scroll trigger on the last row
    pub trigger: PaginationTrigger,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application state.
    ///
    /// # Arguments
    /// * `records` - Full dataset
    /// * `page_size` - Rows revealed per page
    /// * `banner_duration` - How long the download banner stays visible
    pub fn new(records: Vec<CollegeRecord>, page_size: usize, banner_duration: Duration) -> Self {
        Self {
            controller: ListController::new(records, page_size),
            selected_index: 0,
            mode: UiMode::List,
            notifier: TransientNotifier::new(banner_duration),
            trigger: PaginationTrigger::new(),
            status_message: None,
        }
    }

    /// Selected college, if the display subset is non-empty.
    pub fn selected_college(&self) -> Option<&CollegeRecord> {
        self.controller.display_get(self.selected_index)
    }

    /// Keep the selection inside the display subset.
    fn clamp_selection(&mut self) {
        self.selected_index = cmp::min(
            self.selected_index,
            self.controller.display_len().saturating_sub(1),
        );
    }

    /// Move selection up by `rows`, stopping at the first row.
    pub fn move_up(&mut self, rows: usize) {
        self.selected_index = self.selected_index.saturating_sub(rows);
    }

    /// Move selection down by `rows`, stopping at the last row.
    pub fn move_down(&mut self, rows: usize) {
        self.selected_index = self.selected_index.saturating_add(rows);
        self.clamp_selection();
    }

    /// Jump to the first row.
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the last displayed row.
    pub fn select_last(&mut self) {
        self.selected_index = self.controller.display_len().saturating_sub(1);
    }

    /// Add a character to the search term.
    ///
    /// # Details
    /// Only works in Search mode. Recomputes the display on every keystroke.
    pub fn add_search_char(&mut self, ch: char) {
        if self.mode == UiMode::Search {
            self.controller.push_search_char(ch);
            self.clamp_selection();
        }
    }

    /// Remove the last character of the search term.
    ///
    /// # Details
    /// Only works in Search mode.
    pub fn remove_search_char(&mut self) {
        if self.mode == UiMode::Search {
            self.controller.pop_search_char();
            self.clamp_selection();
        }
    }

    /// Clear the search term.
    pub fn clear_search(&mut self) {
        self.controller.set_search_term("");
        self.clamp_selection();
    }

    /// Sort by a header column, flipping direction if it is already active.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.controller.set_sort(column);
        self.clamp_selection();
        tracing::debug!(
            column = column.label(),
            direction = ?self.controller.query().sort_direction,
            "Sort changed"
        );
    }

    /// Rows of the display subset inside a viewport of `capacity` rows.
    pub fn visible_rows(&self, capacity: usize) -> Range<usize> {
        scroll_window(self.selected_index, self.controller.display_len(), capacity)
    }

    /// Check the sentinel row against the viewport after a frame.
    ///
    /// # Arguments
    /// * `capacity` - Number of rows that fit in the table viewport
    ///
    /// # Returns
    /// * `bool` - True if another page was revealed
    ///
    /// # Details
    /// Re-observes the current last row, then grows the page once if that
    /// row has just come into view. Any search, sort, or page change re-arms
    /// the trigger, even when the last row stays the same.
    pub fn on_viewport(&mut self, capacity: usize) -> bool {
        let len = self.controller.display_len();
        let sentinel = len.checked_sub(1).and_then(|position| {
            self.controller
                .display_get(position)
                .map(|record| Sentinel {
                    position,
                    rank: record.rank,
                    generation: self.controller.generation(),
                })
        });
        self.trigger.observe(sentinel);

        let window = self.visible_rows(capacity);
        let visible = len > 0 && window.end == len;
        if !self.trigger.signal(visible) {
            return false;
        }

        let grew = self.controller.grow_page();
        tracing::debug!(
            sentinel = ?self.trigger.sentinel(),
            visible_count = self.controller.query().visible_count,
            grew,
            "Sentinel row entered view"
        );
        grew
    }

    /// Run a row action on the selected college.
    ///
    /// # Arguments
    /// * `action` - Action to run
    /// * `now` - Current time, for the banner countdown
    ///
    /// # Returns
    /// * `Option<String>` - Application URL when the caller should open it
    ///
    /// # Details
    /// Apply Now is returned to the caller since it leaves the terminal.
    /// Download Brochure logs the source and shows the banner. The compare
    /// actions have no behavior yet beyond a status hint.
    pub fn run_action(&mut self, action: RowAction, now: Instant) -> Option<String> {
        let college = self.selected_college()?;
        match action {
            RowAction::ApplyNow => Some(college.apply_url.clone()),
            RowAction::DownloadBrochure => {
                actions::download_brochure(&college.brochure_url);
                self.notifier.notify(now);
                None
            }
            RowAction::AddToCompare | RowAction::CompareFees | RowAction::ComparePlacement => {
                tracing::debug!(
                    action = action.label(),
                    college = %college.college_name,
                    "Compare action not available"
                );
                self.set_status(format!("{}: not available yet", action.label()));
                None
            }
        }
    }

    /// Advance timers.
    pub fn tick(&mut self, now: Instant) {
        if self.notifier.tick(now) {
            tracing::debug!("Download banner expired");
        }
    }

    /// Dismiss the download banner.
    pub fn dismiss_banner(&mut self) {
        self.notifier.dismiss();
    }

    /// Set status message.
    ///
    /// # Details
    /// The message stays until the next user input clears it.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Clear the status message, bringing back the key help line.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::college::Placement;
    use crate::query::SortDirection;

    fn create_test_college(rank: u32, name: &str) -> CollegeRecord {
        CollegeRecord {
            rank,
            college_name: name.to_string(),
            location: "Pune, Maharashtra".to_string(),
            course: "B.Tech".to_string(),
            cutoff: "JEE-Main 2023".to_string(),
            logo: String::new(),
            fees: f64::from(rank) * 1_000.0,
            fees_description: "1st Year Fees".to_string(),
            placement: Placement::default(),
            user_rating: 7.5,
            users_rating: 40,
            ranking: format!("#{}", rank),
            featured: false,
            apply_url: format!("https://example.com/apply/{}", rank),
            brochure_url: format!("https://example.com/brochure/{}", rank),
        }
    }

    fn create_test_app(count: u32) -> App {
        let records = (1..=count)
            .map(|rank| create_test_college(rank, &format!("College {}", rank)))
            .collect();
        App::new(records, 10, Duration::from_millis(2000))
    }

    #[test]
    fn test_app_new() {
        let app = create_test_app(25);
        assert_eq!(app.controller.display_len(), 10);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.mode, UiMode::List);
        assert!(!app.notifier.is_visible());
    }

    #[test]
    fn test_app_move_selection_clamps() {
        let mut app = create_test_app(25);
        app.move_down(3);
        assert_eq!(app.selected_index, 3);
        app.move_down(100);
        assert_eq!(app.selected_index, 9);
        app.move_up(1);
        assert_eq!(app.selected_index, 8);
        app.move_up(100);
        assert_eq!(app.selected_index, 0);
        app.select_last();
        assert_eq!(app.selected_index, 9);
        app.select_first();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_search_only_in_search_mode() {
        let mut app = create_test_app(25);
        app.add_search_char('x');
        assert_eq!(app.controller.query().search_term, "");

        app.mode = UiMode::Search;
        app.add_search_char('2');
        assert_eq!(app.controller.query().search_term, "2");
        // "College 2", "College 12", "College 20".."College 25"
        assert_eq!(app.controller.filtered_count(), 8);
        app.remove_search_char();
        assert_eq!(app.controller.filtered_count(), 25);
    }

    #[test]
    fn test_search_clamps_selection() {
        let mut app = create_test_app(25);
        app.select_last();
        app.mode = UiMode::Search;
        for ch in "college 1".chars() {
            app.add_search_char(ch);
        }
        // "College 1" and "College 10".."College 19"
        assert_eq!(app.controller.display_len(), 10);
        app.add_search_char('9');
        assert_eq!(app.controller.display_len(), 1);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.selected_college().map(|c| c.rank), Some(19));
    }

    #[test]
    fn test_clear_search_keeps_visible_count() {
        let mut app = create_test_app(25);
        app.controller.grow_page();
        app.mode = UiMode::Search;
        app.add_search_char('7');
        assert_eq!(app.controller.display_len(), 2);
        app.clear_search();
        assert_eq!(app.controller.query().search_term, "");
        assert_eq!(app.controller.display_len(), 20);
    }

    #[test]
    fn test_sort_by_header() {
        let mut app = create_test_app(25);
        app.sort_by(SortColumn::Fees);
        app.sort_by(SortColumn::Fees);
        assert_eq!(app.controller.query().sort_direction, SortDirection::Descending);
        assert_eq!(app.selected_college().map(|c| c.rank), Some(25));
    }

    #[test]
    fn test_scroll_trigger_grows_until_capped() {
        let mut app = create_test_app(25);

        // Viewport of four rows at the top: last row is out of view.
        assert!(!app.on_viewport(4));
        assert_eq!(app.controller.query().visible_count, 10);

        app.select_last();
        assert!(app.on_viewport(4));
        assert_eq!(app.controller.query().visible_count, 20);

        // Same frame reported again: the new sentinel is out of view.
        assert!(!app.on_viewport(4));

        app.select_last();
        assert!(app.on_viewport(4));
        assert_eq!(app.controller.query().visible_count, 25);

        app.select_last();
        assert!(!app.on_viewport(4));
        assert!(!app.on_viewport(4));
        assert_eq!(app.controller.query().visible_count, 25);
    }

    #[test]
    fn test_tall_viewport_reveals_pages_one_frame_at_a_time() {
        let mut app = create_test_app(25);
        assert!(app.on_viewport(100));
        assert_eq!(app.controller.query().visible_count, 20);
        assert!(app.on_viewport(100));
        assert_eq!(app.controller.query().visible_count, 25);
        assert!(!app.on_viewport(100));
        assert!(!app.on_viewport(100));
        assert_eq!(app.controller.display_len(), 25);
    }

    #[test]
    fn test_widening_search_resumes_growth() {
        let records = (1..=25)
            .map(|rank| {
                let name = if rank <= 10 {
                    format!("Alpha {}", rank)
                } else {
                    format!("College {}", rank)
                };
                create_test_college(rank, &name)
            })
            .collect();
        let mut app = App::new(records, 10, Duration::from_millis(2000));

        // Exactly one page matches: the last row fires but nothing grows.
        app.mode = UiMode::Search;
        for ch in "alpha".chars() {
            app.add_search_char(ch);
        }
        assert_eq!(app.controller.filtered_count(), 10);
        assert!(!app.on_viewport(100));
        assert_eq!(app.controller.query().visible_count, 10);

        // Widening keeps "Alpha 10" as the last row.
        app.clear_search();
        assert_eq!(app.controller.display_get(9).map(|c| c.rank), Some(10));
        assert!(app.on_viewport(100));
        assert_eq!(app.controller.query().visible_count, 20);
        assert!(app.on_viewport(100));
        assert_eq!(app.controller.display_len(), 25);
        assert!(!app.on_viewport(100));
    }

    #[test]
    fn test_scroll_trigger_on_empty_listing() {
        let mut app = create_test_app(0);
        assert!(!app.on_viewport(10));
        assert!(app.selected_college().is_none());
    }

    #[test]
    fn test_download_brochure_shows_banner() {
        let mut app = create_test_app(3);
        let start = Instant::now();
        assert_eq!(app.run_action(RowAction::DownloadBrochure, start), None);
        assert!(app.notifier.is_visible());

        app.tick(start + Duration::from_millis(500));
        assert_eq!(
            app.run_action(RowAction::DownloadBrochure, start + Duration::from_millis(500)),
            None
        );
        app.tick(start + Duration::from_millis(2400));
        assert!(app.notifier.is_visible());
        app.tick(start + Duration::from_millis(2500));
        assert!(!app.notifier.is_visible());
    }

    #[test]
    fn test_dismiss_banner() {
        let mut app = create_test_app(3);
        app.run_action(RowAction::DownloadBrochure, Instant::now());
        app.dismiss_banner();
        assert!(!app.notifier.is_visible());
    }

    #[test]
    fn test_apply_now_returns_url() {
        let mut app = create_test_app(3);
        app.move_down(1);
        assert_eq!(
            app.run_action(RowAction::ApplyNow, Instant::now()).as_deref(),
            Some("https://example.com/apply/2")
        );
        assert!(!app.notifier.is_visible());
    }

    #[test]
    fn test_compare_actions_are_placeholders() {
        let mut app = create_test_app(3);
        assert_eq!(app.run_action(RowAction::CompareFees, Instant::now()), None);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Compare Fees: not available yet")
        );
        assert!(!app.notifier.is_visible());
    }

    #[test]
    fn test_clear_status_restores_help() {
        let mut app = create_test_app(3);
        app.run_action(RowAction::AddToCompare, Instant::now());
        assert!(app.status_message.is_some());
        app.clear_status();
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_actions_on_empty_listing_do_nothing() {
        let mut app = create_test_app(0);
        assert_eq!(app.run_action(RowAction::DownloadBrochure, Instant::now()), None);
        assert!(!app.notifier.is_visible());
    }
}
