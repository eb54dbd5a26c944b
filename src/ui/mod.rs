//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface.

pub mod banner;
pub mod search;
pub mod table;

pub use banner::render_banner;
pub use search::render_search;
pub use table::render_table;

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Download banner, zero-height while hidden
    pub banner: Rect,
    pub search: Rect,
    pub table: Rect,
    pub status: Rect,
}

/// Split the terminal area into screen regions.
///
/// # Arguments
/// * `area` - Full terminal area
/// * `banner_visible` - Whether to reserve room for the banner
pub fn screen_layout(area: Rect, banner_visible: bool) -> ScreenLayout {
    let banner_height = if banner_visible {
        banner::BANNER_HEIGHT
    } else {
        0
    };
    let chunks = Layout::vertical([
        Constraint::Length(banner_height), // Banner
        Constraint::Length(3),             // Search bar
        Constraint::Min(0),                // College table
        Constraint::Length(3),             // Status bar
    ])
    .split(area);

    ScreenLayout {
        banner: chunks[0],
        search: chunks[1],
        table: chunks[2],
        status: chunks[3],
    }
}
