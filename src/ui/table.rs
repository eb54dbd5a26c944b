//! College table widget rendering.
//!
//! Maps the display subset and sort state onto a six-column table. Only the
//! rows inside the scroll window are rendered.

use crate::actions::RowAction;
use crate::app::App;
use crate::college::CollegeRecord;
use crate::college::models::format_rupees;
use crate::query::{ListQuery, SortColumn, SortDirection};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState},
};

/// Lines per college row.
pub const ROW_HEIGHT: u16 = 5;
/// Blank lines between college rows.
pub const ROW_GAP: u16 = 1;
/// Header line plus its bottom margin.
const HEADER_HEIGHT: u16 = 2;
const COLUMN_SPACING: u16 = 1;

/// Column widths in header order.
pub const COLUMN_WIDTHS: [Constraint; 6] = [
    Constraint::Percentage(8),
    Constraint::Percentage(34),
    Constraint::Percentage(16),
    Constraint::Percentage(18),
    Constraint::Percentage(12),
    Constraint::Percentage(12),
];

/// Number of college rows that fit in the table area.
pub fn row_capacity(area: Rect) -> usize {
    let body = area.height.saturating_sub(2 + HEADER_HEIGHT);
    ((body + ROW_GAP) / (ROW_HEIGHT + ROW_GAP)).max(1) as usize
}

/// Header text for a column, with an arrow on the active sort column.
pub fn header_label(column: SortColumn, query: &ListQuery) -> String {
    if query.sort_column != Some(column) {
        return column.label().to_string();
    }
    match query.sort_direction {
        SortDirection::Ascending => format!("{} ▲", column.label()),
        SortDirection::Descending => format!("{} ▼", column.label()),
        SortDirection::Unsorted => column.label().to_string(),
    }
}

fn column_areas(area: Rect) -> Vec<Rect> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    Layout::horizontal(COLUMN_WIDTHS)
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(inner)
        .to_vec()
}

/// Header column under a mouse position.
///
/// # Arguments
/// * `area` - Area the table was rendered in
/// * `column` - Mouse column
/// * `row` - Mouse row
///
/// # Returns
/// * `Option<SortColumn>` - Column whose header cell contains the position
pub fn column_at(area: Rect, column: u16, row: u16) -> Option<SortColumn> {
    if row != area.y + 1 {
        return None;
    }
    column_areas(area)
        .iter()
        .position(|cell| column >= cell.x && column < cell.x + cell.width)
        .and_then(SortColumn::from_index)
}

fn action_link(action: RowAction, color: Color) -> Span<'static> {
    Span::styled(
        format!("[{}] {}", action.key(), action.label()),
        Style::default().fg(color),
    )
}

fn identity_cell(college: &CollegeRecord) -> Cell<'_> {
    let muted = Style::default().fg(Color::Gray);
    Cell::from(Text::from(vec![
        Line::from(Span::styled(
            college.college_name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(college.location.as_str(), muted)),
        Line::from(Span::styled(college.course.as_str(), muted)),
        Line::from(Span::styled(college.cutoff.as_str(), muted)),
        Line::from(vec![
            action_link(RowAction::ApplyNow, Color::Yellow),
            Span::raw(" "),
            action_link(RowAction::DownloadBrochure, Color::Green),
            Span::raw(" "),
            action_link(RowAction::AddToCompare, Color::Gray),
        ]),
    ]))
}

fn fees_cell(college: &CollegeRecord) -> Cell<'_> {
    Cell::from(Text::from(vec![
        Line::from(Span::styled(
            college.format_fees(),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            college.fees_description.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(action_link(RowAction::CompareFees, Color::Yellow)),
    ]))
}

fn placement_cell(college: &CollegeRecord) -> Cell<'_> {
    let mut lines = Vec::new();
    if let Some(average) = college.placement.shown_average() {
        lines.push(Line::from(vec![
            Span::raw("Average Package: "),
            Span::styled(format_rupees(average), Style::default().fg(Color::Green)),
        ]));
    }
    if let Some(highest) = college.placement.shown_highest() {
        lines.push(Line::from(vec![
            Span::raw("Highest Package: "),
            Span::styled(format_rupees(highest), Style::default().fg(Color::Green)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(action_link(RowAction::ComparePlacement, Color::Yellow)));
    Cell::from(Text::from(lines))
}

fn rating_cell(college: &CollegeRecord) -> Cell<'_> {
    Cell::from(Text::from(vec![
        Line::from(college.format_rating()),
        Line::from(Span::styled(
            format!("Based on {} users", college.users_rating),
            Style::default().fg(Color::Gray),
        )),
    ]))
}

fn ranking_cell(college: &CollegeRecord) -> Cell<'_> {
    let mut lines = vec![Line::from(college.ranking.as_str())];
    if college.featured {
        lines.push(Line::from(Span::styled(
            "Featured",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
    }
    Cell::from(Text::from(lines))
}

fn college_row(college: &CollegeRecord) -> Row<'_> {
    Row::new(vec![
        Cell::from(format!("#{}", college.rank)),
        identity_cell(college),
        fees_cell(college),
        placement_cell(college),
        rating_cell(college),
        ranking_cell(college),
    ])
    .height(ROW_HEIGHT)
    .bottom_margin(ROW_GAP)
}

/// Render the college table.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// The header is always drawn, even when no college matches the search.
/// The title shows displayed, matching, and total counts.
pub fn render_table(app: &App, area: Rect, buf: &mut Buffer) {
    let controller = &app.controller;
    let query = controller.query();

    let header = Row::new(SortColumn::ALL.iter().map(|&column| {
        let style = if query.sort_column == Some(column) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        Cell::from(header_label(column, query)).style(style)
    }))
    .height(1)
    .bottom_margin(HEADER_HEIGHT - 1);

    let display = controller.display();
    let window = app.visible_rows(row_capacity(area));
    let rows: Vec<Row> = display[window.clone()]
        .iter()
        .map(|college| college_row(college))
        .collect();

    let title = format!(
        "Colleges ({} shown, {} matching, {} total)",
        display.len(),
        controller.filtered_count(),
        controller.records().len()
    );

    let mut state = TableState::default();
    if !rows.is_empty() && window.contains(&app.selected_index) {
        state.select(Some(app.selected_index - window.start));
    }

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .block(Block::default().title(title).borders(Borders::ALL))
        .row_highlight_style(Style::default().bg(Color::Blue));

    StatefulWidget::render(table, area, buf, &mut state);
}
