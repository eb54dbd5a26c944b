//! Download confirmation banner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Height of the banner including borders.
pub const BANNER_HEIGHT: u16 = 3;

/// Render the banner shown after a brochure download.
///
/// # Details
/// Clicking anywhere on the banner, or pressing 'x', dismisses it.
pub fn render_banner(area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::styled(
            "Success! ",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Brochure is being downloaded.",
            Style::default().fg(Color::Blue),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title_top(Line::from("[x] Close").right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    Widget::render(paragraph, area, buf);
}
