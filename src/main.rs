//! College TUI - browse, search and sort a college listing in the terminal.
//!
//! Main entry point and event loop for the application.

mod actions;
mod app;
mod cli;
mod college;
mod config;
mod logging;
mod notifier;
mod pagination;
mod query;
mod ui;

use actions::RowAction;
use app::{App, UiMode};
use clap::Parser;
use cli::Cli;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use query::SortColumn;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use ui::ScreenLayout;

/// Rows moved by PageUp/PageDown.
const PAGE_JUMP: usize = 5;

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration, starts logging, loads the dataset, and runs the event loop.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    if cli.write_config {
        let path = match cli.config {
            Some(ref p) => p.clone(),
            None => Config::default_config_path()?,
        };
        config.save(&path)?;
        println!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    // Must live for the whole of main so buffered records are flushed
    let _log_guard = logging::init(&config.log_dir_path()?, &config.log_level)?;
    tracing::info!(?config, "Starting college-tui");

    let records = college::dataset::load_or_empty(config.dataset_path().as_deref()).await;
    let mut app = App::new(records, config.page_size, config.banner_duration());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!("Event loop failed: {:#}", e);
    }
    result
}

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `app` - Application state
/// * `layout` - Screen regions for this frame
fn render_ui(f: &mut ratatui::Frame, app: &App, layout: &ScreenLayout) {
    if app.notifier.is_visible() {
        ui::render_banner(layout.banner, f.buffer_mut());
    }
    ui::render_search(app, layout.search, f.buffer_mut());
    ui::render_table(app, layout.table, f.buffer_mut());

    let status_text = app.status_message.as_deref().unwrap_or(
        "q quit | / search | 1-6 or click header to sort | a apply | d brochure | x close banner",
    );
    let status = ratatui::widgets::Paragraph::new(ratatui::text::Line::from(status_text))
        .block(ratatui::widgets::Block::default().borders(ratatui::widgets::Borders::ALL));
    f.render_widget(status, layout.status);
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Draws a frame, reports the table viewport to the scroll trigger, expires
/// the banner, then handles at most one input event.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    // Regions of the last frame, for mouse hit testing
    let mut layout = ScreenLayout::default();

    loop {
        app.tick(Instant::now());

        terminal.draw(|f| {
            layout = ui::screen_layout(f.area(), app.notifier.is_visible());
            render_ui(f, app, &layout);
        })?;

        // A newly revealed page is drawn right away
        if app.on_viewport(ui::table::row_capacity(layout.table)) {
            continue;
        }

        // Poll with a timeout so the banner countdown advances without input
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if !handle_key_event(key, app) {
                    break;
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(mouse, app, &layout),
            _ => {}
        }
    }

    Ok(())
}

/// Handle a key press.
///
/// # Returns
/// * `bool` - False when the application should exit
///
/// # Details
/// Any key clears the previous status message.
fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    app.clear_status();
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match app.mode {
        UiMode::List => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return false,
            KeyCode::Up | KeyCode::Char('k') => app.move_up(1),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(1),
            KeyCode::PageUp => app.move_up(PAGE_JUMP),
            KeyCode::PageDown => app.move_down(PAGE_JUMP),
            KeyCode::Home | KeyCode::Char('g') => app.select_first(),
            KeyCode::End | KeyCode::Char('G') => app.select_last(),
            KeyCode::Char('/') => {
                app.mode = UiMode::Search;
            }
            KeyCode::Char('x') => app.dismiss_banner(),
            KeyCode::Enter => run_row_action(RowAction::ApplyNow, app),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if let Some(column) = SortColumn::from_index(index) {
                    app.sort_by(column);
                }
            }
            KeyCode::Char(c) => {
                if let Some(action) = RowAction::from_key(c) {
                    run_row_action(action, app);
                }
            }
            _ => {}
        },
        UiMode::Search => match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                app.mode = UiMode::List;
            }
            KeyCode::Backspace => {
                app.remove_search_char();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.clear_search();
            }
            KeyCode::Char(c) => {
                app.add_search_char(c);
            }
            _ => {}
        },
    }

    true
}

/// Run a row action on the selected college, opening the browser for Apply Now.
fn run_row_action(action: RowAction, app: &mut App) {
    if let Some(apply_url) = app.run_action(action, Instant::now()) {
        match actions::open_apply_url(&apply_url) {
            Ok(()) => app.set_status(format!("Opened: {}", apply_url)),
            Err(e) => {
                tracing::warn!("{:#}", e);
                app.set_status(format!("Failed to open application page: {}", e));
            }
        }
    }
}

/// Handle mouse events (scroll and click).
///
/// # Arguments
/// * `mouse` - Mouse event
/// * `app` - Application state
/// * `layout` - Screen regions of the last frame
///
/// # Details
/// The wheel scrolls the table, a click on a header cell sorts by that
/// column, and a click on the banner dismisses it. Wheel and click events
/// clear the status message; plain motion leaves it alone.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, layout: &ScreenLayout) {
    if matches!(
        mouse.kind,
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown | MouseEventKind::Down(_)
    ) {
        app.clear_status();
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            if app.mode == UiMode::List {
                app.move_up(1);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.mode == UiMode::List {
                app.move_down(1);
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let banner = layout.banner;
            if app.notifier.is_visible()
                && mouse.row >= banner.y
                && mouse.row < banner.y + banner.height
            {
                app.dismiss_banner();
            } else if let Some(column) =
                ui::table::column_at(layout.table, mouse.column, mouse.row)
            {
                app.sort_by(column);
            }
        }
        _ => {}
    }
}
