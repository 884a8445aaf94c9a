// Tab Switcher
// Terminal page of mutually exclusive tabs, driven by mouse clicks

// IMPORTS ------------------>> 

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tui_components::{prune_toasts, render_toasts, RectRegistry, Toast};

use tab_switcher::constants::POLL_INTERVAL_MS;
use tab_switcher::core::{AppEvent, EventHandler};
use tab_switcher::logging::init_logging;
use tab_switcher::render::render_page;
use tab_switcher::{App, AppConfig};

//--------------------------------------------------------<<

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let config = AppConfig::default();
    init_logging(&config.logging)?;

    let page_path = App::resolve_page_path(std::env::args().nth(1));
    tracing::info!(page = %page_path.display(), "Starting tab switcher");

    let mut app = App::from_page_file(config, &page_path)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if app.config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if app.config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Tab switcher exited with an error");
    }
    result
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘ 

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut rects = RectRegistry::new();
    let mut toasts: Vec<Toast> = vec![Toast::info(format!("{} loaded", app.page.title))];
    let toast_ttl = app.config.ui.toast_duration;

    while !app.should_quit {
        prune_toasts(&mut toasts, toast_ttl);

        terminal
            .draw(|f| {
                let area = f.area();
                render_page(f, area, &*app, &mut rects);
                render_toasts(f, area, &toasts);
            })
            .context("Failed to draw frame")?;

        if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            continue;
        }

        match EventHandler::handle(event::read()?) {
            AppEvent::Quit => app.quit(),
            AppEvent::Click { column, row } => {
                if let Some(Err(e)) = app.handle_click(&rects, column, row) {
                    toasts.push(Toast::error(e.to_string()));
                }
            }
            // Layout is recomputed on the next draw
            AppEvent::Resize | AppEvent::None => {}
        }
    }

    Ok(())
}
