//! NEXUS TUI - Terminal front end for the NEXUS equipment rental marketplace
//!
//! A Ratatui-based TUI for browsing oilfield equipment, requesting rentals
//! and reviewing client, vendor and admin dashboards.

mod app;
mod catalog;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nexus_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match TuiConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Ignoring unreadable config: {err}");
            TuiConfig::default()
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let result = match App::new(config).await {
        Ok(mut app) => run_app(&mut terminal, &mut app).await,
        Err(err) => Err(err),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let term_size = terminal.size()?;

        // Update splash animation if active
        let in_splash = app.in_splash();
        if in_splash {
            app.update_splash(term_size.height).await;
        }

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling during the splash animation (16ms = ~60fps)
        let poll_duration = if in_splash {
            std::time::Duration::from_millis(16)
        } else {
            std::time::Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key).await?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse).await?;
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
