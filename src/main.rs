//! A swipeable card carousel for the terminal.
//!
//! Drag a card left or right with the mouse to move to the next or previous
//! one.  Run with `--print-config` to see the effective configuration.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Terminal};
use tokio::sync::mpsc;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
    timer::TokioScheduler,
};
use crate::core::deck::{CardSpec, Deck};
use crate::ui::{
    deck_widget::DeckWidget, indicator::IndicatorWidget, layout::AppLayout, theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Swipeable card carousel")]
struct Cli {
    /// Read configuration from this file instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Card width as a percentage of the terminal width.
    #[arg(long = "card-width")]
    card_width: Option<u16>,

    /// Print the effective configuration and exit.
    #[arg(long = "print-config")]
    print_config: bool,

    /// Write the effective configuration to the default location and exit.
    #[arg(long = "save-config")]
    save_config: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // the UI owns stdout
        .init();

    let cli = Cli::parse();

    let mut config = config::AppConfig::load(cli.config.as_deref());
    if let Some(pct) = cli.card_width {
        config.card_width_pct = pct.clamp(10, 90);
    }

    // ── config-only modes ─────────────────────────────────────
    if cli.print_config {
        print!("{}", config.serialise());
        return Ok(());
    }
    if cli.save_config {
        config.save()?;
        return Ok(());
    }

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout_handle = stdout();
    execute!(stdout_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // ── async channels ────────────────────────────────────────
    let (tx, mut events) = mpsc::unbounded_channel::<AppEvent>();
    spawn_event_reader(config.frame(), tx.clone());

    let deck = Deck::new(CardSpec::showcase())?;
    let width = terminal.size()?.width;
    let mut state = AppState::new(deck, width, TokioScheduler::new(tx), config);

    // ── event loop ────────────────────────────────────────────
    let mut dirty = true;
    loop {
        // Idle ticks with nothing easing skip the redraw.
        if dirty {
            terminal.draw(|frame| {
                let layout = AppLayout::from_area(frame.area());
                let stage = state.slider.stage();

                frame.render_widget(
                    DeckWidget {
                        deck: state.slider.deck(),
                        stage,
                    },
                    layout.deck_area,
                );

                let background = Theme::background_style(stage.background());
                frame.buffer_mut().set_style(layout.indicator_area, background);
                frame.render_widget(
                    IndicatorWidget {
                        markers: stage.markers(),
                    },
                    layout.indicator_area,
                );

                let hint = state.status_bar_hint();
                let status_text = state.status_message.as_deref().unwrap_or(&hint);
                let status = Paragraph::new(status_text).style(Theme::status_bar_style());
                frame.render_widget(status, layout.status_area);
            })?;
        }

        let Some(event) = events.recv().await else {
            break;
        };
        dirty = true;
        match event {
            AppEvent::Key(k) => handler::handle_key(&mut state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
            AppEvent::Resize(w, _) => handler::handle_resize(&mut state, w),
            AppEvent::Tick => dirty = handler::handle_tick(&mut state),
            AppEvent::Deferred(task) => handler::handle_deferred(&mut state, task),
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
