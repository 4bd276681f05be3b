// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.


//! # Stopwatch TUI.
//!
//! A terminal stopwatch with 10ms resolution and named laps.
//!
//! This application coordinates a TUI frontend built with `ratatui` and the
//! stopwatch engine in [`stopwatch`].
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * The **Clock Thread** ticks the stopwatch every 10ms while it is running.
//!   The engine reports each change back to the main thread as an event.
//! * The **Input Thread** captures key presses and forwards them to the event
//!   loop.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! with the main thread is handled via `std::sync::mpsc` channels.

mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod stopwatch;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
};

use crate::{
    components::LapInput,
    config::AppConfig,
    events::{AppEvent, process_events},
    model::StopwatchSnapshot,
    stopwatch::{
        Stopwatch,
        clock::{Clock, ThreadClock},
    },
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,
    pub config_changed: bool,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub stopwatch: Stopwatch,
    /// The latest state reported by the stopwatch, drawn on every frame.
    pub snapshot: StopwatchSnapshot,

    pub lap_input: LapInput,
}

impl App {
    /// Create a new instance of application state driven by a real clock.
    pub fn new(config: AppConfig) -> Self {
        Self::with_clock(config, Arc::new(ThreadClock::new()))
    }

    /// Create a new instance of application state with the given tick source.
    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let stopwatch = Stopwatch::new(clock);
        stopwatch.subscribe(event_tx.clone());
        let snapshot = stopwatch.snapshot();

        Self {
            theme: Theme::for_mode(config.dark_mode),
            config,
            config_changed: false,
            event_tx,
            event_rx,
            stopwatch,
            snapshot,
            lap_input: LapInput::new(),
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts file logging, manages the terminal
/// lifecycle, and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    // Held until exit so buffered log lines are flushed.
    let _log_guard = logging::init_logging(&config);

    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    app.stopwatch.stop();

    if app.config_changed {
        if let Err(e) = config::save_config(&app.config) {
            tracing::warn!(error = %e, "failed to save configuration");
        }
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the current theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin outline in the terminal's own colour
    util::term::set_terminal_bg(app.theme.background_colour)
        .context("Failed to set terminal background")?;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input thread and enters the main event loop.
///
/// The clock thread is not started here: the stopwatch subscribes to its
/// clock when it is started and cancels the subscription when it stops.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::Builder::new()
        .name("stopwatch-input".to_string())
        .spawn(move || {
            loop {
                let event = match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                    Ok(Event::Resize(_, _)) => AppEvent::Redraw,
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::error!(error = %e, "failed to read terminal event");
                        break;
                    }
                };
                if tx_input.send(event).is_err() {
                    break;
                }
            }
        })
        .context("Failed to spawn input thread")?;

    // Initial trigger to draw the first frame
    app.event_tx.send(AppEvent::Redraw)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
