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


//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), stopwatch change
//! notifications, and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel. The stopwatch engine feeds the same channel
//!    through its observer interface.
//! 2. **Process**: Every queued event is dispatched to a handler that updates
//!    the [`App`] state or issues a stopwatch command.
//! 3. **Render**: Once the queue is drained the UI is re-drawn a single time,
//!    so a burst of ticks costs one frame.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, ops::ControlFlow, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::StopwatchSnapshot,
    render::draw,
    stopwatch::StopwatchObserver,
    util,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    StopwatchChanged(StopwatchSnapshot),

    ToggleRunning,
    Reset,
    Lap,

    ToggleDarkMode,

    Redraw,

    ExitApplication,
}

impl StopwatchObserver for Sender<AppEvent> {
    fn on_stopwatch_changed(&mut self, snapshot: &StopwatchSnapshot) {
        // The receiver only goes away when the application is exiting.
        let _ = self.send(AppEvent::StopwatchChanged(snapshot.clone()));
    }
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        let theme = app.theme;

        let mut next = Some(event);
        while let Some(event) = next.take() {
            if dispatch_event(app, event)?.is_break() {
                return Ok(());
            }
            next = app.event_rx.try_recv().ok();
        }

        if app.theme != theme {
            if let Err(e) = util::term::set_terminal_bg(app.theme.background_colour) {
                tracing::warn!(error = %e, "failed to set terminal background");
            }
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Applies a single event to the application state.
///
/// Returns [`ControlFlow::Break`] when the application should exit.
pub(crate) fn dispatch_event(app: &mut App, event: AppEvent) -> Result<ControlFlow<()>> {
    match event {
        AppEvent::ExitApplication => return Ok(ControlFlow::Break(())),
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::StopwatchChanged(snapshot) => handle_stopwatch_changed(app, snapshot),
        AppEvent::ToggleRunning => handle_toggle_running(app),
        AppEvent::Reset => handle_reset(app),
        AppEvent::Lap => handle_lap(app),
        AppEvent::ToggleDarkMode => handle_toggle_dark_mode(app),
        AppEvent::Redraw => {}
    }
    Ok(ControlFlow::Continue(()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::{ops::ControlFlow, sync::Arc};

    use crate::{App, config::AppConfig, stopwatch::clock::ManualClock};

    use super::dispatch_event;

    pub(crate) fn test_app() -> (App, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let app = App::with_clock(AppConfig::default(), clock.clone());
        (app, clock)
    }

    /// Dispatches queued events until the channel is empty, returning whether
    /// an exit was requested.
    pub(crate) fn pump(app: &mut App) -> bool {
        while let Ok(event) = app.event_rx.try_recv() {
            if let ControlFlow::Break(()) = dispatch_event(app, event).unwrap() {
                return true;
            }
        }
        false
    }
}
