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


use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{App, components::LapInputOutcome, events::AppEvent};

/// Maps keyboard input to stopwatch commands and UI actions.
///
/// Keys go to the lap-name field first while it has focus. Edits are stored
/// in the stopwatch immediately rather than queued, so a tick snapshot
/// already waiting in the channel can never carry an older label than the
/// field. Otherwise the global bindings apply:
///
/// * **Stopwatch**: `space` start/stop, `r` reset, `l` lap.
/// * **Lap name**: `n` or `Tab` focuses the lap-name field.
/// * **Display**: `d` toggles dark mode.
/// * **Application Control**: `q` quits.
///
/// # Errors
///
/// Returns an error if an event cannot be sent to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    match app.lap_input.handle_event(&event, &app.event_tx)? {
        LapInputOutcome::Ignored => process_global_key_event(app, key),
        LapInputOutcome::Consumed => Ok(()),
        LapInputOutcome::LabelChanged => {
            app.stopwatch
                .set_pending_lap_label(app.lap_input.input.value());
            Ok(())
        }
    }
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char(' ') => app.event_tx.send(AppEvent::ToggleRunning)?,
        KeyCode::Char('r') => app.event_tx.send(AppEvent::Reset)?,
        KeyCode::Char('l') => app.event_tx.send(AppEvent::Lap)?,

        KeyCode::Char('n') | KeyCode::Tab => app.lap_input.activate(),

        KeyCode::Char('d') => app.event_tx.send(AppEvent::ToggleDarkMode)?,

        _ => {}
    }

    Ok(())
}
