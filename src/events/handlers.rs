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


use crate::{App, model::StopwatchSnapshot, theme::Theme};

pub(super) fn handle_stopwatch_changed(app: &mut App, snapshot: StopwatchSnapshot) {
    // The snapshot may predate keystrokes already applied to the engine.
    app.lap_input.sync(&app.stopwatch.pending_lap_label());
    app.snapshot = snapshot;
}

pub(super) fn handle_toggle_running(app: &mut App) {
    app.stopwatch.toggle();
}

pub(super) fn handle_reset(app: &mut App) {
    app.stopwatch.reset();
}

pub(super) fn handle_lap(app: &mut App) {
    // No-op unless running with a non-blank label.
    app.stopwatch.lap();
}

pub(super) fn handle_toggle_dark_mode(app: &mut App) {
    app.config.dark_mode = !app.config.dark_mode;
    app.config_changed = true;
    app.theme = Theme::for_mode(app.config.dark_mode);
    tracing::debug!(dark_mode = app.config.dark_mode, "theme changed");
}
