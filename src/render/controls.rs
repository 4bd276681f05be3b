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


//! Render the elapsed time and the stopwatch controls.
//!
//! The controls bar always reflects the current run state: the first button
//! reads Start or Stop, and the Lap button is dimmed whenever the stopwatch
//! is not running.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    render::icons::{ICON_LAP, ICON_RESET, ICON_START, ICON_STOP},
    util::format::format_time,
};

/// Renders the formatted elapsed time.
pub(crate) fn draw_time(f: &mut Frame, area: Rect, app: &App) {
    let time = Paragraph::new(Line::from(Span::styled(
        format_time(app.snapshot.elapsed_ms),
        Style::default()
            .fg(app.theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    f.render_widget(time, area);
}

/// Renders the start/stop, reset and lap buttons.
pub(crate) fn draw_controls(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let running = app.snapshot.run_state.is_running();

    let (toggle_label, toggle_colour) = if running {
        (format!(" {} Stop ", ICON_STOP), theme.stop_colour)
    } else {
        (format!(" {} Start ", ICON_START), theme.start_colour)
    };

    let lap_style = if running {
        button_style(theme.lap_colour)
    } else {
        Style::default()
            .fg(theme.muted_colour)
            .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
    };

    let controls = Line::from(vec![
        Span::styled(toggle_label, button_style(toggle_colour)),
        Span::raw("  "),
        Span::styled(format!(" {} Reset ", ICON_RESET), button_style(theme.reset_colour)),
        Span::raw("  "),
        Span::styled(format!(" {} Lap ", ICON_LAP), lap_style),
    ]);

    f.render_widget(Paragraph::new(controls).alignment(Alignment::Center), area);
}

fn button_style(colour: Color) -> Style {
    Style::default()
        .fg(Color::White)
        .bg(colour)
        .add_modifier(Modifier::BOLD)
}
