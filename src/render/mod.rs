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


//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called once
//! the event queue has been drained. It only reads the latest
//! [`StopwatchSnapshot`](crate::model::StopwatchSnapshot) held by the app and
//! never calls into the stopwatch engine.

mod controls;
mod icons;
mod laps;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    render::{
        controls::{draw_controls, draw_time},
        icons::{ICON_DARK, ICON_LIGHT},
        laps::draw_laps,
    },
};

const MAX_WIDTH: u16 = 64;

const TITLE: &str = "Stopwatch";
const DESCRIPTION: &str = "Track your time and laps easily.";
const KEY_HELP: &str = "space start/stop \u{00B7} r reset \u{00B7} l lap \u{00B7} n name \u{00B7} d theme \u{00B7} q quit";

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: A single centred column holding the header, the time, the
///   controls, the lap-name field and the lap table.
/// * **State Mapping**: Formatting the elapsed time and every lap with the
///   shared time formatter.
/// * **Styling**: Applying the light or dark theme.
pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let theme = &app.theme;

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_colour).fg(theme.foreground_colour)),
        area,
    );

    let column = centred_column(area, MAX_WIDTH);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(column);

    draw_header(f, &chunks[1..4], app);
    draw_time(f, chunks[5], app);
    draw_controls(f, chunks[7], app);
    app.lap_input.draw(f, chunks[9], theme);
    draw_laps(f, chunks[10], app);

    f.render_widget(
        Paragraph::new(KEY_HELP)
            .style(Style::default().fg(theme.muted_colour))
            .alignment(Alignment::Center),
        chunks[11],
    );
}

fn draw_header(f: &mut Frame, rows: &[Rect], app: &App) {
    let theme = &app.theme;

    let title = Paragraph::new(Span::styled(
        TITLE,
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, rows[0]);

    let description = Paragraph::new(DESCRIPTION)
        .style(Style::default().fg(theme.muted_colour))
        .alignment(Alignment::Center);
    f.render_widget(description, rows[1]);

    // The toggle offers the mode you are not in.
    let toggle = if app.config.dark_mode {
        format!("{} Light Mode", ICON_LIGHT)
    } else {
        format!("{} Dark Mode", ICON_DARK)
    };
    let toggle = Paragraph::new(Line::from(vec![
        Span::styled(toggle, Style::default().fg(theme.foreground_colour)),
        Span::styled(" [d]", Style::default().fg(theme.muted_colour)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(toggle, rows[2]);
}

fn centred_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
