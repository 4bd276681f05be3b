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


//! UI rendering logic for the lap table.
//!
//! Laps are listed oldest first. A lap without a label is shown by its
//! 1-based position, and the table scrolls so the newest lap stays visible.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::{App, util::format::format_time};

const EMPTY_TEXT: &str = "No lap times recorded yet.";

pub(crate) fn draw_laps(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let laps = &app.snapshot.laps;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(Line::from(" Lap Times ").style(
            Style::default()
                .fg(theme.foreground_colour)
                .bg(theme.table_header_bg)
                .add_modifier(Modifier::BOLD),
        ));

    if laps.is_empty() {
        let empty = Paragraph::new(EMPTY_TEXT)
            .style(Style::default().fg(theme.muted_colour))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let rows = laps.iter().enumerate().map(|(i, lap)| {
        Row::new(vec![
            Cell::from(
                Line::from(lap.display_label(i + 1))
                    .style(Style::default().fg(theme.table_label_fg).add_modifier(Modifier::BOLD)),
            ),
            Cell::from(
                Line::from(format_time(lap.captured_elapsed))
                    .style(Style::default().fg(theme.table_time_fg))
                    .alignment(Alignment::Right),
            ),
        ])
    });

    let table = Table::new(rows, [Constraint::Min(0), Constraint::Length(12)])
        .header(
            Row::new(vec![
                Cell::from("Lap"),
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
            ])
            .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
            .bottom_margin(1),
        )
        .block(block);

    // Border, header and its margin take four rows.
    let visible = area.height.saturating_sub(4) as usize;
    let mut state = TableState::default().with_offset(laps.len().saturating_sub(visible));

    f.render_stateful_widget(table, area, &mut state);
}
