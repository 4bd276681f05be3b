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


//! Render the lap-name field.
//!
//! This module renders the current label text, the placeholder when the
//! field is empty and unfocused, and the cursor while the field has focus.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{LapInput, lap_input::PLACEHOLDER},
    theme::Theme,
};

impl LapInput {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.active() {
            theme.lap_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        let width = inner.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);

        let base = Style::default().bg(theme.input_bg);
        let paragraph = if self.input.value().is_empty() && !self.active() {
            Paragraph::new(PLACEHOLDER).style(
                base.fg(theme.muted_colour)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.input.value())
                .style(base.fg(theme.input_fg))
                .scroll((0, scroll as u16))
        };

        f.render_widget(paragraph.block(block), area);

        if self.active() {
            let cursor_x = inner.x + (self.input.visual_cursor().saturating_sub(scroll)) as u16;
            let cursor_y = inner.y;
            f.set_cursor_position((cursor_x, cursor_y));
        }
    }
}
