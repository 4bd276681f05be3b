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


//! Visual styling and color configuration for the TUI.
//!
//! This module defines the light and dark palettes and provides utilities for
//! converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) foreground_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_colour: Color,

    pub(crate) start_colour: Color,
    pub(crate) stop_colour: Color,
    pub(crate) reset_colour: Color,
    pub(crate) lap_colour: Color,

    pub(crate) input_fg: Color,
    pub(crate) input_bg: Color,

    pub(crate) table_header_bg: Color,
    pub(crate) table_label_fg: Color,
    pub(crate) table_time_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub(crate) const fn light() -> Self {
        Self {
            background_colour: Color::Rgb(243, 244, 246),
            foreground_colour: Color::Rgb(17, 24, 39),
            accent_colour: Color::Rgb(17, 24, 39),
            border_colour: Color::Rgb(156, 163, 175),
            muted_colour: Color::Rgb(107, 114, 128),

            start_colour: Color::Rgb(34, 197, 94),
            stop_colour: Color::Rgb(220, 38, 38),
            reset_colour: Color::Rgb(107, 114, 128),
            lap_colour: Color::Rgb(96, 165, 250),

            input_fg: Color::Rgb(107, 114, 128),
            input_bg: Color::Rgb(255, 255, 255),

            table_header_bg: Color::Rgb(107, 114, 128),
            table_label_fg: Color::Rgb(17, 24, 39),
            table_time_fg: Color::Rgb(55, 65, 81),
        }
    }

    pub(crate) const fn dark() -> Self {
        Self {
            background_colour: Color::Rgb(31, 41, 55),
            foreground_colour: Color::Rgb(255, 255, 255),
            accent_colour: Color::Rgb(255, 255, 255),
            border_colour: Color::Rgb(75, 85, 99),
            muted_colour: Color::Rgb(156, 163, 175),

            start_colour: Color::Rgb(34, 197, 94),
            stop_colour: Color::Rgb(220, 38, 38),
            reset_colour: Color::Rgb(107, 114, 128),
            lap_colour: Color::Rgb(96, 165, 250),

            input_fg: Color::Rgb(209, 213, 219),
            input_bg: Color::Rgb(17, 24, 39),

            table_header_bg: Color::Rgb(75, 85, 99),
            table_label_fg: Color::Rgb(255, 255, 255),
            table_time_fg: Color::Rgb(209, 213, 219),
        }
    }

    pub(crate) const fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Non-RGB colours have no hex form and yield
    /// `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
