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


//! Terminal environment and styling utilities.
//!
//! This module changes the terminal emulator's background colour with OSC
//! (Operating System Command) escape sequences, so the whole window follows
//! the light or dark theme rather than just the cells Ratatui paints.
//!
//! # Compatibility
//!
//! These functions rely on the terminal emulator supporting the specific OSC
//! codes. Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support these
//! sequences.

use std::io::{self, Write};

use ratatui::style::Color;

use crate::theme::Theme;

/// Sets the terminal background colour using an OSC 11 escape sequence.
///
/// Colours without an RGB value are left to the terminal's default.
pub(crate) fn set_terminal_bg(colour: Color) -> io::Result<()> {
    let Some(hex) = Theme::to_hex(colour) else {
        return Ok(());
    };
    write_osc(&mut io::stdout(), &format!("11;{}", hex))
}

/// Resets the terminal background to the user's own colour (OSC 111).
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    write_osc(&mut io::stdout(), "111")
}

fn write_osc(out: &mut impl Write, body: &str) -> io::Result<()> {
    write!(out, "\x1b]{}\x07", body)?;
    out.flush()
}
