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


//! Unicode symbols for the TUI.
//!
//! This module contains the icons used on the stopwatch controls and the
//! theme toggle. These are selected for compatibility with most modern
//! terminal emulators and fonts.

pub(crate) const ICON_START: &str = "\u{25B6}";
pub(crate) const ICON_STOP: &str = "\u{25A0}";
pub(crate) const ICON_RESET: &str = "\u{21BA}";
pub(crate) const ICON_LAP: &str = "\u{2691}";

pub(crate) const ICON_LIGHT: &str = "\u{2600}";
pub(crate) const ICON_DARK: &str = "\u{263E}";
