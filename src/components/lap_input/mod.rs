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


//! Lap-name text field.
//!
//! This module implements the text input the user types the next lap's label
//! into. The field mirrors the engine's pending lap label: every edit is
//! stored in the engine as soon as it is made, and whenever the engine's
//! label no longer matches (after a lap or a reset cleared it) the field is
//! replaced to match.

mod event;
mod render;

pub(crate) use event::LapInputOutcome;

use tui_input::Input;

pub(crate) const PLACEHOLDER: &str = "Lap Name";

pub(crate) struct LapInput {
    active: bool,
    pub(crate) input: Input,
}

impl LapInput {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Gives the field keyboard focus.
    pub(crate) fn activate(&mut self) {
        self.active = true;
    }

    /// Brings the field in line with the engine's current pending label.
    ///
    /// Pass the live value, not one carried by a queued snapshot: a snapshot
    /// taken before the latest keystroke would wipe it.
    pub(crate) fn sync(&mut self, pending_lap_label: &str) {
        if self.input.value() != pending_lap_label {
            self.input = Input::new(pending_lap_label.to_string());
        }
    }
}
