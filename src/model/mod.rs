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

//! Domain models and core data structures.
//!
//! This module defines the values the stopwatch engine exposes to the rest of
//! the application: the run state, captured laps, and the snapshot handed to
//! observers on every change.

use std::sync::Arc;

/// Whether the stopwatch is accumulating time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum RunState {
    #[default]
    Stopped,
    Running,
}

impl RunState {
    pub(crate) fn is_running(self) -> bool {
        matches!(self, RunState::Running)
    }
}

/// A labelled snapshot of elapsed time, never changed once captured.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct LapRecord {
    pub(crate) captured_elapsed: u64,
    pub(crate) label: String,
}

impl LapRecord {
    pub(crate) fn new(captured_elapsed: u64, label: impl Into<String>) -> Self {
        Self {
            captured_elapsed,
            label: label.into(),
        }
    }

    /// The text to show for this lap, falling back to its 1-based position
    /// when no label was captured.
    pub(crate) fn display_label(&self, position: usize) -> String {
        if self.label.is_empty() {
            format!("Lap {}", position)
        } else {
            self.label.clone()
        }
    }
}

/// Everything the stopwatch exposes, read under a single lock.
///
/// Laps are shared with the engine, so a snapshot taken on every tick does
/// not copy the lap list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct StopwatchSnapshot {
    pub(crate) run_state: RunState,
    pub(crate) elapsed_ms: u64,
    pub(crate) laps: Arc<Vec<LapRecord>>,
    pub(crate) pending_lap_label: String,
}
