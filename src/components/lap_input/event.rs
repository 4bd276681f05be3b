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


//! Keyboard handling for the lap-name field.
//!
//! While the field has focus it consumes every key. Edits are reported back
//! to the caller as [`LapInputOutcome::LabelChanged`] so the new text reaches
//! the stopwatch before the next queued event is processed. `Enter` requests
//! a lap and `Esc` gives focus back to the global key bindings.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{components::LapInput, events::AppEvent};

/// What the field did with a terminal event.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum LapInputOutcome {
    /// The field does not have focus; the event is still unhandled.
    Ignored,
    Consumed,
    /// The text changed and must be stored as the pending lap label.
    LabelChanged,
}

impl LapInput {
    /// Handles a terminal event.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        event_tx: &Sender<AppEvent>,
    ) -> Result<LapInputOutcome> {
        if !self.active {
            return Ok(LapInputOutcome::Ignored);
        }

        let Event::Key(key_event) = event else {
            return Ok(LapInputOutcome::Ignored);
        };

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
            }

            KeyCode::Enter => {
                self.active = false;
                event_tx.send(AppEvent::Lap)?;
            }

            _ => {
                // Delegate everything else to the managed input component.
                if let Some(changed) = self.input.handle_event(event) {
                    if changed.value {
                        return Ok(LapInputOutcome::LabelChanged);
                    }
                }
            }
        }

        Ok(LapInputOutcome::Consumed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn inactive_field_ignores_keys() {
        let (tx, rx) = mpsc::channel();
        let mut lap_input = LapInput::new();

        assert_eq!(
            lap_input.handle_event(&key(KeyCode::Char('a')), &tx).unwrap(),
            LapInputOutcome::Ignored
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn typing_reports_each_edit() {
        let (tx, rx) = mpsc::channel();
        let mut lap_input = LapInput::new();
        lap_input.activate();

        let mut values = Vec::new();
        for code in [KeyCode::Char('h'), KeyCode::Char('i'), KeyCode::Backspace] {
            let outcome = lap_input.handle_event(&key(code), &tx).unwrap();
            assert_eq!(outcome, LapInputOutcome::LabelChanged);
            values.push(lap_input.input.value().to_string());
        }

        assert_eq!(values, vec!["h", "hi", "h"]);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn cursor_movement_is_consumed_without_edit() {
        let (tx, _rx) = mpsc::channel();
        let mut lap_input = LapInput::new();
        lap_input.activate();
        lap_input.handle_event(&key(KeyCode::Char('x')), &tx).unwrap();

        assert_eq!(
            lap_input.handle_event(&key(KeyCode::Left), &tx).unwrap(),
            LapInputOutcome::Consumed
        );
        assert_eq!(lap_input.input.value(), "x");
    }

    #[test]
    fn enter_requests_lap_and_releases_focus() {
        let (tx, rx) = mpsc::channel();
        let mut lap_input = LapInput::new();
        lap_input.activate();

        assert_eq!(
            lap_input.handle_event(&key(KeyCode::Enter), &tx).unwrap(),
            LapInputOutcome::Consumed
        );
        assert!(!lap_input.active());
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Lap)));
    }

    #[test]
    fn escape_releases_focus_without_events() {
        let (tx, rx) = mpsc::channel();
        let mut lap_input = LapInput::new();
        lap_input.activate();

        assert_eq!(
            lap_input.handle_event(&key(KeyCode::Esc), &tx).unwrap(),
            LapInputOutcome::Consumed
        );
        assert!(!lap_input.active());
        assert!(rx.try_recv().is_err());
    }
}
