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

//! Input handling and event processing for the keypad.
//!
//! This module maps raw terminal keyboard events to focus navigation and
//! button presses. Direct shortcuts follow desk-calculator convention:
//! digits, the four operators, `=`/Enter for equals, `.` for the decimal
//! point, Esc for clear, and Backspace. The letters `a`–`f` press the
//! secondary keypad while hexadecimal mode is active.

use crossterm::event::{Event, KeyCode};

use crate::{
    components::{KeypadAction, KeypadView},
    model::{Button, DisplayMode, HexButton},
};

impl KeypadView {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        mode: DisplayMode,
    ) -> Option<KeypadAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            // Focus navigation
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_left();
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_right();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
                None
            }

            // Press the focused button
            KeyCode::Char(' ') => Some(KeypadAction::Press(self.focused_button())),

            // Direct shortcuts
            KeyCode::Char(digit @ '0'..='9') => {
                Some(KeypadAction::Press(Button::Digit(digit as u8 - b'0')))
            }
            KeyCode::Char('+') => Some(KeypadAction::Press(Button::Add)),
            KeyCode::Char('-') => Some(KeypadAction::Press(Button::Subtract)),
            KeyCode::Char('*') => Some(KeypadAction::Press(Button::Multiply)),
            KeyCode::Char('/') => Some(KeypadAction::Press(Button::Divide)),
            KeyCode::Char('.') => Some(KeypadAction::Press(Button::Decimal)),
            KeyCode::Char('=') | KeyCode::Enter => Some(KeypadAction::Press(Button::Equals)),
            KeyCode::Esc => Some(KeypadAction::Press(Button::Clear)),
            KeyCode::Backspace => Some(KeypadAction::Press(Button::Backspace)),

            // Secondary keypad, only reachable in hexadecimal mode
            KeyCode::Char(letter @ 'a'..='f')
                if self.hex_enabled && mode == DisplayMode::Hexadecimal =>
            {
                let hex = match letter {
                    'a' => HexButton::A,
                    'b' => HexButton::B,
                    'c' => HexButton::C,
                    'd' => HexButton::D,
                    'e' => HexButton::E,
                    _ => HexButton::F,
                };
                Some(KeypadAction::PressHex(hex))
            }

            _ => None,
        }
    }
}
