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

//! Interactive keypad widget and state management.
//!
//! This module provides the on-screen button grid: a fixed 6×5 layout of the
//! primary keys plus an optional hexadecimal row. It owns the presentation
//! state of the buttons (labels, focus cursor) and translates keyboard input
//! into button presses for the calculator core; it never touches arithmetic
//! state itself.

mod event;
mod render;

use crate::model::{Button, HexButton, UiHint};

pub(crate) const GRID_ROWS: usize = 6;
pub(crate) const GRID_COLS: usize = 5;

/// Button at each grid position, row by row, matching the on-screen layout.
pub(crate) const BUTTON_GRID: [Button; GRID_ROWS * GRID_COLS] = [
    Button::Digit(7), Button::Digit(8), Button::Digit(9), Button::Divide,   Button::Clear,
    Button::Digit(4), Button::Digit(5), Button::Digit(6), Button::Multiply, Button::Square,
    Button::Digit(1), Button::Digit(2), Button::Digit(3), Button::Subtract, Button::Reciprocal,
    Button::Digit(0), Button::Sign,     Button::Decimal,  Button::Add,      Button::Equals,
    Button::MemoryClear, Button::MemoryRecall, Button::MemoryStore, Button::MemoryAdd, Button::Backspace,
    Button::SquareRoot,  Button::Factorial,    Button::Cube,        Button::BinaryMode, Button::HexMode,
];

/// Initial button captions, aligned with [`BUTTON_GRID`].
const BUTTON_LABELS: [&str; GRID_ROWS * GRID_COLS] = [
    "7",    "8",   "9",   "/",   "C",
    "4",    "5",   "6",   "*",   "Sq",
    "1",    "2",   "3",   "-",   "1/x",
    "0",    "+/-", ".",   "+",   "=",
    "MC",   "MR",  "MS",  "M+",  "Bksp",
    "Sqrt", "!x",  "x^3", "Bin", "Hex",
];

/// The secondary keypad row, shown when enabled in the configuration.
pub(crate) const HEX_ROW: [HexButton; 6] = [
    HexButton::A,
    HexButton::B,
    HexButton::C,
    HexButton::D,
    HexButton::E,
    HexButton::F,
];

/// A resolved keypad interaction, ready to hand to the control unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeypadAction {
    Press(Button),
    PressHex(HexButton),
}

pub(crate) struct KeypadView {
    labels: Vec<String>,
    cursor: usize,
    pub(crate) hex_enabled: bool,
}

impl KeypadView {
    pub(crate) fn new(hex_enabled: bool) -> Self {
        Self {
            labels: BUTTON_LABELS.iter().map(|label| label.to_string()).collect(),
            cursor: 0,
            hex_enabled,
        }
    }

    /// Applies a presentation hint from the core, relabelling the affected
    /// toggle button.
    pub(crate) fn apply_hint(&mut self, hint: &UiHint) {
        match hint {
            UiHint::Relabel { button, label, .. } => {
                if let Some(index) = Self::index_of(*button) {
                    self.labels[index] = (*label).to_string();
                }
            }
        }
    }

    pub(crate) fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// The button currently under the focus cursor.
    pub(crate) fn focused_button(&self) -> Button {
        BUTTON_GRID[self.cursor]
    }

    fn index_of(button: Button) -> Option<usize> {
        BUTTON_GRID.iter().position(|candidate| *candidate == button)
    }

    fn move_left(&mut self) {
        if self.cursor % GRID_COLS > 0 {
            self.cursor -= 1;
        }
    }

    fn move_right(&mut self) {
        if self.cursor % GRID_COLS < GRID_COLS - 1 {
            self.cursor += 1;
        }
    }

    fn move_up(&mut self) {
        if self.cursor >= GRID_COLS {
            self.cursor -= GRID_COLS;
        }
    }

    fn move_down(&mut self) {
        if self.cursor + GRID_COLS < BUTTON_GRID.len() {
            self.cursor += GRID_COLS;
        }
    }
}
