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
//! This module defines the vocabulary of the calculator core (buttons,
//! operators, display modes, and the press outcome) shared between the input
//! controller, the evaluator, and the UI layer. None of these types depend on
//! the terminal; the core is fully usable (and tested) headless.

pub(crate) mod control;
pub(crate) mod eval;

/// Maximum number of characters shown on the display.
pub(crate) const LCD_LENGTH: usize = 20;

/// Fixed marker shown in place of a result when an arithmetic error occurs.
pub(crate) const ERROR_TEXT: &str = "-- error --";

/// The primary 30-key button space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Button {
    /// A decimal digit key, `0` through `9`.
    Digit(u8),
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
    Clear,
    Decimal,
    Sign,
    Square,
    SquareRoot,
    Cube,
    Reciprocal,
    Factorial,
    Backspace,
    MemoryClear,
    MemoryRecall,
    MemoryStore,
    MemoryAdd,
    BinaryMode,
    HexMode,
}

/// The secondary six-key hexadecimal keypad, only effective while the
/// hexadecimal display mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HexButton {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl HexButton {
    pub(crate) fn digit(self) -> char {
        match self {
            HexButton::A => 'a',
            HexButton::B => 'b',
            HexButton::C => 'c',
            HexButton::D => 'd',
            HexButton::E => 'e',
            HexButton::F => 'f',
        }
    }
}

/// Arithmetic operators understood by the evaluator.
///
/// The pending operator of a chained calculation is always one of the four
/// binary variants; `SquareRoot` and `Factorial` are applied immediately to
/// the current display value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    SquareRoot,
    Factorial,
}

/// Classification of the most recently processed button press.
///
/// This drives every replace-vs-append and override decision in the input
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LastAction {
    Init,
    Digit,
    Operator,
    Equals,
    Decimal,
    Other,
}

/// The numeric base the UI should use when rendering the display value.
///
/// Purely a presentation hint; the underlying arithmetic is always decimal.
/// A single enum (rather than one status field per toggle button) makes the
/// two base toggles mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum DisplayMode {
    #[default]
    Decimal,
    Binary,
    Hexadecimal,
}

impl DisplayMode {
    /// The label the toggle button should carry to offer this mode.
    pub(crate) fn label(self) -> &'static str {
        match self {
            DisplayMode::Decimal => "Dec",
            DisplayMode::Binary => "Bin",
            DisplayMode::Hexadecimal => "Hex",
        }
    }
}

/// An instruction from the core to the presentation layer, decoupled from
/// arithmetic state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UiHint {
    /// Relabel a toggle button and switch the rendering base to `mode`.
    Relabel {
        button: Button,
        label: &'static str,
        mode: DisplayMode,
    },
}

/// The outcome of a single button press: the text to show on the display and
/// zero or more UI hints.
#[derive(Debug)]
pub(crate) struct Press {
    pub(crate) display: String,
    pub(crate) hints: Vec<UiHint>,
}
