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
//! OSC (Operating System Command) escape sequences for controlling the
//! terminal emulator's background color. Supported by most modern emulators;
//! unsupported ones simply ignore the sequences.

use std::io::{self, Write};

/// Sets the terminal background color via OSC 11.
///
/// `hex_color` is a CSS-style color string, e.g. `"#1e1e22"`. Flushes
/// `stdout` so the change applies immediately.
pub(crate) fn set_terminal_bg(hex_color: &str) {
    print!("\x1b]11;{}\x07", hex_color);
    io::stdout().flush().ok();
}

/// Resets the terminal background to its default color via OSC 111.
///
/// Called during cleanup to leave the user's terminal as it was found.
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    io::stdout().flush().ok();
}
