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

//! Numeric formatting for the calculator display.

use crate::model::{DisplayMode, LCD_LENGTH};

/// Formats a result value as a minimal decimal string.
///
/// The plain shortest round-trip form is used whenever it fits the display;
/// values too wide for the display fall back to a six-digit scientific form.
///
/// # Examples
///
/// ```
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(3.5), "3.5");
/// ```
pub(crate) fn format_number(value: f64) -> String {
    let plain = format!("{value}");
    if plain.len() <= LCD_LENGTH {
        plain
    } else {
        format!("{value:.6e}")
    }
}

/// Re-renders display text in the base the UI should show.
///
/// Only the integer part of the value is rendered in binary or hexadecimal,
/// with a leading sign for negative values. Text that does not parse as a
/// number (such as the error marker) passes through unchanged, as does
/// anything non-finite.
pub(crate) fn format_in_base(text: &str, mode: DisplayMode) -> String {
    if mode == DisplayMode::Decimal {
        return text.to_string();
    }

    let Ok(value) = text.parse::<f64>() else {
        return text.to_string();
    };
    if !value.is_finite() {
        return text.to_string();
    }

    let magnitude = value.abs().trunc() as u64;
    let digits = if mode == DisplayMode::Binary {
        format!("{magnitude:b}")
    } else {
        format!("{magnitude:x}")
    };

    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(120.0), "120");
    }

    #[test]
    fn fractions_use_the_shortest_form() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn wide_values_fall_back_to_scientific() {
        let formatted = format_number(1e25);
        assert!(formatted.len() <= LCD_LENGTH);
        assert_eq!(formatted, "1.000000e25");
    }

    #[test]
    fn decimal_mode_passes_text_through() {
        assert_eq!(format_in_base("3.5", DisplayMode::Decimal), "3.5");
    }

    #[test]
    fn binary_mode_renders_the_integer_part() {
        assert_eq!(format_in_base("5", DisplayMode::Binary), "101");
        assert_eq!(format_in_base("5.9", DisplayMode::Binary), "101");
    }

    #[test]
    fn hex_mode_renders_lowercase() {
        assert_eq!(format_in_base("255", DisplayMode::Hexadecimal), "ff");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(format_in_base("-5", DisplayMode::Binary), "-101");
    }

    #[test]
    fn non_numeric_text_passes_through() {
        assert_eq!(
            format_in_base("-- error --", DisplayMode::Binary),
            "-- error --"
        );
    }
}
