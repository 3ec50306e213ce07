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

//! Calculator input controller.
//!
//! This module implements the state machine at the heart of the calculator:
//! it consumes one button press at a time and maintains the display text, the
//! pending operand/operator of a chained calculation, the memory register,
//! and the display base mode.
//!
//! Every press resolves synchronously to a [`Press`]: the new display text
//! plus any [`UiHint`]s for the presentation layer. The contract is total;
//! arithmetic errors surface as the fixed error marker and a state reset,
//! never as a fault to the caller.

use crate::model::{
    Button, DisplayMode, HexButton, LastAction, Operator, Press, UiHint, ERROR_TEXT, LCD_LENGTH,
    eval::{ArithmeticError, evaluate},
};

/// The calculator control unit.
///
/// All state is owned here and mutated only through [`Control::press`] and
/// [`Control::press_hex`]. Strictly single-event-at-a-time: callers that
/// share a `Control` across threads must serialize access externally.
pub(crate) struct Control {
    /// Display text; never empty, at most [`LCD_LENGTH`] characters.
    text: String,
    /// Pending first operand of a chained calculation; `"0"` = none pending.
    operand: String,
    /// Memory register; survives Clear, reset only by memory-clear.
    memory: String,
    /// Pending binary operator.
    op: Option<Operator>,
    /// Classification of the most recent press.
    last: LastAction,
    /// Whether the display text currently contains a decimal point.
    decimal_present: bool,
    /// Whether the display text currently carries a negative sign.
    negative_present: bool,
    /// Active display base; presentation only.
    mode: DisplayMode,
    /// Number of characters currently on the display.
    digits: usize,
}

impl Control {
    pub(crate) fn new() -> Self {
        Self {
            text: "0".to_string(),
            operand: "0".to_string(),
            memory: "0".to_string(),
            op: None,
            last: LastAction::Init,
            decimal_present: false,
            negative_present: false,
            mode: DisplayMode::Decimal,
            digits: 1,
        }
    }

    /// The active display base mode.
    pub(crate) fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Whether the memory register holds a numerically non-zero value.
    pub(crate) fn memory_active(&self) -> bool {
        numeric(&self.memory) != 0.0
    }

    /// Handles a single button press and returns the new display state.
    pub(crate) fn press(&mut self, button: Button) -> Press {
        match button {
            Button::Digit(digit) => self.enter_digit(digit),

            Button::Decimal => self.enter_decimal(),
            Button::Sign => self.toggle_sign(),
            Button::Backspace => self.backspace(),
            Button::Clear => self.clear(),

            Button::Square => self.apply_square(),
            Button::SquareRoot => self.apply_square_root(),
            Button::Cube => self.apply_cube(),
            Button::Reciprocal => self.apply_reciprocal(),
            Button::Factorial => self.apply_factorial(),

            Button::Add => self.binary_operator(Operator::Add),
            Button::Subtract => self.binary_operator(Operator::Subtract),
            Button::Multiply => self.binary_operator(Operator::Multiply),
            Button::Divide => self.binary_operator(Operator::Divide),
            Button::Equals => self.equals(),

            Button::MemoryClear => self.memory_clear(),
            Button::MemoryRecall => self.memory_recall(),
            Button::MemoryStore => self.memory_store(),
            Button::MemoryAdd => self.memory_add(),

            Button::BinaryMode => self.toggle_base(DisplayMode::Binary, Button::BinaryMode),
            Button::HexMode => self.toggle_base(DisplayMode::Hexadecimal, Button::HexMode),
        }
    }

    /// Handles a press on the secondary hexadecimal keypad.
    ///
    /// A no-op unless the hexadecimal display mode is active. Hex digits
    /// follow the same replace-vs-append rules as decimal digits, with the
    /// literal `"0"` standing in for the empty display.
    pub(crate) fn press_hex(&mut self, button: HexButton) -> Press {
        if self.mode != DisplayMode::Hexadecimal {
            return self.display();
        }

        let digit = button.digit();

        if self.text == "0" {
            self.text = digit.to_string();
            self.refresh();
        } else if matches!(self.last, LastAction::Operator | LastAction::Equals) {
            self.text = digit.to_string();
            self.refresh();
        } else if self.digits < LCD_LENGTH {
            self.text.push(digit);
            self.refresh();
        }
        self.last = LastAction::Digit;

        self.display()
    }

    fn enter_digit(&mut self, digit: u8) -> Press {
        // Out-of-range ids in the digit space are ignored.
        let Some(digit) = char::from_digit(u32::from(digit), 10) else {
            return self.display();
        };

        if self.value() == 0.0 {
            if self.last == LastAction::Decimal {
                // The point was just entered; keep it and start "0.<digit>"
                self.text = format!("0.{digit}");
            } else {
                // Start a fresh number
                self.text = digit.to_string();
            }
            self.refresh();
        } else if matches!(self.last, LastAction::Operator | LastAction::Equals) {
            // Non-zero value on display, but a new operand begins here
            self.text = digit.to_string();
            self.refresh();
        } else if self.digits < LCD_LENGTH {
            self.text.push(digit);
            self.refresh();
        }
        self.last = LastAction::Digit;

        self.display()
    }

    fn enter_decimal(&mut self) -> Press {
        if !self.decimal_present {
            if self.value() == 0.0 || self.last == LastAction::Operator {
                self.text = "0.".to_string();
            } else {
                self.text.push('.');
            }
            self.refresh();
            self.last = LastAction::Decimal;
        }

        self.display()
    }

    fn toggle_sign(&mut self) -> Press {
        if !self.negative_present {
            if self.digits <= LCD_LENGTH {
                self.text.insert(0, '-');
            }
        } else {
            self.text.remove(0);
            if self.text.is_empty() {
                self.text = "0".to_string();
            }
        }
        self.refresh();

        self.display()
    }

    fn backspace(&mut self) -> Press {
        if self.text.len() > 1 {
            self.text.pop();
        } else {
            self.text = "0".to_string();
        }
        self.refresh();
        self.last = LastAction::Other;

        self.display()
    }

    fn clear(&mut self) -> Press {
        // Everything except the memory register and the base mode
        self.text = "0".to_string();
        self.operand = "0".to_string();
        self.op = None;
        self.last = LastAction::Init;
        self.refresh();

        self.display()
    }

    fn apply_square(&mut self) -> Press {
        if self.value() == 0.0 {
            return self.display();
        }
        self.apply_unary(|text| evaluate(text, text, Operator::Multiply))
    }

    fn apply_square_root(&mut self) -> Press {
        if self.value() == 0.0 {
            return self.display();
        }
        self.apply_unary(|text| evaluate(text, text, Operator::SquareRoot))
    }

    fn apply_cube(&mut self) -> Press {
        if self.value() == 0.0 {
            return self.display();
        }
        // Cube is two chained multiplications
        self.apply_unary(|text| {
            let squared = evaluate(text, text, Operator::Multiply)?;
            evaluate(&squared, text, Operator::Multiply)
        })
    }

    fn apply_reciprocal(&mut self) -> Press {
        if self.value() == 0.0 {
            // 1/0 is a divide-by-zero
            return self.show_error();
        }
        self.apply_unary(|text| evaluate("1", text, Operator::Divide))
    }

    fn apply_factorial(&mut self) -> Press {
        // Unlike the other unary operators, factorial acts on zero: 0! = 1
        self.apply_unary(|text| evaluate(text, text, Operator::Factorial))
    }

    fn apply_unary(
        &mut self,
        eval: impl FnOnce(&str) -> Result<String, ArithmeticError>,
    ) -> Press {
        match eval(&self.text) {
            Ok(result) => {
                self.text = result;
                self.refresh();
                self.last = LastAction::Operator;
                self.display()
            }
            Err(_) => self.show_error(),
        }
    }

    fn binary_operator(&mut self, new_op: Operator) -> Press {
        if self.value() == 0.0 || self.last == LastAction::Operator {
            // Operator override: the newest operator wins, no evaluation
            self.op = Some(new_op);
            self.last = LastAction::Operator;
            return self.display();
        }

        let chain = match self.op {
            Some(op)
                if numeric(&self.operand) != 0.0 && self.last != LastAction::Equals =>
            {
                Some(op)
            }
            _ => None,
        };

        match chain {
            Some(op) => {
                // A pending operand exists: evaluate it now, the result
                // becomes both the display and the next pending operand
                match evaluate(&self.operand, &self.text, op) {
                    Ok(result) => {
                        self.operand = result.clone();
                        self.text = result;
                        self.refresh();
                    }
                    Err(_) => return self.show_error(),
                }
            }
            None => {
                // First operand of a chain
                self.operand = self.text.clone();
            }
        }

        self.op = Some(new_op);
        self.last = LastAction::Operator;
        // The next operand may need its own decimal point
        self.decimal_present = false;

        self.display()
    }

    fn equals(&mut self) -> Press {
        if self.value() == 0.0
            || matches!(self.last, LastAction::Operator | LastAction::Equals)
        {
            self.last = LastAction::Equals;
            return self.display();
        }

        let mut result = self.operand.clone();
        if numeric(&result) != 0.0 {
            result = match self.op {
                Some(op) => match evaluate(&self.operand, &self.text, op) {
                    Ok(result) => result,
                    Err(_) => return self.show_error(),
                },
                None => "0".to_string(),
            };
        }

        // A zero result leaves the display alone; the pending operand is
        // also left untouched
        if numeric(&result) != 0.0 {
            self.op = None;
            self.text = result;
            self.refresh();
        }
        self.last = LastAction::Equals;
        self.decimal_present = false;

        self.display()
    }

    fn memory_clear(&mut self) -> Press {
        self.memory = "0".to_string();
        self.display()
    }

    fn memory_recall(&mut self) -> Press {
        if numeric(&self.memory) == 0.0 {
            self.text = "0".to_string();
        } else {
            self.text = self.memory.clone();
        }
        self.refresh();

        self.display()
    }

    fn memory_store(&mut self) -> Press {
        if self.value() == 0.0 {
            self.memory = "0".to_string();
        } else {
            self.memory = self.text.clone();
        }
        // The next value starts anew
        self.text = "0".to_string();
        self.refresh();
        self.last = LastAction::Init;

        self.display()
    }

    fn memory_add(&mut self) -> Press {
        if self.value() == 0.0 {
            return self.display();
        }
        if numeric(&self.memory) == 0.0 {
            self.memory = self.text.clone();
        } else {
            match evaluate(&self.text, &self.memory, Operator::Add) {
                Ok(sum) => self.memory = sum,
                Err(_) => return self.show_error(),
            }
        }

        self.display()
    }

    fn toggle_base(&mut self, target: DisplayMode, button: Button) -> Press {
        let mut hints = Vec::new();

        if self.mode == DisplayMode::Decimal {
            // Entering the target base; the button now offers the way back
            self.mode = target;
            hints.push(UiHint::Relabel {
                button,
                label: DisplayMode::Decimal.label(),
                mode: target,
            });
        } else if self.mode == target {
            self.mode = DisplayMode::Decimal;
            hints.push(UiHint::Relabel {
                button,
                label: target.label(),
                mode: DisplayMode::Decimal,
            });
        }
        // The other base being active is a no-op: the toggles are mutually
        // exclusive and each only cycles against decimal

        Press {
            display: self.text.clone(),
            hints,
        }
    }

    /// Numeric value of the display text; unparseable text counts as zero.
    fn value(&self) -> f64 {
        numeric(&self.text)
    }

    /// Recomputes the cached display-derived state. Must run after every
    /// mutation of the display text.
    fn refresh(&mut self) {
        self.decimal_present = self.text.contains('.');
        self.negative_present = self.text.contains('-');
        self.digits = self.text.len();
    }

    fn display(&self) -> Press {
        Press {
            display: self.text.clone(),
            hints: Vec::new(),
        }
    }

    /// Enters the global error state: the press shows the fixed marker while
    /// every component except the memory register resets to initial values.
    fn show_error(&mut self) -> Press {
        self.text = "0".to_string();
        self.operand = "0".to_string();
        self.op = None;
        self.last = LastAction::Init;
        self.decimal_present = false;
        self.negative_present = false;
        self.digits = 1;

        Press {
            display: ERROR_TEXT.to_string(),
            hints: Vec::new(),
        }
    }
}

fn numeric(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(control: &mut Control, buttons: &[Button]) -> String {
        let mut display = String::from("0");
        for button in buttons {
            display = control.press(*button).display;
        }
        display
    }

    fn digits(text: &str) -> Vec<Button> {
        text.chars()
            .map(|c| match c {
                '.' => Button::Decimal,
                _ => Button::Digit(c as u8 - b'0'),
            })
            .collect()
    }

    #[test]
    fn digits_concatenate() {
        let mut control = Control::new();
        assert_eq!(press_all(&mut control, &digits("123")), "123");
    }

    #[test]
    fn leading_zero_is_replaced() {
        let mut control = Control::new();
        assert_eq!(press_all(&mut control, &digits("007")), "7");
    }

    #[test]
    fn digit_after_operator_starts_a_new_operand() {
        let mut control = Control::new();
        press_all(&mut control, &digits("12"));
        control.press(Button::Add);
        assert_eq!(control.press(Button::Digit(3)).display, "3");
    }

    #[test]
    fn digit_after_equals_starts_a_new_number() {
        let mut control = Control::new();
        press_all(&mut control, &[Button::Digit(2), Button::Add, Button::Digit(3), Button::Equals]);
        assert_eq!(control.press(Button::Digit(9)).display, "9");
    }

    #[test]
    fn entry_stops_at_the_display_width() {
        let mut control = Control::new();
        let display = press_all(&mut control, &digits("123456789012345678901234"));
        assert_eq!(display.len(), LCD_LENGTH);
        assert_eq!(display, "12345678901234567890");
    }

    #[test]
    fn decimal_point_on_zero_synthesizes_a_leading_zero() {
        let mut control = Control::new();
        assert_eq!(press_all(&mut control, &digits(".5")), "0.5");
    }

    #[test]
    fn second_decimal_point_is_ignored() {
        let mut control = Control::new();
        assert_eq!(press_all(&mut control, &digits("1.2.3")), "1.23");
    }

    #[test]
    fn decimal_point_after_operator_starts_a_fraction() {
        let mut control = Control::new();
        press_all(&mut control, &digits("5"));
        control.press(Button::Add);
        assert_eq!(press_all(&mut control, &digits(".25")), "0.25");
    }

    #[test]
    fn chained_operators_evaluate_eagerly() {
        let mut control = Control::new();
        let display = press_all(
            &mut control,
            &[
                Button::Digit(5),
                Button::Add,
                Button::Digit(3),
                Button::Add,
                Button::Digit(2),
                Button::Equals,
            ],
        );
        assert_eq!(display, "10");
    }

    #[test]
    fn chaining_shows_the_intermediate_result() {
        let mut control = Control::new();
        let display = press_all(
            &mut control,
            &[Button::Digit(5), Button::Add, Button::Digit(3), Button::Add],
        );
        assert_eq!(display, "8");
    }

    #[test]
    fn newest_operator_wins_on_override() {
        let mut control = Control::new();
        let display = press_all(
            &mut control,
            &[
                Button::Digit(5),
                Button::Add,
                Button::Multiply,
                Button::Digit(3),
                Button::Equals,
            ],
        );
        assert_eq!(display, "15");
    }

    #[test]
    fn equals_is_inert_without_a_pending_calculation() {
        let mut control = Control::new();
        press_all(&mut control, &digits("7"));
        assert_eq!(control.press(Button::Equals).display, "7");
        assert_eq!(control.press(Button::Equals).display, "7");
    }

    #[test]
    fn mixed_operator_chain() {
        let mut control = Control::new();
        let display = press_all(
            &mut control,
            &[
                Button::Digit(9),
                Button::Subtract,
                Button::Digit(4),
                Button::Multiply,
                Button::Digit(2),
                Button::Equals,
            ],
        );
        // (9 - 4) * 2
        assert_eq!(display, "10");
    }

    #[test]
    fn division_produces_fractions() {
        let mut control = Control::new();
        let display = press_all(
            &mut control,
            &[Button::Digit(7), Button::Divide, Button::Digit(2), Button::Equals],
        );
        assert_eq!(display, "3.5");
    }

    #[test]
    fn zero_second_operand_defers_to_operator_override() {
        // A zero display routes the next operator press to the override
        // branch, so a chained division never sees a zero divisor; divide by
        // zero surfaces through the reciprocal key instead
        let mut control = Control::new();
        let display = press_all(
            &mut control,
            &[
                Button::Digit(5),
                Button::Divide,
                Button::Digit(0),
                Button::Add,
                Button::Digit(3),
                Button::Equals,
            ],
        );
        assert_eq!(display, "8");
    }

    #[test]
    fn error_state_resets_everything_but_memory() {
        let mut control = Control::new();
        press_all(&mut control, &digits("8"));
        control.press(Button::MemoryStore);
        press_all(&mut control, &digits("5"));
        control.press(Button::Reciprocal); // fine, 0.2
        control.press(Button::Clear);
        let error = control.press(Button::Reciprocal); // 1/0
        assert_eq!(error.display, ERROR_TEXT);
        // Fresh state afterwards, memory intact
        assert_eq!(control.press(Button::Digit(3)).display, "3");
        assert_eq!(control.press(Button::MemoryRecall).display, "8");
    }

    #[test]
    fn reciprocal_of_zero_is_an_error() {
        let mut control = Control::new();
        assert_eq!(control.press(Button::Reciprocal).display, ERROR_TEXT);
    }

    #[test]
    fn reciprocal_inverts() {
        let mut control = Control::new();
        press_all(&mut control, &digits("4"));
        assert_eq!(control.press(Button::Reciprocal).display, "0.25");
    }

    #[test]
    fn square_and_cube() {
        let mut control = Control::new();
        press_all(&mut control, &digits("3"));
        assert_eq!(control.press(Button::Square).display, "9");

        control.press(Button::Clear);
        press_all(&mut control, &digits("3"));
        assert_eq!(control.press(Button::Cube).display, "27");
    }

    #[test]
    fn unary_operators_ignore_zero() {
        let mut control = Control::new();
        assert_eq!(control.press(Button::Square).display, "0");
        assert_eq!(control.press(Button::SquareRoot).display, "0");
        assert_eq!(control.press(Button::Cube).display, "0");
    }

    #[test]
    fn square_root() {
        let mut control = Control::new();
        press_all(&mut control, &digits("81"));
        assert_eq!(control.press(Button::SquareRoot).display, "9");
    }

    #[test]
    fn square_root_of_negative_is_an_error() {
        let mut control = Control::new();
        press_all(&mut control, &digits("4"));
        control.press(Button::Sign);
        assert_eq!(control.press(Button::SquareRoot).display, ERROR_TEXT);
    }

    #[test]
    fn factorial_of_zero_displays_one() {
        let mut control = Control::new();
        assert_eq!(control.press(Button::Factorial).display, "1");
    }

    #[test]
    fn factorial_of_five() {
        let mut control = Control::new();
        press_all(&mut control, &digits("5"));
        assert_eq!(control.press(Button::Factorial).display, "120");
    }

    #[test]
    fn factorial_of_negative_uses_the_absolute_value() {
        let mut control = Control::new();
        press_all(&mut control, &digits("5"));
        control.press(Button::Sign);
        assert_eq!(control.press(Button::Factorial).display, "120");
    }

    #[test]
    fn huge_factorial_is_an_error() {
        let mut control = Control::new();
        press_all(&mut control, &digits("500"));
        assert_eq!(control.press(Button::Factorial).display, ERROR_TEXT);
    }

    #[test]
    fn sign_toggle_is_involutive() {
        let mut control = Control::new();
        press_all(&mut control, &digits("42"));
        assert_eq!(control.press(Button::Sign).display, "-42");
        assert_eq!(control.press(Button::Sign).display, "42");
    }

    #[test]
    fn result_sign_can_be_toggled() {
        let mut control = Control::new();
        press_all(
            &mut control,
            &[Button::Digit(2), Button::Add, Button::Digit(3), Button::Equals],
        );
        assert_eq!(control.press(Button::Sign).display, "-5");
    }

    #[test]
    fn backspace_trims_from_the_end() {
        let mut control = Control::new();
        press_all(&mut control, &digits("123"));
        assert_eq!(control.press(Button::Backspace).display, "12");
    }

    #[test]
    fn backspace_floors_at_zero() {
        let mut control = Control::new();
        press_all(&mut control, &digits("7"));
        assert_eq!(control.press(Button::Backspace).display, "0");
        assert_eq!(control.press(Button::Backspace).display, "0");
        assert_eq!(control.press(Button::Backspace).display, "0");
    }

    #[test]
    fn clear_resets_the_pending_calculation() {
        let mut control = Control::new();
        press_all(&mut control, &[Button::Digit(6), Button::Add, Button::Digit(2)]);
        assert_eq!(control.press(Button::Clear).display, "0");
        // No pending operator survives the clear
        let display = press_all(&mut control, &[Button::Digit(5), Button::Equals]);
        assert_eq!(display, "5");
    }

    #[test]
    fn clear_preserves_the_memory_register() {
        let mut control = Control::new();
        press_all(&mut control, &digits("7"));
        control.press(Button::MemoryStore);
        control.press(Button::Clear);
        assert_eq!(control.press(Button::MemoryRecall).display, "7");
    }

    #[test]
    fn memory_store_and_recall_round_trip() {
        let mut control = Control::new();
        press_all(&mut control, &digits("7"));
        assert_eq!(control.press(Button::MemoryStore).display, "0");
        press_all(&mut control, &digits("123"));
        assert_eq!(control.press(Button::MemoryRecall).display, "7");
    }

    #[test]
    fn memory_clear_resets_only_the_register() {
        let mut control = Control::new();
        press_all(&mut control, &digits("9"));
        control.press(Button::MemoryStore);
        press_all(&mut control, &digits("55"));
        control.press(Button::MemoryClear);
        assert_eq!(control.press(Button::MemoryRecall).display, "0");
    }

    #[test]
    fn memory_add_accumulates() {
        let mut control = Control::new();
        press_all(&mut control, &digits("5"));
        control.press(Button::MemoryAdd);
        control.press(Button::Clear);
        press_all(&mut control, &digits("3"));
        control.press(Button::MemoryAdd);
        control.press(Button::Clear);
        assert_eq!(control.press(Button::MemoryRecall).display, "8");
    }

    #[test]
    fn memory_add_of_zero_is_a_no_op() {
        let mut control = Control::new();
        press_all(&mut control, &digits("5"));
        control.press(Button::MemoryAdd);
        control.press(Button::Clear);
        control.press(Button::MemoryAdd);
        assert_eq!(control.press(Button::MemoryRecall).display, "5");
    }

    #[test]
    fn base_toggle_cycles_and_relabels() {
        let mut control = Control::new();

        let press = control.press(Button::BinaryMode);
        assert_eq!(
            press.hints,
            vec![UiHint::Relabel {
                button: Button::BinaryMode,
                label: "Dec",
                mode: DisplayMode::Binary,
            }]
        );
        assert_eq!(control.mode(), DisplayMode::Binary);

        let press = control.press(Button::BinaryMode);
        assert_eq!(
            press.hints,
            vec![UiHint::Relabel {
                button: Button::BinaryMode,
                label: "Bin",
                mode: DisplayMode::Decimal,
            }]
        );
        assert_eq!(control.mode(), DisplayMode::Decimal);
    }

    #[test]
    fn base_toggles_are_mutually_exclusive() {
        let mut control = Control::new();
        control.press(Button::HexMode);
        assert_eq!(control.mode(), DisplayMode::Hexadecimal);

        // The other toggle is inert while hex is active
        let press = control.press(Button::BinaryMode);
        assert!(press.hints.is_empty());
        assert_eq!(control.mode(), DisplayMode::Hexadecimal);
    }

    #[test]
    fn hex_digits_require_hex_mode() {
        let mut control = Control::new();
        assert_eq!(control.press_hex(HexButton::A).display, "0");

        control.press(Button::HexMode);
        assert_eq!(control.press_hex(HexButton::A).display, "a");
        assert_eq!(control.press_hex(HexButton::F).display, "af");
        assert_eq!(control.press(Button::Backspace).display, "a");
    }

    #[test]
    fn mode_toggle_does_not_disturb_entry() {
        let mut control = Control::new();
        press_all(&mut control, &digits("25"));
        assert_eq!(control.press(Button::HexMode).display, "25");
        assert_eq!(control.press(Button::Digit(6)).display, "256");
    }

    #[test]
    fn zero_equals_result_is_not_displayed() {
        // 5 - 5 = keeps showing the second operand because a zero result
        // is silently dropped
        let mut control = Control::new();
        let display = press_all(
            &mut control,
            &[
                Button::Digit(5),
                Button::Subtract,
                Button::Digit(5),
                Button::Equals,
            ],
        );
        assert_eq!(display, "5");
    }
}
