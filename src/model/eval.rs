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

//! Arithmetic evaluation.
//!
//! This module implements the stateless half of the calculator: a pure
//! function from two operand strings and an operator to a result string.
//! Errors are reported to the caller (the input controller), which maps them
//! to the global error display state; they never reach the UI as faults.

use thiserror::Error;

use crate::{model::Operator, util::format::format_number};

// Largest n for which n! is finite in an f64.
const FACTORIAL_LIMIT: u64 = 170;

/// An arithmetic operation that cannot produce a displayable number.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ArithmeticError {
    #[error("division by zero")]
    DivideByZero,

    #[error("square root of a negative number")]
    NegativeSquareRoot,

    #[error("factorial operand too large")]
    FactorialOverflow,
}

/// Evaluates `a op b` and formats the result as a minimal decimal string.
///
/// Operand strings that fail to parse are treated as zero, matching the
/// lenient parsing of the display text elsewhere. An empty operand yields
/// `"0"` immediately, without computing.
///
/// `SquareRoot` and `Factorial` use only the first operand.
pub(crate) fn evaluate(a: &str, b: &str, op: Operator) -> Result<String, ArithmeticError> {
    if a.is_empty() || b.is_empty() {
        return Ok("0".to_string());
    }

    let op1: f64 = a.parse().unwrap_or(0.0);
    let op2: f64 = b.parse().unwrap_or(0.0);

    let result = match op {
        Operator::Add => op1 + op2,

        Operator::Subtract => op1 - op2,

        Operator::Multiply => op1 * op2,

        Operator::Divide => {
            if op2 == 0.0 {
                return Err(ArithmeticError::DivideByZero);
            }
            op1 / op2
        }

        Operator::SquareRoot => {
            if op1 < 0.0 {
                return Err(ArithmeticError::NegativeSquareRoot);
            }
            op1.sqrt()
        }

        Operator::Factorial => factorial(op1)?,
    };

    Ok(format_number(result))
}

/// Iterative factorial over a non-negative, rounded operand.
///
/// A negative operand is folded to its absolute value and zero maps to one,
/// so `0! = 1` and `(-5)! = 120`.
fn factorial(operand: f64) -> Result<f64, ArithmeticError> {
    let n = if operand == 0.0 {
        1
    } else {
        operand.abs().round() as u64
    };

    if n > FACTORIAL_LIMIT {
        return Err(ArithmeticError::FactorialOverflow);
    }

    let mut result = 1.0;
    for i in 2..=n {
        result *= i as f64;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_subtracts_multiplies() {
        assert_eq!(evaluate("5", "3", Operator::Add), Ok("8".to_string()));
        assert_eq!(evaluate("5", "8", Operator::Subtract), Ok("-3".to_string()));
        assert_eq!(evaluate("2.5", "4", Operator::Multiply), Ok("10".to_string()));
    }

    #[test]
    fn divides() {
        assert_eq!(evaluate("7", "2", Operator::Divide), Ok("3.5".to_string()));
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert_eq!(
            evaluate("0", "0", Operator::Divide),
            Err(ArithmeticError::DivideByZero)
        );
        assert_eq!(
            evaluate("42", "0", Operator::Divide),
            Err(ArithmeticError::DivideByZero)
        );
    }

    #[test]
    fn empty_operand_yields_zero_without_computing() {
        assert_eq!(evaluate("", "5", Operator::Divide), Ok("0".to_string()));
        assert_eq!(evaluate("5", "", Operator::Add), Ok("0".to_string()));
    }

    #[test]
    fn square_root_uses_first_operand() {
        assert_eq!(evaluate("9", "9", Operator::SquareRoot), Ok("3".to_string()));
        assert_eq!(evaluate("2", "2", Operator::SquareRoot), Ok(2f64.sqrt().to_string()));
    }

    #[test]
    fn square_root_of_negative_is_an_error() {
        assert_eq!(
            evaluate("-4", "-4", Operator::SquareRoot),
            Err(ArithmeticError::NegativeSquareRoot)
        );
    }

    #[test]
    fn factorial_of_zero_is_one() {
        assert_eq!(evaluate("0", "0", Operator::Factorial), Ok("1".to_string()));
    }

    #[test]
    fn factorial_of_five_is_120() {
        assert_eq!(evaluate("5", "5", Operator::Factorial), Ok("120".to_string()));
    }

    #[test]
    fn factorial_folds_negative_operands() {
        assert_eq!(evaluate("-5", "-5", Operator::Factorial), Ok("120".to_string()));
    }

    #[test]
    fn factorial_rounds_to_nearest_integer() {
        assert_eq!(evaluate("4.6", "4.6", Operator::Factorial), Ok("120".to_string()));
    }

    #[test]
    fn factorial_past_the_f64_limit_is_an_error() {
        assert!(evaluate("170", "170", Operator::Factorial).is_ok());
        assert_eq!(
            evaluate("171", "171", Operator::Factorial),
            Err(ArithmeticError::FactorialOverflow)
        );
    }

    #[test]
    fn unparseable_operands_fall_back_to_zero() {
        assert_eq!(evaluate("-", "5", Operator::Add), Ok("5".to_string()));
    }
}
