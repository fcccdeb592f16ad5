use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, operator::Operator},
};

impl Operator {
    /// Applies the operator to two integers as `lhs <op> rhs`.
    ///
    /// `/` truncates toward zero and `%` takes the sign of `lhs`. `^` needs a
    /// non-negative exponent. Results that do not fit in an `i64` are errors.
    ///
    /// # Parameters
    /// - `lhs`: The left operand.
    /// - `rhs`: The right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `%` with a zero `rhs`.
    /// - `InvalidExponent` for `^` with a negative `rhs`.
    /// - `Overflow` if the result is out of range.
    ///
    /// # Example
    /// ```
    /// use catlang::{error::RuntimeError, interpreter::operator::Operator};
    ///
    /// assert_eq!(Operator::Div.apply(-7, 2, 1).unwrap(), -3);
    /// assert_eq!(Operator::Mod.apply(-7, 2, 1).unwrap(), -1);
    /// assert_eq!(Operator::Pow.apply(2, 10, 1).unwrap(), 1024);
    /// assert!(matches!(Operator::Mod.apply(1, 0, 3),
    ///                  Err(RuntimeError::DivisionByZero { line: 3 })));
    /// assert!(matches!(Operator::Mul.apply(i64::MAX, 2, 1),
    ///                  Err(RuntimeError::Overflow { .. })));
    /// ```
    pub fn apply(self, lhs: i64, rhs: i64, line: usize) -> EvalResult<i64> {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => lhs.checked_sub(rhs),
            Self::Mul => lhs.checked_mul(rhs),
            Self::Div | Self::Mod if rhs == 0 => {
                return Err(RuntimeError::DivisionByZero { line });
            },
            Self::Div => lhs.checked_div(rhs),
            Self::Mod => lhs.checked_rem(rhs),
            Self::Pow => return pow(lhs, rhs, line),
        };

        result.ok_or(RuntimeError::Overflow { line })
    }
}

/// Integer exponentiation with a non-negative exponent.
///
/// Exponents beyond `u32` range still succeed for the bases whose powers stay
/// bounded (`0`, `1` and `-1`).
fn pow(base: i64, exponent: i64, line: usize) -> EvalResult<i64> {
    if exponent < 0 {
        return Err(RuntimeError::InvalidExponent { exponent, line });
    }

    match u32::try_from(exponent) {
        Ok(e) => base.checked_pow(e).ok_or(RuntimeError::Overflow { line }),
        Err(_) => match base {
            0 | 1 => Ok(base),
            -1 if exponent % 2 == 0 => Ok(1),
            -1 => Ok(-1),
            _ => Err(RuntimeError::Overflow { line }),
        },
    }
}
