use std::io::Write;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operand kinds. Two integers go to `eval_integer_op`. Strings
    /// concatenate under `+` and repeat under `*` when paired with an integer
    /// on either side. Division is only defined on integers.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Errors
    /// - `InvalidDivision` if `/` is applied to anything but two integers.
    /// - `TypeMismatch` for any other unsupported operand combination.
    /// - Errors from the integer and string handlers.
    ///
    /// # Example
    /// ```
    /// use plank::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::<Vec<u8>>::eval_binary(BinaryOperator::Mul,
    ///                                              &Value::Integer(3),
    ///                                              &Value::from("ab"),
    ///                                              0);
    /// assert_eq!(result.unwrap(), Value::from("ababab"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if let (Some(a), Some(b)) = (left.as_integer(), right.as_integer()) {
            return Self::eval_integer_op(op, a, b, line).map(Value::Integer);
        }

        match op {
            Add => match (left.as_str(), right.as_str()) {
                (Some(a), Some(b)) => Ok(Value::Str(Self::eval_concat(a, b))),
                _ => Err(RuntimeError::TypeMismatch { op, line }),
            },
            Mul => {
                let repetition = left.as_str()
                                     .zip(right.as_integer())
                                     .or_else(|| right.as_str().zip(left.as_integer()));

                match repetition {
                    Some((s, n)) => Self::eval_repeat(s, n, line).map(Value::Str),
                    None => Err(RuntimeError::TypeMismatch { op, line }),
                }
            },
            Div => Err(RuntimeError::InvalidDivision { line }),
            Sub => Err(RuntimeError::TypeMismatch { op, line }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Ctx = Context<Vec<u8>>;

    fn binary(op: BinaryOperator,
              left: impl Into<Value>,
              right: impl Into<Value>)
              -> EvalResult<Value> {
        Ctx::eval_binary(op, &left.into(), &right.into(), 0)
    }

    #[test]
    fn integer_operands_use_integer_arithmetic() {
        assert_eq!(binary(BinaryOperator::Sub, 3_i64, 4_i64), Ok(Value::Integer(-1)));
    }

    #[test]
    fn strings_concatenate() {
        assert_eq!(binary(BinaryOperator::Add, "ab", "cd"), Ok(Value::from("abcd")));
    }

    #[test]
    fn repetition_is_symmetric() {
        let left = binary(BinaryOperator::Mul, "ab", 2_i64);
        let right = binary(BinaryOperator::Mul, 2_i64, "ab");
        assert_eq!(left, right);
        assert_eq!(left, Ok(Value::from("abab")));
    }

    #[test]
    fn mixed_operands_are_rejected() {
        assert_eq!(Ctx::eval_binary(BinaryOperator::Add, &"a".into(), &1_i64.into(), 4),
                   Err(RuntimeError::TypeMismatch { op:   BinaryOperator::Add,
                                                    line: 4, }));
        assert_eq!(binary(BinaryOperator::Sub, "a", "b"),
                   Err(RuntimeError::TypeMismatch { op:   BinaryOperator::Sub,
                                                    line: 0, }));
        assert_eq!(binary(BinaryOperator::Mul, "a", "b"),
                   Err(RuntimeError::TypeMismatch { op:   BinaryOperator::Mul,
                                                    line: 0, }));
    }

    #[test]
    fn string_division_is_invalid() {
        assert_eq!(Ctx::eval_binary(BinaryOperator::Div, &"a".into(), &1_i64.into(), 2),
                   Err(RuntimeError::InvalidDivision { line: 2 }));
        assert_eq!(binary(BinaryOperator::Div, "a", "b").unwrap_err().to_string(),
                   "Cannot divide these two values");
    }

    #[test]
    fn error_values_are_rejected() {
        assert!(binary(BinaryOperator::Add, Value::Error, 1_i64).is_err());
        assert!(binary(BinaryOperator::Mul, Value::Error, "a").is_err());
    }
}
