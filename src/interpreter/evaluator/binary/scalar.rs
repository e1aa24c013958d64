use std::io::Write;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W: Write> Context<W> {
    /// Evaluates an arithmetic operation on two integers.
    ///
    /// Every operation is checked. Division truncates toward zero, so `-7 / 2`
    /// is `-3`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` if `op` is `/` and `right` is `0`.
    /// - `Overflow` if the result does not fit in 64 bits.
    ///
    /// # Example
    /// ```
    /// use plank::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::<Vec<u8>>::eval_integer_op(BinaryOperator::Div, -7, 2, 0);
    /// assert_eq!(result.unwrap(), -3);
    /// ```
    pub fn eval_integer_op(op: BinaryOperator,
                           left: i64,
                           right: i64,
                           line: usize)
                           -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if op == Div && right == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => left.checked_div(right),
        };

        result.ok_or(RuntimeError::Overflow { op, line })
    }
}
