use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::i64_to_usize_checked,
};

impl<W: Write> Context<W> {
    /// Concatenates two strings into a new one.
    #[must_use]
    pub fn eval_concat(left: &str, right: &str) -> String {
        [left, right].concat()
    }

    /// Repeats a string `count` times.
    ///
    /// A count of `0` gives the empty string.
    ///
    /// # Errors
    /// - `NegativeRepetition` if `count` is negative.
    /// - `RepetitionTooLarge` if the memory for the result cannot be
    ///   allocated.
    ///
    /// # Example
    /// ```
    /// use plank::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::<Vec<u8>>::eval_repeat("ab", 3, 0).unwrap(), "ababab");
    /// assert_eq!(Context::<Vec<u8>>::eval_repeat("ab", 0, 0).unwrap(), "");
    /// ```
    pub fn eval_repeat(s: &str, count: i64, line: usize) -> EvalResult<String> {
        let count = i64_to_usize_checked(count, line)?;
        if s.is_empty() {
            return Ok(String::new());
        }

        let len = s.len()
                   .checked_mul(count)
                   .ok_or(RuntimeError::RepetitionTooLarge { line })?;

        let mut repeated = String::new();
        repeated.try_reserve_exact(len)
                .map_err(|_| RuntimeError::RepetitionTooLarge { line })?;

        for _ in 0..count {
            repeated.push_str(s);
        }

        Ok(repeated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Ctx = Context<Vec<u8>>;

    #[test]
    fn concatenation_keeps_order() {
        assert_eq!(Ctx::eval_concat("ab", "cd"), "abcd");
        assert_eq!(Ctx::eval_concat("", ""), "");
    }

    #[test]
    fn negative_counts_are_rejected() {
        let err = Ctx::eval_repeat("ab", -1, 2).unwrap_err();
        assert_eq!(err, RuntimeError::NegativeRepetition { line: 2 });
        assert_eq!(err.to_string(), "Cannot multiply a string by a negative integer");
    }

    #[test]
    fn empty_strings_repeat_to_empty() {
        assert_eq!(Ctx::eval_repeat("", i64::MAX, 0).unwrap(), "");
    }

    #[test]
    fn huge_results_are_rejected() {
        assert_eq!(Ctx::eval_repeat("ab", i64::MAX, 0),
                   Err(RuntimeError::RepetitionTooLarge { line: 0 }));
    }

    #[test]
    fn unallocatable_results_are_errors() {
        assert_eq!(Ctx::eval_repeat("a", 9_000_000_000_000_000_000, 3),
                   Err(RuntimeError::RepetitionTooLarge { line: 3 }));
    }
}
