use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Safely converts a string repetition count from `i64` to `usize`.
///
/// ## Errors
/// Returns an error if the value is negative or does not fit in a `usize`.
///
/// ## Parameters
/// - `value`: The repetition count to convert.
/// - `line`: Source code line number for error reporting.
///
/// ## Returns
/// - `Ok(usize)`: The converted value if it is safe.
/// - `Err(RuntimeError::NegativeRepetition | RuntimeError::RepetitionTooLarge)`:
///   If conversion fails.
///
/// ## Example
/// ```
/// use plank::{error::RuntimeError, util::num::i64_to_usize_checked};
///
/// // Safe
/// let v = i64_to_usize_checked(42, 0).unwrap();
/// assert_eq!(v, 42);
///
/// // Too small
/// let err = i64_to_usize_checked(-1, 5).unwrap_err();
/// assert!(matches!(err, RuntimeError::NegativeRepetition { line: 5 }));
/// ```
pub fn i64_to_usize_checked(value: i64, line: usize) -> EvalResult<usize> {
    if value < 0 {
        return Err(RuntimeError::NegativeRepetition { line });
    }

    usize::try_from(value).map_err(|_| RuntimeError::RepetitionTooLarge { line })
}
