/// Routes a binary operator to the handler for its operand kinds.
pub mod core;

/// Integer arithmetic.
///
/// Implements `+`, `-`, `*` and `/` on two integers with overflow and
/// division-by-zero checks.
pub mod scalar;

/// String operators.
///
/// Implements concatenation with `+` and repetition with `*`.
pub mod string;
