/// Core parsing state and the program entry point.
///
/// Holds the `Parser` itself, the result types and the top-level program
/// rule, including the checks that decide whether a program is accepted.
pub mod core;

/// Statement sequence parsing.
///
/// Parses lists of statements separated by `;` or newlines and recovers from
/// malformed statements so that parsing can continue.
pub mod block;

/// Statement parsing.
///
/// Implements the `if`, `loop`, `set` and `print` statements.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels.
pub mod binary;

/// Primary expression parsing.
///
/// Handles literals, identifiers and parenthesized expressions.
pub mod primary;
