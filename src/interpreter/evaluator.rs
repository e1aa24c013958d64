/// Core evaluation logic and context management.
///
/// Contains the runtime context with the symbol table and the output sink,
/// and the dispatch over every statement and expression variant.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles integer arithmetic, string concatenation and string repetition.
pub mod binary;

/// Evaluation of `if` and `loop` statements.
pub mod control;

/// Utility functions for evaluation.
///
/// Provides the leaf evaluations: literals, symbol lookups and printing.
pub mod utils;
