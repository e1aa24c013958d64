use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors are fatal: the evaluator stops at the first one. `Display`
/// renders only the message; the command line adds the `RUNTIME ERROR`
/// prefix.
pub enum RuntimeError {
    /// Read a symbol that was never assigned.
    UndefinedSymbol {
        /// The name of the symbol.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic operator received operands of unsupported kinds.
    TypeMismatch {
        /// The operator that was applied.
        op:   BinaryOperator,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted integer division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division on operands that are not both integers.
    InvalidDivision {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to repeat a string a negative number of times.
    NegativeRepetition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A repeated string would not fit in memory.
    RepetitionTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The operator that overflowed.
        op:   BinaryOperator,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output sink failed.
    Output {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedSymbol { name, .. } => write!(f, "Symbol {name} not defined"),
            Self::TypeMismatch { op, .. } => write!(f, "Type mismatch for arguments of {op}"),
            Self::DivisionByZero { .. } => write!(f, "Cannot divide by 0"),
            Self::InvalidDivision { .. } => write!(f, "Cannot divide these two values"),
            Self::NegativeRepetition { .. } => {
                write!(f, "Cannot multiply a string by a negative integer")
            },
            Self::RepetitionTooLarge { .. } => write!(f, "Repeated string is too large"),
            Self::Overflow { op, .. } => write!(f, "Integer overflow in {op}"),
            Self::Output { details, .. } => write!(f, "Could not write output: {details}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
