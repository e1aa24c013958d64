use crate::ast::Keyword;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all diagnostics that can be reported while parsing.
///
/// Lines are stored 0-based, as produced by the lexer. `Display` adds one so
/// that users see the line numbers their editor shows.
pub enum ParseError {
    /// Tokens remained after the program's statement list ended.
    UnrecognizedStatement {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The program did not contain a single statement.
    NoStatements {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement was not followed by `;` or a newline.
    MissingSeparator {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A keyword that needs an expression was not followed by one.
    MissingExpression {
        /// The keyword the expression should follow.
        after: Keyword,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `set` was not followed by an identifier.
    MissingIdentifier {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator had no right-hand operand.
    MissingOperand {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An opening parenthesis was not followed by an expression.
    MissingGroupedExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The guard of an `if` or `loop` was not followed by `begin`.
    MissingBegin {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `begin` was not followed by any statement.
    MissingStatementList {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement list was not closed by `end`.
    MissingEnd {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A parenthesized expression was not closed by `)`.
    MissingClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The lexer could not make sense of the input where a statement was
    /// expected.
    InvalidToken {
        /// The offending source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Gets the 0-based line number the diagnostic was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnrecognizedStatement { line }
            | Self::NoStatements { line }
            | Self::MissingSeparator { line }
            | Self::MissingExpression { line, .. }
            | Self::MissingIdentifier { line }
            | Self::MissingOperand { line }
            | Self::MissingGroupedExpression { line }
            | Self::MissingBegin { line }
            | Self::MissingStatementList { line }
            | Self::MissingEnd { line }
            | Self::MissingClosingParen { line }
            | Self::InvalidToken { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.line() + 1;
        match self {
            Self::UnrecognizedStatement { .. } => write!(f, "{line}: Unrecognized statement"),
            Self::NoStatements { .. } => write!(f, "{line}: No statements in program"),
            Self::MissingSeparator { .. } => write!(f, "{line}: Missing statement separator"),
            Self::MissingExpression { after, .. } => {
                write!(f, "{line}: Missing expression after {after}")
            },
            Self::MissingIdentifier { .. } => write!(f, "{line}: Missing ID after set"),
            Self::MissingOperand { .. } => write!(f, "{line}: Missing expression after operator"),
            Self::MissingGroupedExpression { .. } => write!(f, "{line}: Missing expression after ("),
            Self::MissingBegin { .. } => write!(f, "{line}: Missing BEGIN after expression"),
            Self::MissingStatementList { .. } => {
                write!(f, "{line}: Missing statement list after BEGIN")
            },
            Self::MissingEnd { .. } => write!(f, "{line}: Missing END after statement list"),
            Self::MissingClosingParen { .. } => write!(f, "{line}: Missing ) after expression"),
            Self::InvalidToken { .. } => write!(f, "{line}: Invalid token"),
        }
    }
}

impl std::error::Error for ParseError {}
