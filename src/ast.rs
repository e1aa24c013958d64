/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions produce a value when evaluated. Literals and identifiers are
/// leaves; binary operations own both of their operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal such as `42`.
    Integer {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal such as `"abc"`, without its quotes.
    Str {
        /// The constant value.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a symbol by name.
    Identifier {
        /// Name of the symbol.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use plank::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Integer { line, .. }
            | Self::Str { line, .. }
            | Self::Identifier { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }
}

/// An ordered list of statements.
///
/// Used both for the whole program and for the bodies of `if` and `loop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementSequence {
    /// The statements, in source order.
    pub statements: Vec<Statement>,
    /// Line number of the first statement.
    pub line:       usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `if <condition> begin <body> end`
    If {
        /// The guard expression.
        condition: Expr,
        /// Statements run when the guard is exactly `1`.
        body:      StatementSequence,
        /// Line number in the source code.
        line:      usize,
    },
    /// `loop <condition> begin <body> end`
    Loop {
        /// The guard expression. It is parsed but never evaluated.
        condition: Expr,
        /// Statements run on every repetition.
        body:      StatementSequence,
        /// Line number in the source code.
        line:      usize,
    },
    /// `set <name> <value>`
    Set {
        /// The name of the symbol.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print <expr>`
    Print {
        /// The expression to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::If { line, .. }
            | Self::Loop { line, .. }
            | Self::Set { line, .. }
            | Self::Print { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication or string repetition (`*`)
    Mul,
    /// Integer division (`/`)
    Div,
}

/// The statement keywords that must be followed by an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Keyword {
    /// `if`
    If,
    /// `loop`
    Loop,
    /// `set`
    Set,
    /// `print`
    Print,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            Self::If => "if",
            Self::Loop => "loop",
            Self::Set => "set",
            Self::Print => "print",
        };
        write!(f, "{keyword}")
    }
}
