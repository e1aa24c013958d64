use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, addition, and descends through the precedence
    /// hierarchy.
    ///
    /// Grammar: `expression := additive`
    ///
    /// # Returns
    /// - `Ok(Some(expr))` if an expression was parsed.
    /// - `Ok(None)` if the next token cannot start an expression. The token is
    ///   pushed back.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Option<Expr>> {
        self.parse_additive()
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-")
    /// multiplicative)*`
    ///
    /// # Errors
    /// Returns `MissingOperand` if an operator is not followed by an operand.
    fn parse_additive(&mut self) -> ParseResult<Option<Expr>> {
        let Some(mut left) = self.parse_multiplicative()? else {
            return Ok(None);
        };

        loop {
            let lexeme = self.tokens.get();
            let Some(op) = token_to_binary_operator(&lexeme.0).filter(|op| {
                                                                  matches!(op,
                                                                           BinaryOperator::Add
                                                                           | BinaryOperator::Sub)
                                                              })
            else {
                self.tokens.push_back(lexeme);
                return Ok(Some(left));
            };

            let Some(right) = self.parse_multiplicative()? else {
                return Err(ParseError::MissingOperand { line: self.peek_line() });
            };

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: lexeme.1 };
        }
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative binary operators: `*` and `/`.
    ///
    /// The rule is: `multiplicative := primary (("*" | "/") primary)*`
    ///
    /// # Errors
    /// Returns `MissingOperand` if an operator is not followed by an operand.
    fn parse_multiplicative(&mut self) -> ParseResult<Option<Expr>> {
        let Some(mut left) = self.parse_primary()? else {
            return Ok(None);
        };

        loop {
            let lexeme = self.tokens.get();
            let Some(op) = token_to_binary_operator(&lexeme.0).filter(|op| {
                                                                  matches!(op,
                                                                           BinaryOperator::Mul
                                                                           | BinaryOperator::Div)
                                                              })
            else {
                self.tokens.push_back(lexeme);
                return Ok(Some(left));
            };

            let Some(right) = self.parse_primary()? else {
                return Err(ParseError::MissingOperand { line: self.peek_line() });
            };

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: lexeme.1 };
        }
    }
}

/// Maps an operator token to its binary operator.
///
/// Returns `None` for tokens that are not binary operators.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
