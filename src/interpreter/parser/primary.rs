use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a primary expression.
    ///
    /// Grammar: `primary := identifier | integer | string | "(" expression
    /// ")"`
    ///
    /// # Returns
    /// - `Ok(Some(expr))` for a literal, an identifier or a parenthesized
    ///   expression.
    /// - `Ok(None)` if the next token cannot start an expression. The token is
    ///   pushed back.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Option<Expr>> {
        let lexeme = self.tokens.get();

        match lexeme {
            (Token::Identifier(name), line) => Ok(Some(Expr::Identifier { name, line })),
            (Token::Integer(value), line) => Ok(Some(Expr::Integer { value, line })),
            (Token::Str(value), line) => Ok(Some(Expr::Str { value, line })),
            (Token::LParen, _) => self.parse_grouping().map(Some),
            _ => {
                self.tokens.push_back(lexeme);
                Ok(None)
            },
        }
    }

    /// Parses the rest of a parenthesized expression after `(`.
    ///
    /// The parentheses only group; no node is created for them.
    ///
    /// # Errors
    /// - `MissingGroupedExpression` if `(` is not followed by an expression.
    /// - `MissingClosingParen` if the expression is not followed by `)`.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        let Some(expr) = self.parse_expression()? else {
            return Err(ParseError::MissingGroupedExpression { line: self.peek_line() });
        };

        let lexeme = self.tokens.get();
        if lexeme.0 == Token::RParen {
            return Ok(expr);
        }

        let line = lexeme.1;
        self.tokens.push_back(lexeme);
        Err(ParseError::MissingClosingParen { line })
    }
}
