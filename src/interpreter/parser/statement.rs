use crate::{
    ast::{Expr, Keyword, Statement, StatementSequence},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement is one of:
    /// - `if <expr> begin <statements> end`
    /// - `loop <expr> begin <statements> end`
    /// - `set <identifier> <expr>`
    /// - `print <expr>`
    ///
    /// Leading separators are empty statements and are skipped.
    ///
    /// # Returns
    /// - `Ok(Some(statement))` if a statement was parsed.
    /// - `Ok(None)` if the next token cannot start a statement. The token is
    ///   pushed back.
    ///
    /// # Errors
    /// Returns a `ParseError` if a statement starts but is malformed, or if
    /// the lexer produced an error token where a statement was expected.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self)
                                                          -> ParseResult<Option<Statement>> {
        loop {
            let lexeme = self.tokens.get();
            return match lexeme {
                (Token::Semicolon | Token::NewLine, _) => continue,
                (Token::If, line) => {
                    let (condition, body) = self.parse_guarded_body(Keyword::If)?;
                    Ok(Some(Statement::If { condition, body, line }))
                },
                (Token::Loop, line) => {
                    let (condition, body) = self.parse_guarded_body(Keyword::Loop)?;
                    Ok(Some(Statement::Loop { condition, body, line }))
                },
                (Token::Set, line) => self.parse_set(line).map(Some),
                (Token::Print, line) => {
                    let expr = self.parse_required_expression(Keyword::Print)?;
                    Ok(Some(Statement::Print { expr, line }))
                },
                (Token::Error(token), line) => Err(ParseError::InvalidToken { token, line }),
                _ => {
                    self.tokens.push_back(lexeme);
                    Ok(None)
                },
            };
        }
    }

    /// Parses the part of `if` and `loop` after the keyword.
    ///
    /// Grammar: `<expr> "begin" statement_sequence "end"`
    ///
    /// # Parameters
    /// - `keyword`: The keyword that introduced the statement, used in
    ///   diagnostics.
    ///
    /// # Returns
    /// The guard expression and the body.
    ///
    /// # Errors
    /// - `MissingExpression` if there is no guard.
    /// - `MissingBegin` if the guard is not followed by `begin`.
    /// - `MissingStatementList` if the body is empty. Whatever the body holds
    ///   is skipped together with its `end`.
    /// - `MissingEnd` if the body is not closed by `end`.
    fn parse_guarded_body(&mut self, keyword: Keyword) -> ParseResult<(Expr, StatementSequence)> {
        let condition = self.parse_required_expression(keyword)?;

        let lexeme = self.tokens.get();
        if lexeme.0 != Token::Begin {
            let line = lexeme.1;
            self.tokens.push_back(lexeme);
            return Err(ParseError::MissingBegin { line });
        }

        self.depth += 1;
        let body = self.parse_statement_sequence();
        self.depth -= 1;

        let Some(body) = body else {
            let line = self.peek_line();
            self.skip_body();
            return Err(ParseError::MissingStatementList { line });
        };

        let lexeme = self.tokens.get();
        if lexeme.0 != Token::End {
            let line = lexeme.1;
            self.tokens.push_back(lexeme);
            return Err(ParseError::MissingEnd { line });
        }

        Ok((condition, body))
    }

    /// Parses an assignment after the `set` keyword.
    ///
    /// Grammar: `"set" identifier <expr>`
    ///
    /// # Errors
    /// - `MissingIdentifier` if `set` is not followed by an identifier.
    /// - `MissingExpression` if the identifier is not followed by a value.
    fn parse_set(&mut self, line: usize) -> ParseResult<Statement> {
        let name = match self.tokens.get() {
            (Token::Identifier(name), _) => name,
            lexeme => {
                let line = lexeme.1;
                self.tokens.push_back(lexeme);
                return Err(ParseError::MissingIdentifier { line });
            },
        };

        let value = self.parse_required_expression(Keyword::Set)?;

        Ok(Statement::Set { name, value, line })
    }

    /// Parses an expression that must be present after `keyword`.
    fn parse_required_expression(&mut self, keyword: Keyword) -> ParseResult<Expr> {
        match self.parse_expression()? {
            Some(expr) => Ok(expr),
            None => Err(ParseError::MissingExpression { after: keyword,
                                                        line:  self.peek_line(), }),
        }
    }
}
