use crate::{
    ast::StatementSequence,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses a list of statements separated by `;` or newlines.
    ///
    /// Grammar: `statement_sequence := statement (separator
    /// statement_sequence)?`
    ///
    /// The sequence ends at `end`, at the end of input, or at any token that
    /// cannot start a statement; that token is left on the stream for the
    /// caller. Statements that fail to parse are reported and skipped.
    ///
    /// # Returns
    /// - `Some(sequence)` if at least one statement was attempted. The
    ///   sequence only holds the statements that parsed.
    /// - `None` if the sequence is empty.
    pub(in crate::interpreter::parser) fn parse_statement_sequence(&mut self)
                                                                   -> Option<StatementSequence> {
        let mut statements = Vec::new();
        let mut first_line = None;

        loop {
            match self.parse_statement() {
                Ok(Some(statement)) => {
                    first_line.get_or_insert(statement.line_number());
                    statements.push(statement);
                },
                Ok(None) => break,
                Err(e) => {
                    first_line.get_or_insert(e.line());
                    self.report(e);
                    self.synchronize();
                },
            }

            let lexeme = self.tokens.get();
            match lexeme {
                (Token::Semicolon | Token::NewLine, _) => {},
                (Token::End | Token::Done, _) => {
                    self.tokens.push_back(lexeme);
                    break;
                },
                (_, line) => {
                    self.tokens.push_back(lexeme);
                    self.report(ParseError::MissingSeparator { line });
                    self.synchronize();
                },
            }
        }

        first_line.map(|line| StatementSequence { statements, line })
    }

    /// Skips the contents of a body that holds no statement, including the
    /// `end` that closes it.
    ///
    /// Nested `begin ... end` pairs are skipped whole. At the end of input
    /// nothing is consumed.
    pub(in crate::interpreter::parser) fn skip_body(&mut self) {
        let mut open_blocks = 0usize;

        loop {
            let lexeme = self.tokens.get();
            match lexeme.0 {
                Token::Begin => open_blocks += 1,
                Token::End if open_blocks > 0 => open_blocks -= 1,
                Token::End => return,
                Token::Done => {
                    self.tokens.push_back(lexeme);
                    return;
                },
                _ => {},
            }
        }
    }

    /// Skips the rest of a malformed statement.
    ///
    /// Tokens are discarded up to the next separator, the `end` closing the
    /// enclosing body, or the end of input; that token is pushed back.
    /// `begin ... end` pairs inside the skipped text are skipped as a whole,
    /// and outside of any body a stray `end` is skipped as well.
    fn synchronize(&mut self) {
        let mut open_blocks = 0usize;

        loop {
            let lexeme = self.tokens.get();
            match lexeme.0 {
                Token::Begin => open_blocks += 1,
                Token::End if open_blocks > 0 => open_blocks -= 1,
                Token::End if self.depth == 0 => {},
                Token::Semicolon | Token::NewLine if open_blocks == 0 => {
                    self.tokens.push_back(lexeme);
                    return;
                },
                Token::End | Token::Done => {
                    self.tokens.push_back(lexeme);
                    return;
                },
                _ => {},
            }
        }
    }
}
