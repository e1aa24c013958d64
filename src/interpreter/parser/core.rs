use crate::{
    ast::StatementSequence,
    error::ParseError,
    interpreter::lexer::{Token, TokenStream},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The result of parsing a whole program.
///
/// `program` is only present when the program was accepted: no diagnostics
/// were reported, at least one statement was parsed and the whole input was
/// consumed.
#[derive(Debug)]
pub struct ParseOutcome {
    /// The parsed program, if it was accepted.
    pub program:     Option<StatementSequence>,
    /// Every diagnostic reported while parsing, in order.
    pub diagnostics: Vec<ParseError>,
}

/// A recursive-descent parser over a [`TokenStream`].
///
/// Each grammar rule is a method. Rules that may legitimately match nothing
/// return `Ok(None)` after pushing the token they looked at back onto the
/// stream; rules that find malformed input return a [`ParseError`]. The
/// statement sequence rule records those errors and resumes with the next
/// statement, so a single parse can report many diagnostics.
pub struct Parser<'s> {
    pub(in crate::interpreter::parser) tokens:      TokenStream<'s>,
    pub(in crate::interpreter::parser) diagnostics: Vec<ParseError>,
    /// Number of `begin ... end` bodies currently being parsed.
    pub(in crate::interpreter::parser) depth:       usize,
}

impl<'s> Parser<'s> {
    /// Creates a parser reading from `tokens`.
    #[must_use]
    pub const fn new(tokens: TokenStream<'s>) -> Self {
        Self { tokens,
               diagnostics: Vec::new(),
               depth: 0 }
    }

    /// Parses a complete program.
    ///
    /// Grammar: `program := statement_sequence`
    ///
    /// After the statement sequence the input must be exhausted; any other
    /// token is reported as an unrecognized statement. A program without any
    /// statement is reported as well, unless other diagnostics already explain
    /// why nothing was parsed.
    ///
    /// # Example
    /// ```
    /// use plank::interpreter::{lexer::TokenStream, parser::core::Parser};
    ///
    /// let outcome = Parser::new(TokenStream::new("print 1\nend")).parse_program();
    /// assert!(outcome.program.is_none());
    /// assert_eq!(outcome.diagnostics[0].to_string(), "2: Unrecognized statement");
    /// ```
    #[must_use]
    pub fn parse_program(mut self) -> ParseOutcome {
        let program = self.parse_statement_sequence();

        let (token, line) = self.tokens.get();
        if token != Token::Done {
            self.report(ParseError::UnrecognizedStatement { line });
        }

        if program.is_none() && self.diagnostics.is_empty() {
            self.report(ParseError::NoStatements { line });
        }

        let program = if self.diagnostics.is_empty() { program } else { None };

        ParseOutcome { program,
                       diagnostics: self.diagnostics }
    }

    /// Records a diagnostic and keeps parsing.
    pub(in crate::interpreter::parser) fn report(&mut self, error: ParseError) {
        self.diagnostics.push(error);
    }

    /// Returns the line of the next token without consuming it.
    pub(in crate::interpreter::parser) fn peek_line(&mut self) -> usize {
        let lexeme = self.tokens.get();
        let line = lexeme.1;
        self.tokens.push_back(lexeme);
        line
    }
}
