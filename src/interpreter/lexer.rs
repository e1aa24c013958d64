use logos::Logos;

/// Represents a lexical token in the source input.
///
/// Most variants are produced by the generated lexer. [`Token::Done`] and
/// [`Token::Error`] are produced by [`TokenStream`] for the end of the input
/// and for text the lexer does not recognize.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello"`. The quotes are not kept.
    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),
    /// `if`
    #[token("if")]
    If,
    /// `loop`
    #[token("loop")]
    Loop,
    /// `set`
    #[token("set")]
    Set,
    /// `print`
    #[token("print")]
    Print,
    /// `begin`
    #[token("begin")]
    Begin,
    /// `end`
    #[token("end")]
    End,
    /// Identifier tokens; symbol names such as `x` or `total2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Line breaks. Like `;`, they separate statements.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input.
    Done,
    /// Unrecognized input, such as a stray character or an unterminated
    /// string.
    Error(String),
}

impl Token {
    /// Returns `true` for `;` and line breaks.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::Semicolon | Self::NewLine)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics. Lines are counted from 0.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token together with the 0-based line it starts on.
pub type Lexeme = (Token, usize);

/// A pull-based token source with a single token of pushback.
///
/// The parser takes tokens one at a time with [`TokenStream::get`] and may
/// return the last one with [`TokenStream::push_back`] when it only needed to
/// look at it. Once the input is exhausted every call to `get` returns
/// [`Token::Done`].
///
/// # Example
/// ```
/// use plank::interpreter::lexer::{Token, TokenStream};
///
/// let mut tokens = TokenStream::new("print 1");
/// let first = tokens.get();
/// assert_eq!(first, (Token::Print, 0));
///
/// tokens.push_back(first);
/// assert_eq!(tokens.get(), (Token::Print, 0));
/// assert_eq!(tokens.get(), (Token::Integer(1), 0));
/// assert_eq!(tokens.get(), (Token::Done, 0));
/// ```
pub struct TokenStream<'s> {
    lexer:       logos::Lexer<'s, Token>,
    pushed_back: Option<Lexeme>,
}

impl<'s> TokenStream<'s> {
    /// Creates a token stream over `source`, starting at line 0.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { lexer:       Token::lexer_with_extras(source, LexerExtras { line: 0 }),
               pushed_back: None, }
    }

    /// Returns and consumes the next token.
    ///
    /// A pushed back token is returned first. Unrecognized input becomes a
    /// [`Token::Error`] holding the offending text.
    pub fn get(&mut self) -> Lexeme {
        if let Some(lexeme) = self.pushed_back.take() {
            return lexeme;
        }

        // Newlines are tokens, so the line cannot change while skipping
        // whitespace before the next token.
        let line = self.lexer.extras.line;
        match self.lexer.next() {
            Some(Ok(token)) => (token, line),
            Some(Err(())) => (Token::Error(self.lexer.slice().to_string()), line),
            None => (Token::Done, line),
        }
    }

    /// Returns `lexeme` to the stream so that the next [`TokenStream::get`]
    /// yields it again.
    ///
    /// Only one token may be pending at a time.
    pub fn push_back(&mut self, lexeme: Lexeme) {
        debug_assert!(self.pushed_back.is_none(), "a token is already pushed back");
        self.pushed_back = Some(lexeme);
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit into an `i64`, which turns the
///   token into an error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Lexeme> {
        let mut stream = TokenStream::new(source);
        let mut out = Vec::new();
        loop {
            let lexeme = stream.get();
            if lexeme.0 == Token::Done {
                break;
            }
            out.push(lexeme);
        }
        out
    }

    #[test]
    fn keywords_identifiers_and_literals() {
        assert_eq!(tokens("set x1 \"a b\" + 12"),
                   vec![(Token::Set, 0),
                        (Token::Identifier("x1".to_string()), 0),
                        (Token::Str("a b".to_string()), 0),
                        (Token::Plus, 0),
                        (Token::Integer(12), 0)]);
    }

    #[test]
    fn keyword_prefixes_are_identifiers() {
        assert_eq!(tokens("ifx ending"),
                   vec![(Token::Identifier("ifx".to_string()), 0),
                        (Token::Identifier("ending".to_string()), 0)]);
    }

    #[test]
    fn newlines_advance_the_line_counter() {
        assert_eq!(tokens("print 1\nprint 2;"),
                   vec![(Token::Print, 0),
                        (Token::Integer(1), 0),
                        (Token::NewLine, 0),
                        (Token::Print, 1),
                        (Token::Integer(2), 1),
                        (Token::Semicolon, 1)]);
    }

    #[test]
    fn unknown_characters_become_error_tokens() {
        assert_eq!(tokens("print @"),
                   vec![(Token::Print, 0), (Token::Error("@".to_string()), 0)]);
    }

    #[test]
    fn oversized_integers_become_error_tokens() {
        let lexed = tokens("99999999999999999999");
        assert!(matches!(lexed.as_slice(), [(Token::Error(_), 0)]));
    }

    #[test]
    fn done_repeats_at_end_of_input() {
        let mut stream = TokenStream::new("\n");
        assert_eq!(stream.get(), (Token::NewLine, 0));
        assert_eq!(stream.get(), (Token::Done, 1));
        assert_eq!(stream.get(), (Token::Done, 1));
    }
}
