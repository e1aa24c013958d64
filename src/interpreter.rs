/// The evaluator module executes a parsed program.
///
/// The evaluator walks the syntax tree, evaluates expressions, applies the
/// arithmetic operators, keeps the symbol table and writes printed values to
/// the output sink.
///
/// # Responsibilities
/// - Evaluates every statement and expression variant.
/// - Stores assignments in a single global symbol table.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for the parser.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// keywords, identifiers, literals, operators and statement separators. The
/// stream supports pushing a single token back for one-token lookahead.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Marks unrecognized input with an error token instead of failing.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser is a recursive-descent parser with one function per grammar
/// rule. Grammar violations are collected as diagnostics while parsing
/// continues with the next statement.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Applies operator precedence and associativity.
/// - Collects line-tagged diagnostics for malformed input.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: error, integer and string.
/// - Renders values for printing.
pub mod value;
