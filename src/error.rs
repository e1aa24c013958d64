/// Parsing errors.
///
/// Defines every diagnostic the parser can report. Each diagnostic carries
/// the line it was detected on and renders as `<line>: <message>`, with the
/// line counted from 1.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all errors that can be raised during evaluation, such as type
/// mismatches, division by zero or reading an undefined symbol. Every runtime
/// error is fatal.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
