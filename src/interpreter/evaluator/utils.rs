use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Looks up a symbol and returns a copy of its value.
    ///
    /// Unlike [`Context::get_variable`], an unbound symbol is an error here.
    /// Evaluating an identifier never binds it.
    ///
    /// # Parameters
    /// - `name`: Symbol to look up.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// Returns `UndefinedSymbol` if no `set` has bound `name` yet.
    ///
    /// # Example
    /// ```
    /// use plank::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new(Vec::new());
    /// context.symbols.insert("x".to_string(), Value::Integer(5));
    ///
    /// assert_eq!(context.eval_variable("x", 0).unwrap(), Value::Integer(5));
    /// assert_eq!(context.eval_variable("y", 3).unwrap_err().to_string(),
    ///            "Symbol y not defined");
    /// ```
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedSymbol { name: name.to_string(),
                                                           line })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_does_not_bind() {
        let context = Context::new(Vec::new());
        assert!(context.eval_variable("x", 0).is_err());
        assert!(context.get_variable("x").is_none());
    }

    #[test]
    fn lookup_returns_an_independent_copy() {
        let mut context = Context::new(Vec::new());
        context.symbols.insert("s".to_string(), Value::from("ab"));
        let value = context.eval_variable("s", 0).unwrap();
        context.symbols.insert("s".to_string(), Value::from("cd"));
        assert_eq!(value, Value::from("ab"));
    }

    #[test]
    fn print_writes_the_plain_rendering() {
        let mut context = Context::new(Vec::new());
        context.print(&Value::from("\"q\""), 0).unwrap();
        context.print(&Value::Integer(-3), 0).unwrap();
        assert_eq!(context.into_output(), b"\"q\"-3");
    }
}
