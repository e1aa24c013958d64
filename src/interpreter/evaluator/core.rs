use std::{collections::HashMap, io::Write};

use crate::{
    ast::{Expr, Statement, StatementSequence},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the symbol table with every
/// assignment made so far and the sink that `print` writes to.
///
/// ## Usage
///
/// `Context` is created once per program run. There is a single global scope;
/// a `set` anywhere, including inside `if` and `loop` bodies, is visible to
/// every later statement.
pub struct Context<W: Write> {
    /// A mapping from symbol names to their current values.
    pub symbols: HashMap<String, Value>,
    out:         W,
}

impl<W: Write> Context<W> {
    /// Creates a new evaluation context with an empty symbol table that
    /// prints to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { symbols: HashMap::new(),
               out }
    }

    /// Consumes the context and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant. Binary operators evaluate their
    /// left operand before the right one.
    ///
    /// # Example
    /// ```
    /// use plank::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new(Vec::new());
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Integer { value: 6, line: 0 }),
    ///                             op:    BinaryOperator::Div,
    ///                             right: Box::new(Expr::Integer { value: 4, line: 0 }),
    ///                             line:  0, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Value::Integer(1));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Integer { value, .. } => Ok(Value::Integer(*value)),
            Expr::Str { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Identifier { name, line } => self.eval_variable(name, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// Statements produce no value; they change the symbol table or write to
    /// the output sink.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::If { condition, body, .. } => self.eval_if(condition, body),
            Statement::Loop { condition, body, .. } => self.eval_loop(condition, body),
            Statement::Set { name, value, .. } => {
                let value = self.eval(value)?;
                self.symbols.insert(name.clone(), value);
                Ok(())
            },
            Statement::Print { expr, line } => {
                let value = self.eval(expr)?;
                self.print(&value, *line)
            },
        }
    }

    /// Evaluates statements in source order, stopping at the first runtime
    /// error.
    pub fn eval_sequence(&mut self, sequence: &StatementSequence) -> EvalResult<()> {
        for statement in &sequence.statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// Looks up the current value of a symbol.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.symbols.get(name)
    }

    /// Flushes everything printed so far to the output sink.
    pub fn flush(&mut self, line: usize) -> EvalResult<()> {
        self.out
            .flush()
            .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                line })
    }

    pub(in crate::interpreter::evaluator) fn print(&mut self,
                                                   value: &Value,
                                                   line: usize)
                                                   -> EvalResult<()> {
        write!(self.out, "{value}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                        line })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::RuntimeError, parse};

    fn run_program(source: &str) -> (EvalResult<()>, Context<Vec<u8>>) {
        let program = parse(source).program.expect("program should parse");
        let mut context = Context::new(Vec::new());
        let result = context.eval_sequence(&program);
        (result, context)
    }

    fn output(context: Context<Vec<u8>>) -> String {
        String::from_utf8(context.into_output()).unwrap()
    }

    #[test]
    fn set_then_print_round_trips() {
        let (result, context) = run_program("set x 5\nprint x");
        assert!(result.is_ok());
        assert_eq!(context.get_variable("x"), Some(&Value::Integer(5)));
        assert_eq!(output(context), "5");
    }

    #[test]
    fn set_overwrites_previous_bindings() {
        let (result, context) = run_program("set x 1\nset x \"one\"\nprint x");
        assert!(result.is_ok());
        assert_eq!(output(context), "one");
    }

    #[test]
    fn statements_run_in_source_order() {
        let (result, context) = run_program("print 1; print \" \"; print 2\nprint \"!\"");
        assert!(result.is_ok());
        assert_eq!(output(context), "1 2!");
    }

    #[test]
    fn undefined_symbols_stop_evaluation() {
        let (result, context) = run_program("print 1\nprint y\nprint 2");
        assert_eq!(result,
                   Err(RuntimeError::UndefinedSymbol { name: "y".to_string(),
                                                       line: 1, }));
        assert_eq!(output(context), "1");
    }

    #[test]
    fn failed_print_writes_nothing() {
        let (result, context) = run_program("print 5/0");
        assert_eq!(result, Err(RuntimeError::DivisionByZero { line: 0 }));
        assert_eq!(output(context), "");
    }

    #[test]
    fn assignments_inside_bodies_are_global() {
        let (result, context) = run_program("if 1 begin set x \"in\" end\nprint x");
        assert!(result.is_ok());
        assert_eq!(output(context), "in");
    }
}
