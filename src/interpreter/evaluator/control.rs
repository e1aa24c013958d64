use std::io::Write;

use crate::{
    ast::{Expr, StatementSequence},
    interpreter::evaluator::core::{Context, EvalResult},
};

/// Number of times a `loop` body runs.
pub const LOOP_REPETITIONS: usize = 4;

impl<W: Write> Context<W> {
    /// Evaluates an `if` statement.
    ///
    /// The guard is evaluated once. The body runs only if the guard is the
    /// integer `1`; every other value skips the body without an error.
    ///
    /// # Parameters
    /// - `condition`: The guard expression.
    /// - `body`: Statements to run when the guard holds.
    pub fn eval_if(&mut self, condition: &Expr, body: &StatementSequence) -> EvalResult<()> {
        if self.eval(condition)?.is_true() {
            self.eval_sequence(body)?;
        }
        Ok(())
    }

    /// Evaluates a `loop` statement.
    ///
    /// The body runs exactly [`LOOP_REPETITIONS`] times. The guard is never
    /// evaluated, so it cannot fail and does not affect the repetition count.
    ///
    /// # Parameters
    /// - `_condition`: The guard expression, ignored.
    /// - `body`: Statements to repeat.
    ///
    /// # Example
    /// ```
    /// use plank::run;
    ///
    /// let mut out = Vec::new();
    /// run("loop 0 begin print 1 end", &mut out).unwrap();
    /// assert_eq!(out, b"1111");
    /// ```
    pub fn eval_loop(&mut self, _condition: &Expr, body: &StatementSequence) -> EvalResult<()> {
        for _ in 0..LOOP_REPETITIONS {
            self.eval_sequence(body)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::RuntimeError, run};

    fn output(source: &str) -> Result<String, RuntimeError> {
        let mut out = Vec::new();
        run(source, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn if_runs_only_for_exactly_one() {
        assert_eq!(output("if 1 begin print 1 end").unwrap(), "1");
        assert_eq!(output("if 0 begin print 1 end").unwrap(), "");
        assert_eq!(output("if 2 begin print 1 end").unwrap(), "");
        assert_eq!(output("if 3 - 2 begin print \"yes\" end").unwrap(), "yes");
        assert_eq!(output("if \"1\" begin print 1 end").unwrap(), "");
    }

    #[test]
    fn if_guard_errors_are_fatal() {
        assert_eq!(output("if x begin print 1 end"),
                   Err(RuntimeError::UndefinedSymbol { name: "x".to_string(),
                                                       line: 0, }));
    }

    #[test]
    fn loop_repeats_four_times_regardless_of_guard() {
        assert_eq!(output("loop 0 begin print 1 end").unwrap(), "1111");
        assert_eq!(output("loop 1 begin print \"a\" end").unwrap(), "aaaa");
    }

    #[test]
    fn loop_guard_is_never_evaluated() {
        assert_eq!(output("loop undefined begin print 2 end").unwrap(), "2222");
    }

    #[test]
    fn loop_body_sees_its_own_assignments() {
        let source = "set n 0\nloop n begin\nset n n + 1\nprint n\nend";
        assert_eq!(output(source).unwrap(), "1234");
    }

    #[test]
    fn loops_nest() {
        assert_eq!(output("loop 1 begin loop 1 begin print 1 end end").unwrap().len(),
                   16);
    }
}
