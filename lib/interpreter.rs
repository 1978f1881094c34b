use crate::{
    environment::Environment,
    error::InterpreterError,
    evaluator,
    lexer,
    parser::Parser,
    stream::TokenStream,
};

/// One interpreter session. Statements are evaluated one at a time and share
/// the session's variable and function tables; there is no other state.
///
/// Evaluation is best effort: if a statement fails partway through, variable
/// writes that already happened are not rolled back. Callers that need
/// concurrent access must serialize whole statements behind one lock; no
/// finer granularity is meaningful when any two statements may touch the same
/// variable.
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Evaluates a single statement: `Ok(None)` for a function declaration,
    /// `Ok(Some(value))` for an expression.
    pub fn evaluate_statement(&mut self, input: &str) -> Result<Option<f64>, InterpreterError> {
        let tokens = lexer::tokenize(input)?;
        let mut parser = Parser::new(TokenStream::new(tokens), &mut self.env);
        match parser.parse_statement()? {
            Some(expr) => Ok(Some(evaluator::eval(&expr, &mut self.env)?)),
            None => Ok(None),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
