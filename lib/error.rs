use thiserror::Error;

/// Every way a statement can be rejected. A statement either fully succeeds
/// or surfaces exactly one of these; nothing is logged or retried internally.
#[derive(Debug, Error, PartialEq)]
pub enum InterpreterError {
    #[error("syntax error: expected {expected}, found {found}")]
    Syntax { expected: String, found: String },

    #[error("syntax error: unexpected trailing input starting at `{0}`")]
    TrailingInput(String),

    #[error("syntax error: illegal character {0:?}")]
    IllegalCharacter(char),

    #[error("syntax error: duplicate parameter name `{0}`")]
    DuplicateParameter(String),

    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),

    #[error("undefined function `{0}`")]
    UndefinedFunction(String),

    /// A parser defect, not user input: evaluation reached a node that only
    /// exists as a child of another node.
    #[error("internal error: {0}")]
    Internal(String),
}

impl InterpreterError {
    pub fn syntax(expected: impl Into<String>, found: impl ToString) -> Self {
        InterpreterError::Syntax {
            expected: expected.into(),
            found: found.to_string(),
        }
    }
}
