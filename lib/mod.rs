pub mod environment;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod stream;

mod ast;
mod error;
mod interpreter;
mod token;

pub use ast::ParseNode;
pub use error::InterpreterError;
pub use interpreter::Interpreter;
pub use token::Token;
