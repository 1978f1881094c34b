use std::collections::HashMap;

use crate::{
    ast::ParseNode,
    environment::Environment,
    error::InterpreterError,
    token::Token,
};

/// Walks a parse tree and produces a number. `Operator` and `FunctionName`
/// leaves only ever occur as children of other nodes; reaching one here is a
/// parser defect, surfaced as `Internal`.
pub fn eval(node: &ParseNode, env: &mut Environment) -> Result<f64, InterpreterError> {
    match node {
        ParseNode::Number(token) => eval_number(token),
        ParseNode::Variable(token) => {
            let name = token.to_string();
            env.get_var(&name)
                .ok_or(InterpreterError::UndefinedVariable(name))
        }
        ParseNode::Parenthesized(inner) => eval(inner, env),
        ParseNode::Add { left, op, right } | ParseNode::Mult { left, op, right } => {
            eval_binary(left, op, right, env)
        }
        ParseNode::Assignment { target, value } => eval_assignment(target, value, env),
        ParseNode::Call { name, arguments } => eval_call(name, arguments, env),
        ParseNode::Operator(token) => Err(InterpreterError::Internal(format!(
            "cannot evaluate bare operator `{}`",
            token
        ))),
        ParseNode::FunctionName(token) => Err(InterpreterError::Internal(format!(
            "cannot evaluate bare function name `{}`",
            token
        ))),
    }
}

fn eval_number(token: &Token) -> Result<f64, InterpreterError> {
    let literal = token.to_string();
    literal
        .parse::<f64>()
        .map_err(|err| InterpreterError::Internal(format!("bad number literal {literal:?}: {err}")))
}

fn eval_binary(
    left: &ParseNode,
    op: &ParseNode,
    right: &ParseNode,
    env: &mut Environment,
) -> Result<f64, InterpreterError> {
    let lhs = eval(left, env)?;
    let rhs = eval(right, env)?;
    // Division and remainder by zero follow IEEE semantics, not an error.
    match operator_lexeme(op)? {
        "+" => Ok(lhs + rhs),
        "-" => Ok(lhs - rhs),
        "*" => Ok(lhs * rhs),
        "/" => Ok(lhs / rhs),
        "%" => Ok(lhs % rhs),
        other => Err(InterpreterError::Internal(format!(
            "invalid binary operator `{other}`"
        ))),
    }
}

fn operator_lexeme(node: &ParseNode) -> Result<&str, InterpreterError> {
    match node {
        ParseNode::Operator(Token::Additive(op))
        | ParseNode::Operator(Token::Multiplicative(op)) => Ok(op),
        other => Err(InterpreterError::Internal(format!(
            "expected an operator node, found `{other}`"
        ))),
    }
}

fn eval_assignment(
    target: &ParseNode,
    value: &ParseNode,
    env: &mut Environment,
) -> Result<f64, InterpreterError> {
    let value = eval(value, env)?;
    match target {
        ParseNode::Variable(token) => {
            env.set_var(&token.to_string(), value);
            Ok(value)
        }
        other => Err(InterpreterError::Internal(format!(
            "cannot assign to `{other}`"
        ))),
    }
}

/// Arguments are evaluated in the caller's scope before the callee's frame
/// exists; the frame is popped on every exit path, error included.
fn eval_call(
    name: &ParseNode,
    arguments: &[ParseNode],
    env: &mut Environment,
) -> Result<f64, InterpreterError> {
    let name = match name {
        ParseNode::FunctionName(token) => token.to_string(),
        other => {
            return Err(InterpreterError::Internal(format!(
                "expected a function name node, found `{other}`"
            )))
        }
    };
    let def = env
        .function(&name)
        .cloned()
        .ok_or(InterpreterError::UndefinedFunction(name))?;

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(eval(argument, env)?);
    }
    if args.len() != def.params.len() {
        return Err(InterpreterError::Internal(format!(
            "call arity mismatch: want {}, got {}",
            def.params.len(),
            args.len()
        )));
    }

    let frame: HashMap<String, f64> = def.params.iter().cloned().zip(args).collect();
    env.push_frame(frame);
    let result = eval(&def.body, env);
    env.pop_frame();
    result
}
