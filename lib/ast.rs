use std::fmt;

use crate::token::Token;

/// One statement's parse tree. Leaves hold exactly one token; internal nodes
/// hold only child nodes, with arity fixed by the variant (`Add`/`Mult` carry
/// their operator as an `Operator` leaf child, `Call` carries a `FunctionName`
/// leaf plus one child per argument). Trees are immutable once built and are
/// discarded after evaluation.
#[derive(Debug, PartialEq, Clone)]
pub enum ParseNode {
    Number(Token),
    Variable(Token),
    Operator(Token),
    FunctionName(Token),
    Assignment {
        target: Box<ParseNode>,
        value: Box<ParseNode>,
    },
    Add {
        left: Box<ParseNode>,
        op: Box<ParseNode>,
        right: Box<ParseNode>,
    },
    Mult {
        left: Box<ParseNode>,
        op: Box<ParseNode>,
        right: Box<ParseNode>,
    },
    Parenthesized(Box<ParseNode>),
    Call {
        name: Box<ParseNode>,
        arguments: Vec<ParseNode>,
    },
}

impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseNode::Number(token)
            | ParseNode::Variable(token)
            | ParseNode::Operator(token)
            | ParseNode::FunctionName(token) => write!(f, "{}", token),
            ParseNode::Assignment { target, value } => write!(f, "({} = {})", target, value),
            ParseNode::Add { left, op, right } | ParseNode::Mult { left, op, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
            ParseNode::Parenthesized(inner) => write!(f, "({})", inner),
            ParseNode::Call { name, arguments } => {
                let arguments: Vec<String> = arguments.iter().map(|a| format!("{}", a)).collect();
                write!(f, "{}({})", name, arguments.join(", "))
            }
        }
    }
}
