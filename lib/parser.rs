use crate::{
    ast::ParseNode,
    environment::{Environment, FunctionDef},
    error::InterpreterError,
    stream::{reclassify, TokenStream},
    token::Token,
};

/// A declaration being parsed right now. Its name and arity are visible to
/// reclassification before the definition is stored, which is what lets a
/// function body call the function being declared.
struct Signature {
    name: String,
    arity: usize,
}

/// Recursive-descent parser for one statement, single token of lookahead:
///
/// ```text
/// Statement    := "fn" FunctionDecl | Expr
/// FunctionDecl := Ident Ident+ "=>" Expr
/// Expr         := AssignExpr
/// AssignExpr   := AddExpr ("=" Expr)?            right-associative
/// AddExpr      := MultExpr (("+"|"-") MultExpr)*     left-folded
/// MultExpr     := Factor  (("*"|"/"|"%") Factor)*    left-folded
/// Factor       := Number | Ident | "(" Expr ")" | Function Expr{N}
/// ```
///
/// The parser reads the Environment to classify identifiers and to learn call
/// arities, and writes to it only once a declaration has fully parsed.
pub struct Parser<'a> {
    tokens: TokenStream,
    env: &'a mut Environment,
    pending: Option<Signature>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: TokenStream, env: &'a mut Environment) -> Self {
        Self {
            tokens,
            env,
            pending: None,
        }
    }

    /// Parses one full statement. A declaration is stored into the
    /// Environment and yields `None`; an expression yields its tree.
    /// Trailing tokens after either form are rejected, and a statement that
    /// fails to parse leaves the Environment untouched.
    pub fn parse_statement(&mut self) -> Result<Option<ParseNode>, InterpreterError> {
        if self.peek().variant_eq(&Token::Fn) {
            let (name, def) = self.parse_function()?;
            self.ensure_exhausted()?;
            self.env.declare_function(&name, def);
            Ok(None)
        } else {
            let expr = self.parse_expr()?;
            self.ensure_exhausted()?;
            Ok(Some(expr))
        }
    }

    fn classify(&self, token: Token) -> Token {
        reclassify(token, |name| {
            self.env.is_function(name)
                || self.pending.as_ref().is_some_and(|sig| sig.name == name)
        })
    }

    fn peek(&self) -> Token {
        self.classify(self.tokens.peek())
    }

    fn take(&mut self) -> Token {
        let token = self.tokens.take();
        self.classify(token)
    }

    fn expect(&mut self, expected: Token) -> Result<Token, InterpreterError> {
        let token = self.peek();
        if token.variant_eq(&expected) {
            Ok(self.take())
        } else {
            Err(InterpreterError::syntax(expected.to_string(), token))
        }
    }

    fn ensure_exhausted(&self) -> Result<(), InterpreterError> {
        if self.tokens.is_exhausted() {
            return Ok(());
        }
        let rest: Vec<String> = self.tokens.rest().iter().map(Token::to_string).collect();
        Err(InterpreterError::TrailingInput(rest.join(" ")))
    }

    /// `fn name p1 .. pk => body`, k >= 1. Returns the parsed definition
    /// without storing it; the caller stores it after the trailing-input
    /// check so a failing declaration has no side effect.
    fn parse_function(&mut self) -> Result<(String, FunctionDef), InterpreterError> {
        self.expect(Token::Fn)?;
        let name = self.take_ident("function name")?;

        let mut params = vec![self.take_ident("parameter name")?];
        while matches!(self.peek(), Token::Ident(_) | Token::Function(_)) {
            params.push(self.take_ident("parameter name")?);
        }
        for (i, param) in params.iter().enumerate() {
            if params[..i].contains(param) {
                return Err(InterpreterError::DuplicateParameter(param.clone()));
            }
        }

        // Visible to the body for recursive calls.
        self.pending = Some(Signature {
            name: name.clone(),
            arity: params.len(),
        });
        self.expect(Token::Arrow)?;
        let body = self.parse_expr()?;
        self.pending = None;

        Ok((name, FunctionDef { params, body }))
    }

    /// Declaration-position identifiers accept function tokens too, so that
    /// `fn pair ..` can redeclare an existing `pair`.
    fn take_ident(&mut self, role: &str) -> Result<String, InterpreterError> {
        match self.take() {
            Token::Ident(name) | Token::Function(name) => Ok(name),
            token => Err(InterpreterError::syntax(role, token)),
        }
    }

    fn parse_expr(&mut self) -> Result<ParseNode, InterpreterError> {
        self.parse_assign()
    }

    fn parse_assign(&mut self) -> Result<ParseNode, InterpreterError> {
        let lhs = self.parse_additive()?;
        if !self.peek().variant_eq(&Token::Assign) {
            return Ok(lhs);
        }
        self.take();
        if !matches!(lhs, ParseNode::Variable(_)) {
            return Err(InterpreterError::syntax("assignable variable", lhs));
        }
        // Right-associative: x = y = 1 is x = (y = 1).
        let value = self.parse_expr()?;
        Ok(ParseNode::Assignment {
            target: Box::new(lhs),
            value: Box::new(value),
        })
    }

    fn parse_additive(&mut self) -> Result<ParseNode, InterpreterError> {
        let mut node = self.parse_multiplicative()?;
        while let Token::Additive(_) = self.peek() {
            let op = self.take();
            let right = self.parse_multiplicative()?;
            node = ParseNode::Add {
                left: Box::new(node),
                op: Box::new(ParseNode::Operator(op)),
                right: Box::new(right),
            };
        }
        Ok(node)
    }

    fn parse_multiplicative(&mut self) -> Result<ParseNode, InterpreterError> {
        let mut node = self.parse_factor()?;
        while let Token::Multiplicative(_) = self.peek() {
            let op = self.take();
            let right = self.parse_factor()?;
            node = ParseNode::Mult {
                left: Box::new(node),
                op: Box::new(ParseNode::Operator(op)),
                right: Box::new(right),
            };
        }
        Ok(node)
    }

    fn parse_factor(&mut self) -> Result<ParseNode, InterpreterError> {
        match self.take() {
            token @ Token::Number(_) => Ok(ParseNode::Number(token)),
            token @ Token::Ident(_) => Ok(ParseNode::Variable(token)),
            Token::Lparen => {
                let inner = self.parse_expr()?;
                self.expect(Token::Rparen)?;
                Ok(ParseNode::Parenthesized(Box::new(inner)))
            }
            Token::Function(name) => {
                // The arity is known from the declaration, so exactly that
                // many full expressions are parsed greedily as arguments; no
                // parentheses or separators are involved.
                let arity = self.arity(&name)?;
                let mut arguments = Vec::with_capacity(arity);
                for _ in 0..arity {
                    arguments.push(self.parse_expr()?);
                }
                Ok(ParseNode::Call {
                    name: Box::new(ParseNode::FunctionName(Token::Function(name))),
                    arguments,
                })
            }
            token => Err(InterpreterError::syntax("expression", token)),
        }
    }

    fn arity(&self, name: &str) -> Result<usize, InterpreterError> {
        if let Some(def) = self.env.function(name) {
            return Ok(def.params.len());
        }
        if let Some(sig) = self.pending.as_ref().filter(|sig| sig.name == name) {
            return Ok(sig.arity);
        }
        Err(InterpreterError::UndefinedFunction(name.to_string()))
    }
}
