use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(String),
    Ident(String),
    /// An identifier naming a currently declared function. Never produced by
    /// the lexer; only `stream::reclassify` builds this variant.
    Function(String),
    /// `+` or `-`, lexeme retained for evaluation.
    Additive(String),
    /// `*`, `/` or `%`, lexeme retained for evaluation.
    Multiplicative(String),

    Assign,
    Lparen,
    Rparen,
    Arrow,

    Fn,

    /// Sentinel returned when peeking past the end of a statement.
    Eof,
}

impl Token {
    pub fn variant_eq(&self, other: &Token) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Ident(name) => write!(f, "{}", name),
            Token::Function(name) => write!(f, "{}", name),
            Token::Additive(op) => write!(f, "{}", op),
            Token::Multiplicative(op) => write!(f, "{}", op),

            Token::Assign => write!(f, "="),
            Token::Lparen => write!(f, "("),
            Token::Rparen => write!(f, ")"),
            Token::Arrow => write!(f, "=>"),

            Token::Fn => write!(f, "fn"),

            Token::Eof => write!(f, "end of input"),
        }
    }
}
