use crate::token::Token;

/// A cursor over one statement's tokens with single-token lookahead. Peeking
/// or taking past the end yields the `Eof` sentinel.
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub fn peek(&self) -> Token {
        self.tokens.get(self.position).cloned().unwrap_or(Token::Eof)
    }

    pub fn take(&mut self) -> Token {
        let token = self.peek();
        if !self.is_exhausted() {
            self.position += 1;
        }
        token
    }

    pub fn rest(&self) -> &[Token] {
        &self.tokens[self.position.min(self.tokens.len())..]
    }
}

/// The contextual view over a raw token: an identifier becomes a function
/// token exactly when `is_function` says its name is currently declared.
/// Whether an identifier denotes a call target depends on live session state,
/// so this runs lazily at every parser observation rather than rewriting the
/// token list up front. Pure: builds a new token, never edits in place.
pub fn reclassify(token: Token, is_function: impl Fn(&str) -> bool) -> Token {
    match token {
        Token::Ident(name) if is_function(&name) => Token::Function(name),
        token => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_consume() {
        let stream = TokenStream::new(vec![Token::Number("1".to_string())]);
        assert_eq!(stream.peek(), Token::Number("1".to_string()));
        assert_eq!(stream.peek(), Token::Number("1".to_string()));
        assert!(!stream.is_exhausted());
    }

    #[test]
    fn take_consumes_in_order() {
        let mut stream = TokenStream::new(vec![
            Token::Number("1".to_string()),
            Token::Additive("+".to_string()),
            Token::Number("2".to_string()),
        ]);
        assert_eq!(stream.take(), Token::Number("1".to_string()));
        assert_eq!(stream.take(), Token::Additive("+".to_string()));
        assert_eq!(stream.rest(), &[Token::Number("2".to_string())]);
        assert_eq!(stream.take(), Token::Number("2".to_string()));
        assert!(stream.is_exhausted());
    }

    #[test]
    fn exhausted_stream_yields_eof() {
        let mut stream = TokenStream::new(vec![]);
        assert!(stream.is_exhausted());
        assert_eq!(stream.peek(), Token::Eof);
        assert_eq!(stream.take(), Token::Eof);
        assert_eq!(stream.take(), Token::Eof);
    }

    #[test]
    fn reclassify_promotes_declared_functions_only() {
        let declared = |name: &str| name == "pair";

        assert_eq!(
            reclassify(Token::Ident("pair".to_string()), declared),
            Token::Function("pair".to_string())
        );
        assert_eq!(
            reclassify(Token::Ident("x".to_string()), declared),
            Token::Ident("x".to_string())
        );
        // Non-identifiers pass through untouched.
        assert_eq!(reclassify(Token::Assign, declared), Token::Assign);
        assert_eq!(
            reclassify(Token::Number("2".to_string()), declared),
            Token::Number("2".to_string())
        );
    }
}
