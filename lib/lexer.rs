use crate::error::InterpreterError;
use crate::token::Token;

pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let char = chars.first().copied();
        Self {
            chars,
            position: 0,
            char,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, InterpreterError> {
        while self.char.is_some_and(|char| char.is_whitespace()) {
            self.read_char();
        }

        let token = match self.char {
            Some(char) => match char {
                '=' if self.is_next_char('>') => {
                    self.read_char();
                    Some(Token::Arrow)
                }
                '=' => Some(Token::Assign),
                '+' | '-' => Some(Token::Additive(char.to_string())),
                '*' | '/' | '%' => Some(Token::Multiplicative(char.to_string())),
                '(' => Some(Token::Lparen),
                ')' => Some(Token::Rparen),
                _ if char.is_ascii_digit() => Some(Token::Number(self.read_number())),
                '.' if self.next_char().is_some_and(|char| char.is_ascii_digit()) => {
                    Some(Token::Number(self.read_number()))
                }
                _ if char.is_ascii_alphabetic() || char == '_' => {
                    let literal =
                        self.read_until(|char| !char.is_ascii_alphanumeric() && char != '_');
                    match literal.as_str() {
                        "fn" => Some(Token::Fn),
                        _ => Some(Token::Ident(literal)),
                    }
                }
                _ => return Err(InterpreterError::IllegalCharacter(char)),
            },
            None => None,
        };

        self.read_char();

        Ok(token)
    }

    fn read_char(&mut self) {
        self.position += 1;
        self.char = self.chars.get(self.position).copied();
    }

    fn next_char(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    fn is_next_char(&self, ch: char) -> bool {
        self.next_char() == Some(ch)
    }

    fn read_until(&mut self, condition: impl Fn(char) -> bool) -> String {
        let mut literal = String::new();
        while let Some(char) = self.char {
            if condition(char) {
                self.position -= 1;
                break;
            }
            literal.push(char);
            self.read_char();
        }
        literal
    }

    /// An optional integer part, then an optional `.` that must be followed
    /// by at least one digit. A bare trailing `.` is not part of the number.
    fn read_number(&mut self) -> String {
        let mut literal = self.read_digits();
        if self.char == Some('.') && self.next_char().is_some_and(|char| char.is_ascii_digit()) {
            literal.push('.');
            self.read_char();
            literal.push_str(&self.read_digits());
        }
        self.position -= 1;
        literal
    }

    fn read_digits(&mut self) -> String {
        let mut literal = String::new();
        while let Some(char) = self.char {
            if !char.is_ascii_digit() {
                break;
            }
            literal.push(char);
            self.read_char();
        }
        literal
    }
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, InterpreterError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer() {
        let input = "fn pair x y => (x + y) * (x + y + 1) / 2 + y";

        let mut lexer = Lexer::new(input);

        let mut expected = vec![
            Token::Fn,
            Token::Ident("pair".to_string()),
            Token::Ident("x".to_string()),
            Token::Ident("y".to_string()),
            Token::Arrow,
            Token::Lparen,
            Token::Ident("x".to_string()),
            Token::Additive("+".to_string()),
            Token::Ident("y".to_string()),
            Token::Rparen,
            Token::Multiplicative("*".to_string()),
            Token::Lparen,
            Token::Ident("x".to_string()),
            Token::Additive("+".to_string()),
            Token::Ident("y".to_string()),
            Token::Additive("+".to_string()),
            Token::Number("1".to_string()),
            Token::Rparen,
            Token::Multiplicative("/".to_string()),
            Token::Number("2".to_string()),
            Token::Additive("+".to_string()),
            Token::Ident("y".to_string()),
        ]
        .into_iter();

        while let Some(token) = lexer.next_token().unwrap() {
            let expected_token = expected.next().unwrap();
            assert_eq!(token, expected_token);
        }
        assert_eq!(expected.next(), None);
    }

    #[test]
    fn operators_and_assignment() {
        let tokens = tokenize("x = 7 % 4 - 2 * 3 / 1").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("x".to_string()),
                Token::Assign,
                Token::Number("7".to_string()),
                Token::Multiplicative("%".to_string()),
                Token::Number("4".to_string()),
                Token::Additive("-".to_string()),
                Token::Number("2".to_string()),
                Token::Multiplicative("*".to_string()),
                Token::Number("3".to_string()),
                Token::Multiplicative("/".to_string()),
                Token::Number("1".to_string()),
            ]
        );
    }

    #[test]
    fn number_forms() {
        let cases = vec![
            ("12", vec![Token::Number("12".to_string())]),
            ("1.5", vec![Token::Number("1.5".to_string())]),
            (".5", vec![Token::Number(".5".to_string())]),
            (
                "1.5.5",
                vec![
                    Token::Number("1.5".to_string()),
                    Token::Number(".5".to_string()),
                ],
            ),
            (
                "2x",
                vec![Token::Number("2".to_string()), Token::Ident("x".to_string())],
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(tokenize(input).unwrap(), expected, "input: {input}");
        }
    }

    #[test]
    fn underscored_identifiers() {
        let tokens = tokenize("_tmp fn2 fnord").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("_tmp".to_string()),
                Token::Ident("fn2".to_string()),
                Token::Ident("fnord".to_string()),
            ]
        );
    }

    #[test]
    fn illegal_characters_are_rejected() {
        for input in ["1 + $", "a & b", "12.", "#"] {
            let err = tokenize(input).unwrap_err();
            assert!(
                matches!(err, InterpreterError::IllegalCharacter(_)),
                "input: {input}, got {err:?}"
            );
        }
    }

    #[test]
    fn empty_input_produces_no_tokens() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("   \t ").unwrap(), vec![]);
    }
}
