use std::iter;

use num_bigint::BigInt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Op {
    Plus,
    Minus,
    Mult,
    Div,
    Pow,
}

impl Op {
    pub fn symbol(&self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Mult => '*',
            Op::Div => '/',
            Op::Pow => '^',
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Variable(String),
    Number(BigInt),
    /// A run mixing letters and digits, e.g. `12ab`. Never valid in an expression.
    Word(String),
    UnaryOp(Op),
    BinaryOp(Op),
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Variable(name) | Token::Word(name) => write!(f, "{}", name),
            Token::Number(n) => write!(f, "{}", n),
            Token::UnaryOp(Op::Minus) => write!(f, "neg"),
            Token::UnaryOp(Op::Plus) => write!(f, "pos"),
            Token::UnaryOp(op) | Token::BinaryOp(op) => write!(f, "{}", op.symbol()),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerError {
    InvalidCharacter(char),
}

impl std::fmt::Display for TokenizerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenizerError::InvalidCharacter(c) => write!(f, "Invalid character: '{}'", c),
        }
    }
}

impl std::error::Error for TokenizerError {}

/// Writes a token sequence space-separated.
pub(crate) fn write_tokens(f: &mut std::fmt::Formatter, tokens: &[Token]) -> std::fmt::Result {
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", token)?;
    }
    Ok(())
}

#[derive(Default)]
pub struct Tokenizer {
    prev: Option<Token>,
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct TokenizedInput(pub Vec<Token>);

impl std::ops::Deref for TokenizedInput {
    type Target = Vec<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for TokenizedInput {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::fmt::Display for TokenizedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write_tokens(f, &self.0)
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self { prev: None }
    }

    /// A sign is binary only when it follows something that yields a value.
    fn makes_unary(&self) -> bool {
        !matches!(
            self.prev,
            Some(Token::Number(_))
                | Some(Token::Variable(_))
                | Some(Token::Word(_))
                | Some(Token::RParen)
        )
    }

    /// Classifies a maximal letter/digit run.
    fn classify(word: String) -> Token {
        if word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Token::Variable(word);
        }

        match word.parse::<BigInt>() {
            Ok(num) if word.chars().all(|c| c.is_ascii_digit()) => Token::Number(num),
            _ => Token::Word(word),
        }
    }

    /// Splits a line into tokens. Whitespace is dropped before scanning, so
    /// `1 2` reads as `12`.
    pub fn tokenize(&mut self, input: &str) -> Result<TokenizedInput, TokenizerError> {
        use Token::*;

        self.prev = None;

        let mut tokens = Vec::new();
        let mut chars = input.chars().filter(|c| !c.is_whitespace()).peekable();

        while let Some(c) = chars.next() {
            match c {
                c if c.is_ascii_alphanumeric() => {
                    let word: String = iter::once(c)
                        .chain(iter::from_fn(|| {
                            chars.by_ref().next_if(|c| c.is_ascii_alphanumeric())
                        }))
                        .collect();
                    tokens.push(Self::classify(word));
                }
                '+' | '-' => {
                    let minuses = iter::once(c)
                        .chain(iter::from_fn(|| {
                            chars.by_ref().next_if(|c| *c == '+' || *c == '-')
                        }))
                        .filter(|c| *c == '-')
                        .count();
                    let op = if minuses % 2 == 1 { Op::Minus } else { Op::Plus };

                    if self.makes_unary() {
                        tokens.push(UnaryOp(op));
                    } else {
                        tokens.push(BinaryOp(op));
                    }
                }
                '^' => tokens.push(BinaryOp(Op::Pow)),
                '*' => tokens.push(BinaryOp(Op::Mult)),
                '/' => tokens.push(BinaryOp(Op::Div)),
                '(' => tokens.push(LParen),
                ')' => tokens.push(RParen),
                _ => {
                    return Err(TokenizerError::InvalidCharacter(c));
                }
            }

            self.prev = tokens.last().cloned();
        }

        Ok(TokenizedInput(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: i64) -> Token {
        Token::Number(BigInt::from(n))
    }

    #[test]
    fn test_tokenizer() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("((17132 + a) * ( -1337 ^ 4 )) / 5").unwrap(),
            TokenizedInput(vec![
                Token::LParen,
                Token::LParen,
                num(17132),
                Token::BinaryOp(Op::Plus),
                Token::Variable("a".to_string()),
                Token::RParen,
                Token::BinaryOp(Op::Mult),
                Token::LParen,
                Token::UnaryOp(Op::Minus),
                num(1337),
                Token::BinaryOp(Op::Pow),
                num(4),
                Token::RParen,
                Token::RParen,
                Token::BinaryOp(Op::Div),
                num(5),
            ])
        );
    }

    #[test]
    fn test_tokenizer_sign_runs() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("9 +++ 10").unwrap(),
            TokenizedInput(vec![num(9), Token::BinaryOp(Op::Plus), num(10)])
        );
        assert_eq!(
            tokenizer.tokenize("9 --- 8").unwrap(),
            TokenizedInput(vec![num(9), Token::BinaryOp(Op::Minus), num(8)])
        );
        assert_eq!(
            tokenizer.tokenize("9 ---- 8").unwrap(),
            TokenizedInput(vec![num(9), Token::BinaryOp(Op::Plus), num(8)])
        );
        assert_eq!(
            tokenizer.tokenize("9 -+-+- 8").unwrap(),
            TokenizedInput(vec![num(9), Token::BinaryOp(Op::Minus), num(8)])
        );
    }

    #[test]
    fn test_tokenizer_unary_position() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("-8 / 3").unwrap(),
            TokenizedInput(vec![
                Token::UnaryOp(Op::Minus),
                num(8),
                Token::BinaryOp(Op::Div),
                num(3),
            ])
        );
        assert_eq!(
            tokenizer.tokenize("2 * --3").unwrap(),
            TokenizedInput(vec![
                num(2),
                Token::BinaryOp(Op::Mult),
                Token::UnaryOp(Op::Plus),
                num(3),
            ])
        );
    }

    #[test]
    fn test_tokenizer_whitespace_is_removed() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize(" 1 2\t+ a b ").unwrap(),
            TokenizedInput(vec![
                num(12),
                Token::BinaryOp(Op::Plus),
                Token::Variable("ab".to_string()),
            ])
        );
        assert_eq!(tokenizer.tokenize("   ").unwrap(), TokenizedInput(vec![]));
    }

    #[test]
    fn test_tokenizer_mixed_run_is_a_word() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("12ab - 1").unwrap(),
            TokenizedInput(vec![
                Token::Word("12ab".to_string()),
                Token::BinaryOp(Op::Minus),
                num(1),
            ])
        );
    }

    #[test]
    fn test_tokenizer_classifies_runs() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("007 abc a7 7a").unwrap(),
            TokenizedInput(vec![Token::Word("007abca77a".to_string())])
        );
        assert_eq!(tokenizer.tokenize("007").unwrap(), TokenizedInput(vec![num(7)]));
        assert_eq!(
            tokenizer.tokenize("x1").unwrap(),
            TokenizedInput(vec![Token::Word("x1".to_string())])
        );
    }

    #[test]
    fn test_tokenizer_big_numbers() {
        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("112234567890123456789").unwrap();
        assert_eq!(
            tokens[0],
            Token::Number("112234567890123456789".parse().unwrap())
        );
    }

    #[test]
    fn test_tokenizer_unexpected_char() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("1 + 2 * 3 % 4").unwrap_err(),
            TokenizerError::InvalidCharacter('%')
        );
        assert_eq!(
            tokenizer.tokenize("a = 1").unwrap_err(),
            TokenizerError::InvalidCharacter('=')
        );
    }

    #[test]
    fn test_tokens_display() {
        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("-(a+12)^2").unwrap();
        assert_eq!(tokens.to_string(), "neg ( a + 12 ) ^ 2");
    }
}
