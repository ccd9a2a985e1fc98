use crate::environment::Environment;
use crate::tokenizer::{Token, TokenizedInput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpnConverterError {
    UnknownVariable(String),
    InvalidToken(String),
    /// Unbalanced parentheses.
    InvalidExpression,
}

impl std::fmt::Display for RpnConverterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RpnConverterError::UnknownVariable(_) => write!(f, "Unknown variable"),
            RpnConverterError::InvalidToken(token) => write!(f, "Invalid token: '{}'", token),
            RpnConverterError::InvalidExpression => write!(f, "Invalid expression"),
        }
    }
}

impl std::error::Error for RpnConverterError {}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct RPNExpr(pub Vec<Token>);

impl std::ops::Deref for RPNExpr {
    type Target = Vec<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for RPNExpr {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        crate::tokenizer::write_tokens(f, &self.0)
    }
}

pub struct RpnConverter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Associativity {
    Left,
    Right,
    NA,
}

struct PrecAssoc {
    pub prec: i32,
    pub assoc: Associativity,
}

impl RpnConverter {
    /// Returns the precedence and associativity of the operator.
    fn get_prec_assoc(op: &Token) -> PrecAssoc {
        use crate::tokenizer::Op::*;
        use crate::tokenizer::Token::*;
        use Associativity::*;

        match *op {
            BinaryOp(Minus) | BinaryOp(Plus) => PrecAssoc {
                prec: 1,
                assoc: Left,
            },
            BinaryOp(Mult) | BinaryOp(Div) => PrecAssoc {
                prec: 2,
                assoc: Left,
            },
            UnaryOp(_) => PrecAssoc { prec: 3, assoc: NA },
            BinaryOp(Pow) => PrecAssoc {
                prec: 4,
                assoc: Right,
            },
            _ => PrecAssoc { prec: 0, assoc: NA },
        }
    }

    /// Converts infix notation to Reverse Polish Notation
    /// using the Shunting Yard algorithm.
    ///
    /// Variables must already be defined in `variables`; number literals are
    /// passed through untouched.
    pub fn convert(
        tokens: &TokenizedInput,
        variables: &Environment,
    ) -> Result<RPNExpr, RpnConverterError> {
        use crate::tokenizer::Token::*;
        let mut output = Vec::new();
        let mut stack: Vec<Token> = Vec::new();

        for token in tokens.iter() {
            let token = token.clone();
            match token {
                Variable(ref name) => {
                    if !variables.contains(name) {
                        return Err(RpnConverterError::UnknownVariable(name.clone()));
                    }
                    output.push(token);
                }
                Number(_) => output.push(token),
                Word(word) => return Err(RpnConverterError::InvalidToken(word)),
                UnaryOp(_) => stack.push(token),
                BinaryOp(_) => {
                    let pa1 = RpnConverter::get_prec_assoc(&token);
                    while let Some(top) = stack.last() {
                        let pa2 = RpnConverter::get_prec_assoc(top);
                        if (pa1.assoc == Associativity::Left && pa1.prec <= pa2.prec)
                            || (pa1.assoc == Associativity::Right && pa1.prec < pa2.prec)
                        {
                            if let Some(tok) = stack.pop() {
                                output.push(tok);
                            }
                        } else {
                            break;
                        }
                    }

                    stack.push(token);
                }
                LParen => stack.push(token),
                RParen => {
                    let mut found = false;
                    while let Some(tok) = stack.pop() {
                        if tok == LParen {
                            found = true;
                            break;
                        }
                        output.push(tok);
                    }

                    if !found {
                        return Err(RpnConverterError::InvalidExpression);
                    }
                }
            }
        }

        while let Some(tok) = stack.pop() {
            match tok {
                BinaryOp(_) | UnaryOp(_) => output.push(tok),
                _ => return Err(RpnConverterError::InvalidExpression),
            }
        }

        Ok(RPNExpr(output))
    }
}
