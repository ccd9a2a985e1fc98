use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::environment::Environment;
use crate::rpn_converter::RPNExpr;
use crate::tokenizer::Op;

/// Upper bound on the bit length of a `^` result.
pub const MAX_POW_BITS: u64 = 1 << 24;

pub struct RpnEvaluator {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpnEvaluatorError {
    UnknownVariable(String),
    /// Operand stack underflow, or more than one value left at the end.
    InvalidExpression,
    DivisionByZero,
    /// The exponent of `^` is negative, does not fit into a `u32`, or would
    /// make the result longer than [`MAX_POW_BITS`].
    ArithmeticError(BigInt),
}

impl std::fmt::Display for RpnEvaluatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RpnEvaluatorError::UnknownVariable(_) => write!(f, "Unknown variable"),
            RpnEvaluatorError::InvalidExpression => write!(f, "Invalid expression"),
            RpnEvaluatorError::DivisionByZero => write!(f, "Division by zero"),
            RpnEvaluatorError::ArithmeticError(exponent) => {
                write!(f, "Invalid exponent: {}", exponent)
            }
        }
    }
}

impl std::error::Error for RpnEvaluatorError {}

impl RpnEvaluator {
    fn apply_binary(op: Op, a: BigInt, b: BigInt) -> Result<BigInt, RpnEvaluatorError> {
        use Op::*;

        let result = match op {
            Plus => a + b,
            Minus => a - b,
            Mult => a * b,
            Div => {
                if b.is_zero() {
                    return Err(RpnEvaluatorError::DivisionByZero);
                }
                // BigInt division truncates toward zero.
                a / b
            }
            Pow => match b.to_u32() {
                // 0, 1 and -1 stay one bit long for any exponent.
                Some(exponent) if a.bits() <= 1 => a.pow(exponent),
                Some(exponent) if a.bits().saturating_mul(exponent as u64) <= MAX_POW_BITS => {
                    a.pow(exponent)
                }
                _ => return Err(RpnEvaluatorError::ArithmeticError(b)),
            },
        };

        Ok(result)
    }

    fn apply_unary(op: Op, a: BigInt) -> Result<BigInt, RpnEvaluatorError> {
        match op {
            Op::Minus => Ok(-a),
            Op::Plus => Ok(a),
            _ => Err(RpnEvaluatorError::InvalidExpression),
        }
    }

    pub fn evaluate(
        tokens: &RPNExpr,
        variables: &Environment,
    ) -> Result<BigInt, RpnEvaluatorError> {
        use crate::tokenizer::Token::*;

        let mut eval_stack: Vec<BigInt> = vec![];

        for token in tokens.iter() {
            match token {
                Variable(name) => {
                    if let Some(value) = variables.get(name) {
                        eval_stack.push(value.clone());
                    } else {
                        return Err(RpnEvaluatorError::UnknownVariable(name.clone()));
                    }
                }
                Number(num) => {
                    eval_stack.push(num.clone());
                }
                BinaryOp(op) => {
                    let (b, a) = match (eval_stack.pop(), eval_stack.pop()) {
                        (Some(b), Some(a)) => (b, a),
                        _ => return Err(RpnEvaluatorError::InvalidExpression),
                    };
                    eval_stack.push(Self::apply_binary(*op, a, b)?);
                }
                UnaryOp(op) => {
                    let a = eval_stack
                        .pop()
                        .ok_or(RpnEvaluatorError::InvalidExpression)?;
                    eval_stack.push(Self::apply_unary(*op, a)?);
                }
                Word(_) | LParen | RParen => return Err(RpnEvaluatorError::InvalidExpression),
            }
        }

        match (eval_stack.pop(), eval_stack.is_empty()) {
            (Some(result), true) => Ok(result),
            _ => Err(RpnEvaluatorError::InvalidExpression),
        }
    }
}
