use num_bigint::BigInt;

use crate::assignment::AssignmentError;
use crate::rpn_converter::RpnConverterError;
use crate::rpn_evaluator::RpnEvaluatorError;
use crate::tokenizer::TokenizerError;

/// Any failure of a single session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    InvalidCharacter(char),
    InvalidToken(String),
    InvalidIdentifier,
    InvalidAssignment,
    UnknownVariable(String),
    InvalidExpression,
    DivisionByZero,
    ArithmeticError(BigInt),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidCharacter,
    InvalidToken,
    InvalidIdentifier,
    InvalidAssignment,
    UnknownVariable,
    InvalidExpression,
    DivisionByZero,
    ArithmeticError,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidCharacter(_) => ErrorKind::InvalidCharacter,
            CalcError::InvalidToken(_) => ErrorKind::InvalidToken,
            CalcError::InvalidIdentifier => ErrorKind::InvalidIdentifier,
            CalcError::InvalidAssignment => ErrorKind::InvalidAssignment,
            CalcError::UnknownVariable(_) => ErrorKind::UnknownVariable,
            CalcError::InvalidExpression => ErrorKind::InvalidExpression,
            CalcError::DivisionByZero => ErrorKind::DivisionByZero,
            CalcError::ArithmeticError(_) => ErrorKind::ArithmeticError,
        }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CalcError::InvalidCharacter(c) => write!(f, "Invalid character: '{}'", c),
            CalcError::InvalidToken(token) => write!(f, "Invalid token: '{}'", token),
            CalcError::InvalidIdentifier => write!(f, "Invalid identifier"),
            CalcError::InvalidAssignment => write!(f, "Invalid assignment"),
            CalcError::UnknownVariable(_) => write!(f, "Unknown variable"),
            CalcError::InvalidExpression => write!(f, "Invalid expression"),
            CalcError::DivisionByZero => write!(f, "Division by zero"),
            CalcError::ArithmeticError(exponent) => write!(f, "Invalid exponent: {}", exponent),
        }
    }
}

impl std::error::Error for CalcError {}

impl From<TokenizerError> for CalcError {
    fn from(e: TokenizerError) -> Self {
        match e {
            TokenizerError::InvalidCharacter(c) => CalcError::InvalidCharacter(c),
        }
    }
}

impl From<RpnConverterError> for CalcError {
    fn from(e: RpnConverterError) -> Self {
        match e {
            RpnConverterError::UnknownVariable(name) => CalcError::UnknownVariable(name),
            RpnConverterError::InvalidToken(token) => CalcError::InvalidToken(token),
            RpnConverterError::InvalidExpression => CalcError::InvalidExpression,
        }
    }
}

impl From<RpnEvaluatorError> for CalcError {
    fn from(e: RpnEvaluatorError) -> Self {
        match e {
            RpnEvaluatorError::UnknownVariable(name) => CalcError::UnknownVariable(name),
            RpnEvaluatorError::InvalidExpression => CalcError::InvalidExpression,
            RpnEvaluatorError::DivisionByZero => CalcError::DivisionByZero,
            RpnEvaluatorError::ArithmeticError(exponent) => CalcError::ArithmeticError(exponent),
        }
    }
}

impl From<AssignmentError> for CalcError {
    fn from(e: AssignmentError) -> Self {
        match e {
            AssignmentError::InvalidAssignment => CalcError::InvalidAssignment,
            AssignmentError::InvalidIdentifier => CalcError::InvalidIdentifier,
            AssignmentError::UnknownVariable(name) => CalcError::UnknownVariable(name),
        }
    }
}
