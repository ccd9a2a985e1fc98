use num_bigint::BigInt;

use crate::environment::Environment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    InvalidAssignment,
    InvalidIdentifier,
    UnknownVariable(String),
}

impl std::fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AssignmentError::InvalidAssignment => write!(f, "Invalid assignment"),
            AssignmentError::InvalidIdentifier => write!(f, "Invalid identifier"),
            AssignmentError::UnknownVariable(_) => write!(f, "Unknown variable"),
        }
    }
}

impl std::error::Error for AssignmentError {}

/// Latin letters only, at least one.
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parses an optionally signed run of decimal digits.
pub fn parse_integer(s: &str) -> Option<BigInt> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let value: BigInt = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Applies a `name = value` line to the environment.
///
/// The right side is either an integer literal or the name of an existing
/// variable, whose current value is copied. On error the environment is left
/// untouched.
pub fn assign(variables: &mut Environment, line: &str) -> Result<(), AssignmentError> {
    let mut parts = line.split('=');
    let (name, value) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(value), None) => (name.trim(), value.trim()),
        _ => return Err(AssignmentError::InvalidAssignment),
    };

    if !is_identifier(name) {
        return Err(AssignmentError::InvalidIdentifier);
    }

    let value = if let Some(value) = parse_integer(value) {
        value
    } else if is_identifier(value) {
        variables
            .get(value)
            .cloned()
            .ok_or_else(|| AssignmentError::UnknownVariable(value.to_string()))?
    } else {
        return Err(AssignmentError::InvalidAssignment);
    };

    variables.set(name, value);
    Ok(())
}
