use num_bigint::BigInt;

use crate::assignment::{self, is_identifier, parse_integer};
use crate::environment::Environment;
use crate::error::CalcError;
use crate::rpn_converter::RpnConverter;
use crate::rpn_evaluator::RpnEvaluator;
use crate::tokenizer::Tokenizer;

pub const HELP: &str = "\
The program evaluates integer expressions of any size.
Operators: + - * / ^ and parentheses. Division truncates toward zero.
Runs of signs collapse: 2 -- 3 is 2 + 3, 2 --- 3 is 2 - 3.
Assign variables with `name = 42` or `name = other`; names are Latin letters.
Type a variable name to print its value.
Commands: /help, /vars, /exit";

/// What the caller should do with a processed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Silent,
    Print(String),
    Exit(String),
}

/// One interactive session. Owns the variables for its whole lifetime.
#[derive(Default)]
pub struct Session {
    variables: Environment,
    tokenizer: Tokenizer,
    verbose: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dumps the token stream and RPN of every expression to stderr.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn variables(&self) -> &Environment {
        &self.variables
    }

    /// Tokenizes, converts and evaluates an expression against the session variables.
    pub fn evaluate(&mut self, input: &str) -> Result<BigInt, CalcError> {
        let tokens = self.tokenizer.tokenize(input)?;
        if self.verbose {
            eprintln!("Tokens: {}", tokens);
        }

        let rpn = RpnConverter::convert(&tokens, &self.variables)?;
        if self.verbose {
            eprintln!("RPN: {}", rpn);
        }

        Ok(RpnEvaluator::evaluate(&rpn, &self.variables)?)
    }

    fn command(&self, command: &str) -> Outcome {
        match command {
            "/exit" => Outcome::Exit("Bye!".to_string()),
            "/help" => Outcome::Print(HELP.to_string()),
            "/vars" if self.variables.is_empty() => {
                Outcome::Print("No variables defined".to_string())
            }
            "/vars" => Outcome::Print(
                self.variables
                    .sorted()
                    .into_iter()
                    .map(|(name, value)| format!("{} = {}", name, value))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            _ => Outcome::Print("Unknown command".to_string()),
        }
    }

    fn run(&mut self, line: &str) -> Result<Option<BigInt>, CalcError> {
        if line.contains('=') {
            assignment::assign(&mut self.variables, line)?;
            return Ok(None);
        }

        if let Some(value) = parse_integer(line) {
            return Ok(Some(value));
        }

        if is_identifier(line) {
            return match self.variables.get(line) {
                Some(value) => Ok(Some(value.clone())),
                None => Err(CalcError::UnknownVariable(line.to_string())),
            };
        }

        self.evaluate(line).map(Some)
    }

    /// Processes one input line, handing errors back to the caller.
    pub fn try_execute(&mut self, line: &str) -> Result<Outcome, CalcError> {
        let line = line.trim();

        if line.is_empty() {
            return Ok(Outcome::Silent);
        }

        if line.starts_with('/') {
            return Ok(self.command(line));
        }

        Ok(match self.run(line)? {
            Some(value) => Outcome::Print(value.to_string()),
            None => Outcome::Silent,
        })
    }

    /// Processes one input line. Errors are reported as a printed line and
    /// never change the variables.
    pub fn execute(&mut self, line: &str) -> Outcome {
        match self.try_execute(line) {
            Ok(outcome) => outcome,
            Err(e) => {
                if self.verbose {
                    eprintln!("Failed to process '{}': {:?}", line.trim(), e);
                }
                Outcome::Print(e.to_string())
            }
        }
    }
}
