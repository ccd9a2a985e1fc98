pub mod assignment;
pub mod config;
pub mod environment;
pub mod error;
pub mod rpn_converter;
pub mod rpn_evaluator;
pub mod session;
pub mod tokenizer;

pub use environment::Environment;
pub use error::{CalcError, ErrorKind};
pub use session::{Outcome, Session};
