//! Expression tree, its text form, parser and evaluator

mod ast;
mod display;
mod errors;
mod eval;
mod parser;

pub use ast::{BinaryOp, Expression};
pub use errors::{ExpressionError, ParseError};
pub use eval::evaluate_expression;
pub use parser::{MAX_DEPTH, parse_expression};

#[cfg(test)]
mod tests;
