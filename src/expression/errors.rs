use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expression is empty")]
    Empty,
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Trailing input at position {0}")]
    TrailingInput(usize),
    #[error("Expression nests deeper than {0} levels")]
    TooDeep(usize),
    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Square root of negative number")]
    NegativeSqrt,
    #[error("Result is not a finite real number")]
    NonFinite,
    #[error("Malformed expression: {0}")]
    Parse(#[from] ParseError),
}
