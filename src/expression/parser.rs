use std::str::FromStr;

use log::debug;

use crate::expression::ast::{BinaryOp, Expression};
use crate::expression::errors::ParseError;

/// Deepest expression tree the parser will build. Nesting and operator chains
/// both count toward it.
pub const MAX_DEPTH: usize = 64;

/// Recursive-descent parser over the card-expression grammar:
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := unary (('×' | '*' | '/') unary)*
/// unary   := ('-' | '+') unary | primary
/// primary := number | '(' expr ')' | '√' primary
/// ```
struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            depth: 0,
        }
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            debug!("Expression nesting exceeds {} at {}", MAX_DEPTH, self.pos);
            return Err(ParseError::TooDeep(MAX_DEPTH));
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while self.chars.get(self.pos).is_some_and(|c| c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.chars.get(self.pos).copied()
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(found) => Err(ParseError::UnexpectedChar {
                found,
                position: self.pos,
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn additive_op(c: char) -> Option<BinaryOp> {
        match c {
            '+' => Some(BinaryOp::Add),
            '-' | '−' => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn multiplicative_op(c: char) -> Option<BinaryOp> {
        match c {
            '×' | '*' => Some(BinaryOp::Mul),
            '/' | '÷' => Some(BinaryOp::Div),
            _ => None,
        }
    }

    // Each operator in a chain deepens the left-leaning tree by one level, so
    // the chain holds its depth until it is complete.
    fn parse_expr(&mut self) -> Result<Expression, ParseError> {
        let entry_depth = self.depth;
        let mut left = self.parse_term()?;
        while let Some(op) = self.peek().and_then(Self::additive_op) {
            self.pos += 1;
            self.descend()?;
            let right = self.parse_term()?;
            left = Expression::binary(op, left, right);
        }
        self.depth = entry_depth;
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression, ParseError> {
        let entry_depth = self.depth;
        let mut left = self.parse_unary()?;
        while let Some(op) = self.peek().and_then(Self::multiplicative_op) {
            self.pos += 1;
            self.descend()?;
            let right = self.parse_unary()?;
            left = Expression::binary(op, left, right);
        }
        self.depth = entry_depth;
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expression, ParseError> {
        match self.peek() {
            Some('-' | '−') => {
                self.pos += 1;
                self.descend()?;
                let inner = self.parse_unary()?;
                self.depth -= 1;
                Ok(Expression::Neg(Box::new(inner)))
            }
            Some('+') => {
                self.pos += 1;
                self.descend()?;
                let inner = self.parse_unary();
                self.depth -= 1;
                inner
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        match self.peek() {
            Some(c) if c.is_ascii_digit() => self.parse_number(),
            Some('(') => {
                self.pos += 1;
                self.descend()?;
                let inner = self.parse_expr()?;
                self.expect(')')?;
                self.depth -= 1;
                Ok(inner)
            }
            Some('√') => {
                self.pos += 1;
                self.descend()?;
                let inner = self.parse_primary()?;
                self.depth -= 1;
                Ok(Expression::sqrt(inner))
            }
            Some(found) => Err(ParseError::UnexpectedChar {
                found,
                position: self.pos,
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn parse_number(&mut self) -> Result<Expression, ParseError> {
        let start = self.pos;
        while self
            .chars
            .get(self.pos)
            .is_some_and(|c| c.is_ascii_digit() || *c == '.')
        {
            self.pos += 1;
        }
        let literal: String = self.chars[start..self.pos].iter().collect();
        if has_leading_zero(&literal) {
            return Err(ParseError::InvalidNumber(literal));
        }
        literal
            .parse::<f64>()
            .map(Expression::Number)
            .map_err(|_| ParseError::InvalidNumber(literal))
    }
}

/// Integer literals such as `05` are rejected; `0`, `00` and `0.5` are fine.
fn has_leading_zero(literal: &str) -> bool {
    !literal.contains('.')
        && literal.len() > 1
        && literal.starts_with('0')
        && literal.chars().any(|c| c != '0')
}

/// # Errors
///
/// Returns an error if the text is empty, nests deeper than [`MAX_DEPTH`], contains characters outside the
/// grammar, has unbalanced parentheses, or has input left after a complete
/// expression.
pub fn parse_expression(text: &str) -> Result<Expression, ParseError> {
    let mut parser = Parser::new(text);
    if parser.peek().is_none() {
        return Err(ParseError::Empty);
    }

    let expr = parser.parse_expr()?;
    if parser.peek().is_some() {
        debug!("Trailing input in '{}' at {}", text, parser.pos);
        return Err(ParseError::TrailingInput(parser.pos));
    }
    Ok(expr)
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_expression(s)
    }
}
