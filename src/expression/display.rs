use std::fmt;

use crate::expression::ast::{BinaryOp, Expression};

/// Every binary node is wrapped in its own parentheses, so the text never
/// depends on operator precedence.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_binary(
            f: &mut fmt::Formatter,
            op: BinaryOp,
            l: &Expression,
            r: &Expression,
        ) -> fmt::Result {
            write!(f, "({}{}{})", l, op.symbol(), r)
        }

        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Add(l, r) => write_binary(f, BinaryOp::Add, l, r),
            Expression::Sub(l, r) => write_binary(f, BinaryOp::Sub, l, r),
            Expression::Mul(l, r) => write_binary(f, BinaryOp::Mul, l, r),
            Expression::Div(l, r) => write_binary(f, BinaryOp::Div, l, r),
            Expression::Neg(e) => write!(f, "-({})", e),
            Expression::Sqrt(e) => write!(f, "√({})", e),
        }
    }
}
