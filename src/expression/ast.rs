/// Arithmetic expression built from the cards of a hand
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Neg(Box<Expression>),
    Sqrt(Box<Expression>),
}

/// The binary operations a card can stand for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '×',
            BinaryOp::Div => '/',
        }
    }
}

impl Expression {
    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match op {
            BinaryOp::Add => Expression::Add(l, r),
            BinaryOp::Sub => Expression::Sub(l, r),
            BinaryOp::Mul => Expression::Mul(l, r),
            BinaryOp::Div => Expression::Div(l, r),
        }
    }

    pub fn sqrt(inner: Expression) -> Self {
        Expression::Sqrt(Box::new(inner))
    }
}
