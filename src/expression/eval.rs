use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::parser::parse_expression;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - Taking the square root of a negative number
    /// - Producing a value that is not a finite real number
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left + right)
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left - right)
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left * right)
            }
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if is_zero(right) {
                    debug!("Division by zero attempted");
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Expression::Neg(e) => {
                let val = e.evaluate()?;
                Ok(-val)
            }
            Expression::Sqrt(e) => {
                let val = e.evaluate()?;
                if val < 0.0 {
                    debug!("Square root of negative number: {}", val);
                    Err(ExpressionError::NegativeSqrt)
                } else {
                    Ok(val.sqrt())
                }
            }
        };

        match result {
            Ok(value) if !value.is_finite() => {
                debug!("Non-finite result from {}", self);
                Err(ExpressionError::NonFinite)
            }
            other => other,
        }
    }
}

/// Parse and evaluate expression text, folding every failure into `None`
pub fn evaluate_expression(text: &str) -> Option<f64> {
    let result = parse_expression(text)
        .map_err(ExpressionError::from)
        .and_then(|expr| expr.evaluate());

    match result {
        Ok(value) => {
            debug!("'{}' evaluated to {}", text, value);
            Some(value)
        }
        Err(e) => {
            debug!("'{}' has no value: {}", text, e);
            None
        }
    }
}
