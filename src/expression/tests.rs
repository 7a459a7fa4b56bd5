use crate::expression::{
    BinaryOp, Expression, ExpressionError, MAX_DEPTH, ParseError, evaluate_expression,
    parse_expression,
};

fn num(n: f64) -> Expression {
    Expression::Number(n)
}

#[test]
fn test_display_is_fully_parenthesized() {
    let expr = Expression::binary(
        BinaryOp::Sub,
        Expression::binary(BinaryOp::Add, num(10.0), num(10.0)),
        Expression::binary(BinaryOp::Div, num(0.0), num(1.0)),
    );
    assert_eq!(expr.to_string(), "((10+10)-(0/1))");
}

#[test]
fn test_display_sqrt_and_multiply() {
    let expr = Expression::binary(BinaryOp::Mul, Expression::sqrt(num(9.0)), num(2.0));
    assert_eq!(expr.to_string(), "(√(9)×2)");
}

#[test]
fn test_evaluate_simple_sum() {
    assert_eq!(evaluate_expression("(2+3)"), Some(5.0));
}

#[test]
fn test_evaluate_division_by_zero_has_no_value() {
    assert_eq!(evaluate_expression("4/0"), None);

    let expr = Expression::binary(BinaryOp::Div, num(4.0), num(0.0));
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_evaluate_division_by_zero_subexpression() {
    assert_eq!(evaluate_expression("(7/(3-3))"), None);
}

#[test]
fn test_evaluate_negative_sqrt_has_no_value() {
    assert_eq!(evaluate_expression("√(-(4))"), None);
    assert_eq!(evaluate_expression("√((1-5))"), None);

    let expr = Expression::sqrt(Expression::binary(BinaryOp::Sub, num(1.0), num(2.0)));
    assert_eq!(expr.evaluate(), Err(ExpressionError::NegativeSqrt));
}

#[test]
fn test_evaluate_sqrt() {
    let result = evaluate_expression("√(9)");
    assert!(result.is_some());
    if let Some(value) = result {
        assert!((value - 3.0).abs() < 1e-9);
    }
    assert_eq!(evaluate_expression("√(0)"), Some(0.0));
}

#[test]
fn test_evaluate_real_division() {
    assert_eq!(evaluate_expression("10/4"), Some(2.5));
}

#[test]
fn test_evaluate_respects_precedence_without_parentheses() {
    assert_eq!(evaluate_expression("2+3×4"), Some(14.0));
    assert_eq!(evaluate_expression("3+4/2"), Some(5.0));
    assert_eq!(evaluate_expression("8-2-1"), Some(5.0));
    assert_eq!(evaluate_expression("2*3"), Some(6.0));
}

#[test]
fn test_evaluate_accepts_unicode_minus_and_whitespace() {
    assert_eq!(evaluate_expression(" ( 7 − 2 ) "), Some(5.0));
}

#[test]
fn test_evaluate_rejects_malformed_text() {
    assert_eq!(evaluate_expression(""), None);
    assert_eq!(evaluate_expression("((1+2)"), None);
    assert_eq!(evaluate_expression("1+"), None);
    assert_eq!(evaluate_expression("abc"), None);
    assert_eq!(evaluate_expression("2 3"), None);
    assert_eq!(evaluate_expression("1..2"), None);
    assert_eq!(evaluate_expression("math.sqrt(4)"), None);
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse_expression("   "), Err(ParseError::Empty));
    assert_eq!(parse_expression("(1+2"), Err(ParseError::UnexpectedEnd));
    assert_eq!(parse_expression("1)"), Err(ParseError::TrailingInput(1)));
    assert_eq!(
        parse_expression("1+?"),
        Err(ParseError::UnexpectedChar {
            found: '?',
            position: 2
        })
    );
}

#[test]
fn test_display_round_trips_through_parser() {
    let expr = Expression::binary(
        BinaryOp::Add,
        num(3.0),
        Expression::sqrt(Expression::binary(BinaryOp::Div, num(8.0), num(2.0))),
    );
    let text = expr.to_string();
    assert_eq!(text, "(3+√((8/2)))");
    assert_eq!(text.parse::<Expression>(), Ok(expr));
}

#[test]
fn test_negation_display_parses_back() {
    let expr = Expression::Neg(Box::new(num(4.0)));
    assert_eq!(expr.to_string(), "-(4)");
    assert_eq!(expr.evaluate(), Ok(-4.0));
    assert_eq!(evaluate_expression(&expr.to_string()), Some(-4.0));
}

#[test]
fn test_deep_nesting_is_rejected() {
    let nested = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
    assert_eq!(parse_expression(&nested), Err(ParseError::TooDeep(MAX_DEPTH)));
    assert_eq!(evaluate_expression(&nested), None);

    assert_eq!(evaluate_expression(&"-".repeat(200_000)), None);
    assert_eq!(evaluate_expression(&format!("{}4", "√".repeat(200_000))), None);
}

#[test]
fn test_long_operator_chain_is_rejected() {
    let chain = format!("3{}4", "-".repeat(200_000));
    assert_eq!(evaluate_expression(&chain), None);

    let sum = vec!["1"; 100_000].join("+");
    assert_eq!(parse_expression(&sum), Err(ParseError::TooDeep(MAX_DEPTH)));
}

#[test]
fn test_moderate_nesting_still_evaluates() {
    let nested = format!("{}2{}", "(".repeat(20), ")".repeat(20));
    assert_eq!(evaluate_expression(&nested), Some(2.0));
    assert_eq!(evaluate_expression("1+1+1+1+1+1+1+1+1"), Some(9.0));
}

#[test]
fn test_unary_plus_and_leading_zeros() {
    assert_eq!(evaluate_expression("+3"), Some(3.0));
    assert_eq!(evaluate_expression("3++4"), Some(7.0));
    assert_eq!(evaluate_expression("00"), Some(0.0));
    assert_eq!(evaluate_expression("0.5"), Some(0.5));
    assert_eq!(
        parse_expression("05"),
        Err(ParseError::InvalidNumber("05".to_string()))
    );
}
