use log::debug;
use serde::Serialize;

use crate::card::{Card, Wildcard};
use crate::expression::evaluate_expression;
use crate::solver::constants::MAX_HAND_SIZE;
use crate::utils::validate_hand;

/// Result of reading a hand strictly in the order the player laid it out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleEvaluation {
    pub expression: String,
    pub value: Option<f64>,
}

/// Flat infix text of the cards in the given order.
///
/// Adjacent numbers run together into one literal. A sqrt card must be
/// followed directly by a number card, otherwise the order has no text.
pub fn sequence_text(cards: &[Card]) -> Option<String> {
    let mut text = String::new();
    let mut iter = cards.iter();

    while let Some(card) = iter.next() {
        match card {
            Card::Number { value, .. } => text.push_str(&value.to_string()),
            Card::Operator(op) => text.push_str(op.symbol()),
            Card::Wildcard(Wildcard::Multiply) => text.push_str(Wildcard::Multiply.symbol()),
            Card::Wildcard(Wildcard::Sqrt) => match iter.next() {
                Some(Card::Number { value, .. }) => text.push_str(&format!("√({})", value)),
                _ => {
                    debug!("Sqrt card is not followed by a number");
                    return None;
                }
            },
        }
    }

    Some(text)
}

/// Evaluate the one expression implied by this exact card order.
///
/// Orders longer than a hand can be have no expression.
pub fn evaluate_single(cards: &[Card]) -> Option<SingleEvaluation> {
    validate_hand(cards, MAX_HAND_SIZE).ok()?;
    let expression = sequence_text(cards).filter(|text| !text.is_empty())?;
    let value = evaluate_expression(&expression);
    Some(SingleEvaluation { expression, value })
}
