//! Cardcalc - A library for solving hands of the card arithmetic game
//!
//! A hand holds number cards (0 to 10), the operators `+ - /`, and the wildcards
//! `×` and `√`. This library resolves the wildcards of a dealt hand, builds every
//! fully parenthesized expression the hand can form, and reports the expression
//! closest to each target number.

pub mod card;
pub mod expression;
pub mod hand;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use card::{Card, CardError, Operator, Origin, Wildcard, cards_from_json, cards_to_json};
pub use expression::{Expression, ExpressionError, evaluate_expression};
pub use hand::{Deck, normalize_hand};
pub use solver::{
    HandSolver, SingleEvaluation, Solution, SolverConfig, SolverError, TargetMatch,
    evaluate_single,
};
pub use utils::{UtilsError, validate_hand};

/// Find the expression closest to each default target (1 and 20)
///
/// This is a convenience function that creates a default solver and searches every
/// ordering of the hand.
///
/// # Arguments
///
/// * `cards` - The hand, in any order
///
/// # Returns
///
/// * `Ok(matches)` - One entry per target; `best` is `None` when no expression is valid
/// * `Err(SolverError)` - If the hand is empty or too large
///
/// # Errors
///
/// This function will return an error if:
/// * The hand is empty
/// * The hand holds more cards than the solver accepts
///
/// # Examples
///
/// ```
/// use cardcalc::{Card, Operator, find_best};
///
/// let hand = [
///     Card::Number { value: 3, origin: None },
///     Card::Operator(Operator::Add),
///     Card::Number { value: 4, origin: None },
/// ];
/// match find_best(&hand) {
///     Ok(matches) => {
///         for m in matches {
///             println!("{}: {:?}", m.target, m.best);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_best(cards: &[Card]) -> Result<Vec<TargetMatch>, SolverError> {
    HandSolver::default().find_best(cards)
}

/// Decode card records from JSON and search them, as a service boundary would
///
/// # Errors
///
/// Returns an error if the JSON is not a list of valid card records, or if the
/// hand is empty or too large.
pub fn find_best_json(records: &str) -> Result<Vec<TargetMatch>, SolverError> {
    let cards = cards_from_json(records)?;
    find_best(&cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_best_json_boundary() {
        let json = r#"[
            {"kind": "number", "value": 2, "origin": "Gold"},
            {"kind": "operator", "value": "+"},
            {"kind": "number", "value": "3", "origin": "Dirt"}
        ]"#;
        let result = find_best_json(json);
        assert!(result.is_ok(), "unexpected error: {:?}", result.err());
        if let Ok(matches) = result {
            assert_eq!(matches.len(), 2);
            assert!(matches.iter().all(|m| m.best.is_some()));
        }
    }

    #[test]
    fn test_find_best_json_rejects_malformed_records() {
        assert!(matches!(
            find_best_json(r#"[{"kind": "number", "value": 99}]"#),
            Err(SolverError::RecordError(_))
        ));
        assert!(matches!(
            find_best_json("[]"),
            Err(SolverError::UtilsError(UtilsError::EmptyHand))
        ));
    }

    #[test]
    fn test_deal_normalize_and_solve() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut deck = Deck::shuffled(&mut StdRng::seed_from_u64(2024));
        let dealt = deck.deal_hand();
        let hand = normalize_hand(&dealt, &mut deck);
        let result = find_best(&hand);
        assert!(result.is_ok(), "unexpected error: {:?}", result.err());
    }
}
