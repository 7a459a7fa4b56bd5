use std::str::FromStr;

use crate::card::errors::CardError;
use crate::card::types::{Card, Operator, Origin, Wildcard};

/// Parse a command line token such as `7`, `7:gold`, `+`, `x` or `sqrt`
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        if let Some((number, origin)) = token.split_once(':') {
            let value = number
                .parse::<u8>()
                .map_err(|_| CardError::InvalidNumber(number.to_string()))?;
            return Card::number(value, Some(Origin::from_name(origin)?));
        }

        if token.chars().all(|c| c.is_ascii_digit()) && !token.is_empty() {
            let value = token
                .parse::<u8>()
                .map_err(|_| CardError::InvalidNumber(token.to_string()))?;
            return Card::number(value, None);
        }

        if let Ok(op) = Operator::from_symbol(token) {
            return Ok(Card::Operator(op));
        }

        Wildcard::from_symbol(&token.to_ascii_lowercase())
            .map(Card::Wildcard)
            .map_err(|_| CardError::UnknownToken(token.to_string()))
    }
}

/// Parse every token into a card, stopping at the first invalid one
///
/// # Errors
///
/// Returns the error of the first token that is not a valid card.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, CardError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}
