use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::errors::CardError;

/// Highest value printed on a number card
pub const MAX_NUMBER_VALUE: u8 = 10;

/// Provenance set of a number card. Only used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Gold,
    Silver,
    Bronze,
    Dirt,
}

impl Origin {
    pub const ALL: [Origin; 4] = [Origin::Gold, Origin::Silver, Origin::Bronze, Origin::Dirt];

    pub fn name(self) -> &'static str {
        match self {
            Origin::Gold => "Gold",
            Origin::Silver => "Silver",
            Origin::Bronze => "Bronze",
            Origin::Dirt => "Dirt",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, CardError> {
        Self::ALL
            .into_iter()
            .find(|origin| origin.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CardError::UnknownOrigin(name.to_string()))
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Binary operators printed on operator cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Div,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Div => "/",
        }
    }

    pub fn from_symbol(symbol: &str) -> Result<Self, CardError> {
        match symbol {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Sub),
            "/" | "÷" => Ok(Operator::Div),
            other => Err(CardError::UnknownOperator(other.to_string())),
        }
    }
}

/// Wildcards that get resolved (or kept) during hand normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wildcard {
    Multiply,
    Sqrt,
}

impl Wildcard {
    pub fn symbol(self) -> &'static str {
        match self {
            Wildcard::Multiply => "×",
            Wildcard::Sqrt => "√",
        }
    }

    pub fn from_symbol(symbol: &str) -> Result<Self, CardError> {
        match symbol {
            "*" | "×" | "x" => Ok(Wildcard::Multiply),
            "√" | "sqrt" => Ok(Wildcard::Sqrt),
            other => Err(CardError::UnknownWildcard(other.to_string())),
        }
    }
}

/// A single card of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "crate::card::record::CardRecord")]
#[serde(into = "crate::card::record::CardRecord")]
pub enum Card {
    Number { value: u8, origin: Option<Origin> },
    Operator(Operator),
    Wildcard(Wildcard),
}

impl Card {
    /// # Errors
    ///
    /// Returns an error if `value` is above [`MAX_NUMBER_VALUE`].
    pub fn number(value: u8, origin: Option<Origin>) -> Result<Self, CardError> {
        if value > MAX_NUMBER_VALUE {
            return Err(CardError::NumberOutOfRange(i64::from(value)));
        }
        Ok(Card::Number { value, origin })
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Card::Number { .. })
    }

    pub fn is_sqrt(&self) -> bool {
        matches!(self, Card::Wildcard(Wildcard::Sqrt))
    }

    pub fn is_multiply(&self) -> bool {
        matches!(self, Card::Wildcard(Wildcard::Multiply))
    }

    /// Operators that combine two operands; the multiply wildcard counts as one
    pub fn is_binary_operator(&self) -> bool {
        matches!(self, Card::Operator(_) | Card::Wildcard(Wildcard::Multiply))
    }

    /// Symbol used when the card is written into an expression
    pub fn symbol(&self) -> String {
        match self {
            Card::Number { value, .. } => value.to_string(),
            Card::Operator(op) => op.symbol().to_string(),
            Card::Wildcard(wildcard) => wildcard.symbol().to_string(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Card::Number {
                value,
                origin: Some(origin),
            } => write!(f, "{}:{}", value, origin),
            _ => write!(f, "{}", self.symbol()),
        }
    }
}
