use log::warn;
use serde::{Deserialize, Serialize};

use crate::card::errors::CardError;
use crate::card::types::{Card, MAX_NUMBER_VALUE, Operator, Origin, Wildcard};

/// Kind tag of a card record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Number,
    Operator,
    #[serde(alias = "special")]
    Wildcard,
}

/// Raw value of a card record: numbers may arrive as integers or as numeric strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Integer(i64),
    Symbol(String),
}

/// Wire form of a card, as exchanged with callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(alias = "card_type")]
    pub kind: CardKind,
    pub value: RecordValue,
    #[serde(default, alias = "set_name", skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

fn parse_origin(origin: Option<&str>) -> Result<Option<Origin>, CardError> {
    match origin.map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => Origin::from_name(name).map(Some),
    }
}

fn parse_number(value: &RecordValue) -> Result<u8, CardError> {
    let raw = match value {
        RecordValue::Integer(n) => *n,
        RecordValue::Symbol(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| CardError::InvalidNumber(s.clone()))?,
    };
    if !(0..=i64::from(MAX_NUMBER_VALUE)).contains(&raw) {
        return Err(CardError::NumberOutOfRange(raw));
    }
    u8::try_from(raw).map_err(|_| CardError::NumberOutOfRange(raw))
}

fn symbol_text(value: &RecordValue) -> String {
    match value {
        RecordValue::Integer(n) => n.to_string(),
        RecordValue::Symbol(s) => s.trim().to_string(),
    }
}

impl TryFrom<CardRecord> for Card {
    type Error = CardError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let origin = parse_origin(record.origin.as_deref())?;
        let card = match record.kind {
            CardKind::Number => Card::Number {
                value: parse_number(&record.value)?,
                origin,
            },
            CardKind::Operator | CardKind::Wildcard if origin.is_some() => {
                return Err(CardError::OriginOnNonNumber);
            }
            CardKind::Operator => {
                Card::Operator(Operator::from_symbol(&symbol_text(&record.value))?)
            }
            CardKind::Wildcard => {
                Card::Wildcard(Wildcard::from_symbol(&symbol_text(&record.value))?)
            }
        };
        Ok(card)
    }
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        match card {
            Card::Number { value, origin } => CardRecord {
                kind: CardKind::Number,
                value: RecordValue::Integer(i64::from(value)),
                origin: origin.map(|o| o.name().to_string()),
            },
            Card::Operator(op) => CardRecord {
                kind: CardKind::Operator,
                value: RecordValue::Symbol(op.symbol().to_string()),
                origin: None,
            },
            Card::Wildcard(wildcard) => CardRecord {
                kind: CardKind::Wildcard,
                value: RecordValue::Symbol(wildcard.symbol().to_string()),
                origin: None,
            },
        }
    }
}

/// Decode a JSON array of card records
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of objects, or if any record
/// describes an invalid card.
pub fn cards_from_json(json: &str) -> Result<Vec<Card>, serde_json::Error> {
    serde_json::from_str::<Vec<Card>>(json).inspect_err(|e| warn!("Rejected card records: {}", e))
}

/// Encode cards as a JSON array of card records
///
/// # Errors
///
/// Returns an error only if serialization itself fails.
pub fn cards_to_json(cards: &[Card]) -> Result<String, serde_json::Error> {
    serde_json::to_string(cards)
}
