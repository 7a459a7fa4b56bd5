//! Cards of the game and their wire forms

mod errors;
mod parse;
mod record;
mod types;

pub use errors::CardError;
pub use parse::parse_cards;
pub use record::{CardKind, CardRecord, RecordValue, cards_from_json, cards_to_json};
pub use types::{Card, MAX_NUMBER_VALUE, Operator, Origin, Wildcard};
