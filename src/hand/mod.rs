//! Dealing and wildcard resolution

mod deck;
mod normalizer;

pub use deck::{DEALT_CARDS, Deck, FIXED_OPERATORS};
pub use normalizer::normalize_hand;
