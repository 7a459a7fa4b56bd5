use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, MAX_NUMBER_VALUE, Operator, Origin, Wildcard};

/// Number of cards drawn from the deck into a fresh hand
pub const DEALT_CARDS: usize = 4;

/// Operator cards every hand receives on top of the drawn cards
pub const FIXED_OPERATORS: [Operator; 3] = [Operator::Add, Operator::Sub, Operator::Div];

/// How many multiply/sqrt wildcard pairs a standard deck holds
const WILDCARD_PAIRS: usize = 4;

/// Depletable pile of cards; draws come off the end
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Unshuffled standard deck: 0..=10 in every origin, then the wildcards
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(Origin::ALL.len() * 11 + WILDCARD_PAIRS * 2);
        for origin in Origin::ALL {
            for value in 0..=MAX_NUMBER_VALUE {
                cards.push(Card::Number {
                    value,
                    origin: Some(origin),
                });
            }
        }
        for _ in 0..WILDCARD_PAIRS {
            cards.push(Card::Wildcard(Wildcard::Multiply));
            cards.push(Card::Wildcard(Wildcard::Sqrt));
        }
        Self { cards }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Pop until a number card turns up. Anything else popped on the way is discarded.
    pub fn draw_number(&mut self) -> Option<Card> {
        while let Some(card) = self.cards.pop() {
            if card.is_number() {
                return Some(card);
            }
            debug!("Discarding {} while drawing a number card", card);
        }
        None
    }

    /// Draw the random part of a hand and append the fixed operators
    pub fn deal_hand(&mut self) -> Vec<Card> {
        let mut hand: Vec<Card> = (0..DEALT_CARDS).filter_map(|_| self.cards.pop()).collect();
        hand.extend(FIXED_OPERATORS.map(Card::Operator));
        debug!("Dealt hand of {} cards, {} left in deck", hand.len(), self.len());
        hand
    }
}
