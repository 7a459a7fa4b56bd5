use std::collections::VecDeque;

use log::{debug, warn};

use crate::card::{Card, Operator};
use crate::hand::deck::Deck;

/// A hand position; `None` once a replacement draw found the deck empty
type Slot = Option<Card>;

fn draw_replacement(deck: &mut Deck, index: usize) -> Slot {
    let drawn = deck.draw_number();
    match drawn {
        Some(card) => debug!("Slot {} replaced with {}", index, card),
        None => warn!("Deck exhausted while replacing slot {}", index),
    }
    drawn
}

/// Pair every sqrt wildcard with a multiply wildcard to turn into a number, or
/// failing that, with another sqrt wildcard.
fn resolve_sqrt_wildcards(slots: &mut [Slot], deck: &mut Deck) {
    let mut pending_sqrt: Vec<usize> = slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_some_and(|c| c.is_sqrt()))
        .map(|(i, _)| i)
        .collect();
    let mut pending_multiply: VecDeque<usize> = slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_some_and(|c| c.is_multiply()))
        .map(|(i, _)| i)
        .collect();

    let mut k = 0;
    while let Some(&current) = pending_sqrt.get(k) {
        if let Some(multiply_idx) = pending_multiply.pop_front() {
            slots[multiply_idx] = draw_replacement(deck, multiply_idx);
        } else if let Some(pos) = pending_sqrt.iter().position(|&idx| idx != current) {
            let other = pending_sqrt.remove(pos);
            slots[other] = draw_replacement(deck, other);
            if pos < k {
                k -= 1;
            }
        }
        k += 1;
    }
}

fn conflicts_with_multiply(slot: &Slot) -> bool {
    matches!(
        slot,
        Some(Card::Operator(Operator::Add | Operator::Sub))
    ) || slot.is_some_and(|c| c.is_multiply())
}

/// Each remaining multiply wildcard turns the first +/- operator or other
/// multiply wildcard it finds into a number. The wildcard itself stays.
fn resolve_multiply_wildcards(slots: &mut [Slot], deck: &mut Deck) {
    for i in 0..slots.len() {
        if !slots[i].is_some_and(|c| c.is_multiply()) {
            continue;
        }
        let target = (0..slots.len()).find(|&j| j != i && conflicts_with_multiply(&slots[j]));
        if let Some(j) = target {
            slots[j] = draw_replacement(deck, j);
        }
    }
}

/// Resolve the wildcards of a freshly dealt hand, drawing replacements from `deck`.
///
/// Hands without wildcards come back unchanged and leave the deck untouched.
/// If the deck runs out, the affected positions are dropped from the result.
pub fn normalize_hand(hand: &[Card], deck: &mut Deck) -> Vec<Card> {
    debug!(
        "Normalizing hand [{}]",
        hand.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
    );

    let mut slots: Vec<Slot> = hand.iter().copied().map(Some).collect();
    resolve_sqrt_wildcards(&mut slots, deck);
    resolve_multiply_wildcards(&mut slots, deck);

    let resolved: Vec<Card> = slots.into_iter().flatten().collect();
    if resolved.len() < hand.len() {
        warn!(
            "Dropped {} unresolved slot(s) from hand",
            hand.len() - resolved.len()
        );
    }
    resolved
}
