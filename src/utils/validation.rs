use log::{debug, warn};

use crate::card::Card;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the hand is empty or holds more than `max_size` cards.
pub fn validate_hand(hand: &[Card], max_size: usize) -> Result<(), UtilsError> {
    debug!("Validating hand of {} cards", hand.len());

    if hand.is_empty() {
        warn!("Hand is empty");
        return Err(UtilsError::EmptyHand);
    }

    if hand.len() > max_size {
        warn!("Hand of {} cards exceeds limit of {}", hand.len(), max_size);
        return Err(UtilsError::HandTooLarge {
            len: hand.len(),
            max: max_size,
        });
    }

    debug!("Hand validation successful");
    Ok(())
}
