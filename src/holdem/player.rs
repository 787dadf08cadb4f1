use crate::core::{Card, EquityError, cards_from_str};

/// A seat in the hand: a name and hole cards.
///
/// The name is the identity key results are aggregated under, so it
/// must be unique within one simulation call. A player either shows
/// two known hole cards that stay fixed across all trials, or none
/// at all and is dealt two random cards per trial. Every player owns
/// a fresh hole card collection; nothing is shared between seats.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hole: Vec<Card>,
}

impl Player {
    /// A player with two known hole cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::cards_from_str;
    /// use holdem_equity::holdem::Player;
    ///
    /// let cards = cards_from_str("AsKh").unwrap();
    /// let hero = Player::new("hero", [cards[0], cards[1]]);
    /// assert!(hero.has_known_hole());
    /// ```
    pub fn new(name: impl Into<String>, hole: [Card; 2]) -> Self {
        Self {
            name: name.into(),
            hole: hole.to_vec(),
        }
    }

    /// A player whose hole cards are unknown. Each simulation trial
    /// deals them two random cards from the remaining deck.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hole: Vec::new(),
        }
    }

    /// Parse a player's hole cards from notation like "AsKh".
    ///
    /// An empty string gives an unknown hand; anything other than
    /// zero or two cards is rejected.
    pub fn from_hole_str(name: impl Into<String>, hole: &str) -> Result<Self, EquityError> {
        let cards = cards_from_str(hole)?;
        if !matches!(cards.len(), 0 | 2) {
            return Err(EquityError::InvalidHoleCards(cards.len()));
        }
        Ok(Self {
            name: name.into(),
            hole: cards,
        })
    }

    /// The aggregation key for this player.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The known hole cards: two cards, or empty for an unknown hand.
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    /// Does this player hold fixed, known cards?
    pub fn has_known_hole(&self) -> bool {
        !self.hole.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_player() {
        let cards = cards_from_str("AsKh").unwrap();
        let p = Player::new("hero", [cards[0], cards[1]]);
        assert_eq!("hero", p.name());
        assert_eq!(2, p.hole_cards().len());
        assert!(p.has_known_hole());
    }

    #[test]
    fn test_unknown_player() {
        let p = Player::unknown("villain");
        assert!(p.hole_cards().is_empty());
        assert!(!p.has_known_hole());
    }

    #[test]
    fn test_from_hole_str() {
        let p = Player::from_hole_str("hero", "QdQs").unwrap();
        assert!(p.has_known_hole());

        let empty = Player::from_hole_str("villain", "").unwrap();
        assert!(!empty.has_known_hole());
    }

    #[test]
    fn test_from_hole_str_rejects_wrong_count() {
        assert_eq!(
            Err(EquityError::InvalidHoleCards(1)),
            Player::from_hole_str("hero", "Qd").map(|_| ())
        );
        assert_eq!(
            Err(EquityError::InvalidHoleCards(3)),
            Player::from_hole_str("hero", "QdQsQh").map(|_| ())
        );
    }

    #[test]
    fn test_fresh_hole_per_instance() {
        // Two unknown players never alias one collection.
        let mut a = Player::unknown("a");
        let b = Player::unknown("b");
        a.hole = cards_from_str("2c3c").unwrap();
        assert!(b.hole_cards().is_empty());
    }
}
