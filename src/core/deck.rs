use rand::Rng;
use rand::seq::SliceRandom;

use super::card::{Card, Suit, Value};

/// An ordered deck of cards.
///
/// A fresh deck holds all 52 unique cards in sorted order. Known
/// cards (a revealed board, a player's hole cards) are removed by
/// value before a simulation starts, and every trial then works on
/// its own clone so no trial ever observes another's dealing.
///
/// Invariant: a live deck never contains a duplicate card. The
/// constructor builds 52 distinct cards and no operation inserts.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage. The top of the deck is the end of the vector.
    cards: Vec<Card>,
}

impl Default for Deck {
    /// Create the default 52 card deck, sorted.
    ///
    /// ```
    /// use holdem_equity::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().len());
    /// ```
    fn default() -> Self {
        let mut cards: Vec<Card> = Vec::with_capacity(52);
        for v in &Value::values() {
            for s in &Suit::suits() {
                cards.push(Card {
                    value: *v,
                    suit: *s,
                });
            }
        }
        Self { cards }
    }
}

impl Deck {
    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Given a card remove it from the deck if it is present.
    ///
    /// Returns true if the card was there to remove.
    pub fn remove(&mut self, c: &Card) -> bool {
        match self.cards.iter().position(|d| d == c) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove every card in the slice from the deck.
    ///
    /// Used to exclude the known board and hole cards before a
    /// simulation. Cards not present are ignored.
    pub fn remove_all(&mut self, cards: &[Card]) {
        for c in cards {
            self.remove(c);
        }
    }

    /// Deal a card from the top of the deck.
    ///
    /// Returns `None` when the deck is empty; callers that have
    /// already verified availability treat that as an invariant
    /// violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::Deck;
    ///
    /// let mut deck = Deck::default();
    /// let card = deck.deal().unwrap();
    /// assert_eq!(51, deck.len());
    /// assert!(!deck.contains(&card));
    /// ```
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Fisher-Yates shuffle of the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator from this deck
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_contains_in() {
        let d = Deck::default();
        assert!(d.contains(&Card {
            value: Value::Eight,
            suit: Suit::Heart,
        }));
    }

    #[test]
    fn test_remove() {
        let mut d = Deck::default();
        let c = Card {
            value: Value::Ace,
            suit: Suit::Heart,
        };
        assert!(d.contains(&c));
        assert!(d.remove(&c));
        assert!(!d.contains(&c));
        assert!(!d.remove(&c));
    }

    #[test]
    fn test_unique_cards() {
        let d = Deck::default();
        let distinct: HashSet<Card> = d.iter().copied().collect();
        assert_eq!(52, distinct.len());
    }

    #[test]
    fn test_deal_removes_from_top() {
        let mut d = Deck::default();
        let first = d.deal().unwrap();
        assert_eq!(51, d.len());
        assert!(!d.contains(&first));
    }

    #[test]
    fn test_deal_empty() {
        let mut d = Deck::default();
        for _ in 0..52 {
            assert!(d.deal().is_some());
        }
        assert!(d.is_empty());
        assert_eq!(None, d.deal());
    }

    // After any sequence of remove/deal operations the deck holds
    // exactly 52 minus (removed + dealt) cards with no duplicates.
    #[test]
    fn test_remove_deal_invariant() {
        let mut d = Deck::default();
        let removed = [
            Card::new(Value::Ace, Suit::Spade),
            Card::new(Value::King, Suit::Heart),
            Card::new(Value::Two, Suit::Diamond),
        ];
        d.remove_all(&removed);
        assert_eq!(49, d.len());

        let mut rng = StdRng::seed_from_u64(42);
        d.shuffle(&mut rng);
        let mut dealt: Vec<Card> = Vec::new();
        for _ in 0..5 {
            dealt.push(d.deal().unwrap());
        }
        assert_eq!(52 - removed.len() - dealt.len(), d.len());

        let distinct: HashSet<Card> = d.iter().copied().collect();
        assert_eq!(d.len(), distinct.len());
        for c in removed.iter().chain(dealt.iter()) {
            assert!(!d.contains(c));
        }
    }

    #[test]
    fn test_shuffle_keeps_all_cards() {
        let mut d = Deck::default();
        let mut rng = StdRng::seed_from_u64(7);
        d.shuffle(&mut rng);
        assert_eq!(52, d.len());
        let distinct: HashSet<Card> = d.iter().copied().collect();
        assert_eq!(52, distinct.len());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut base = Deck::default();
        let mut branch = base.clone();
        let c = branch.deal().unwrap();
        // Dealing from the branch never touches the base deck.
        assert_eq!(52, base.len());
        assert!(base.contains(&c));
        assert_eq!(51, branch.len());
        base.deal();
        assert_eq!(51, branch.len());
    }
}
