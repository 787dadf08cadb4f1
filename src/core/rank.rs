use std::fmt;

use super::Value;

/// All the different possible hand ranks, lowest to highest.
///
/// The discriminant is the 0-9 strength tier. Ties inside a tier are
/// broken by the kicker sequence carried in [`HandStrength`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum HandRank {
    /// The lowest rank.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    Pair = 1,
    /// Two different pair of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five cards in a sequence all of the same suit.
    StraightFlush = 8,
    /// Ten to Ace, all of the same suit.
    RoyalFlush = 9,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };
        write!(f, "{name}")
    }
}

/// The full strength of an evaluated hand.
///
/// A rank tier plus the kicker sequence that breaks ties inside the
/// tier, most significant kicker first. The derived ordering compares
/// the tier first and then the kickers element-wise, so two strengths
/// compare exactly the way hands compare at showdown; a fully equal
/// comparison is a tie (a chopped pot).
///
/// This is a pure value. It is produced per evaluation and owned by
/// nobody beyond the comparison consuming it.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::{HandRank, HandStrength, Value};
///
/// let kings = HandStrength::new(HandRank::Pair, vec![Value::King]);
/// let aces = HandStrength::new(HandRank::Pair, vec![Value::Ace]);
/// assert!(aces > kings);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct HandStrength {
    /// The 0-9 strength tier.
    pub rank: HandRank,
    /// Tie-break values within the tier, most significant first.
    pub kickers: Vec<Value>,
}

impl HandStrength {
    /// Create a new strength from a tier and its kicker sequence.
    pub fn new(rank: HandRank, kickers: Vec<Value>) -> Self {
        Self { rank, kickers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_tier_order() {
        assert!(HandRank::HighCard < HandRank::Pair);
        assert!(HandRank::Straight < HandRank::Flush);
        assert!(HandRank::StraightFlush < HandRank::RoyalFlush);
        assert_eq!(9, HandRank::RoyalFlush as u8);
        assert_eq!(0, HandRank::HighCard as u8);
    }

    #[test]
    fn test_tier_beats_kickers() {
        // The worst two pair still beats the best pair.
        let two_pair = HandStrength::new(
            HandRank::TwoPair,
            vec![Value::Three, Value::Two, Value::Four],
        );
        let pair = HandStrength::new(
            HandRank::Pair,
            vec![Value::Ace, Value::King, Value::Queen, Value::Jack],
        );
        assert!(two_pair > pair);
    }

    #[test]
    fn test_kickers_break_ties() {
        let low = HandStrength::new(HandRank::Flush, vec![
            Value::King,
            Value::Jack,
            Value::Nine,
            Value::Five,
            Value::Two,
        ]);
        let high = HandStrength::new(HandRank::Flush, vec![
            Value::King,
            Value::Jack,
            Value::Nine,
            Value::Five,
            Value::Three,
        ]);
        assert!(high > low);
    }

    #[test]
    fn test_equal_is_tie() {
        let a = HandStrength::new(HandRank::Straight, vec![Value::Nine]);
        let b = HandStrength::new(HandRank::Straight, vec![Value::Nine]);
        assert_eq!(Ordering::Equal, a.cmp(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_order_is_transitive() {
        let a = HandStrength::new(HandRank::HighCard, vec![Value::Ace]);
        let b = HandStrength::new(HandRank::Pair, vec![Value::Two]);
        let c = HandStrength::new(HandRank::TwoPair, vec![Value::Two, Value::Three]);
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
    }
}
