//! This is the core module. It exports the card model, the deck,
//! and the hand strength evaluator. Everything in here is agnostic
//! to how a game dealt the cards.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, Suit, and the card string parser.
pub use self::card::{Card, Suit, Value, cards_from_str};

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Errors for the whole library.
mod error;
/// Export `EquityError`
pub use self::error::EquityError;

/// Hand rank tiers and kicker sequences.
mod rank;
/// Export the strength types.
pub use self::rank::{HandRank, HandStrength};

/// 2, 5, and best-of-N card hand evaluation.
mod evaluate;
/// Export the evaluator functions.
pub use self::evaluate::{evaluate_best_hand, evaluate_five_cards, evaluate_hole_cards};
