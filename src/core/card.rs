use std::fmt;
use std::str::FromStr;

use super::EquityError;

/// Card rank or value.
/// This is basically the face value - 2
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, in ascending order.
    /// This is used to iterate through all possible
    /// values when creating a new deck, or
    /// generating all possible starting hands.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// The numeric rank of this value, from 2 (Two) up to 14 (Ace).
    ///
    /// This is the number that shows up in kicker sequences: an ace-high
    /// hand has a leading kicker of rank 14.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::Value;
    ///
    /// assert_eq!(2, Value::Two.rank());
    /// assert_eq!(14, Value::Ace.rank());
    /// ```
    pub fn rank(self) -> u8 {
        self as u8 + 2
    }

    /// Parse a value from a single character.
    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// The character used for this value in card notation.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Parse a suit from a single character.
    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'd' => Some(Suit::Diamond),
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    /// The character used for this suit in card notation.
    pub fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'd',
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Club => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from a value and a suit.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::{Card, Suit, Value};
    ///
    /// let c = Card::new(Value::Ace, Suit::Spade);
    /// assert_eq!("As", c.to_string());
    /// ```
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Display a card in two-character notation, value then suit ("As", "Td").
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

/// Parse a single card from two-character notation.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::{Card, Suit, Value};
///
/// let c: Card = "Kh".parse().unwrap();
/// assert_eq!(Card::new(Value::King, Suit::Heart), c);
/// ```
impl FromStr for Card {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let value = chars
            .next()
            .ok_or(EquityError::TooFewChars)
            .and_then(|c| Value::from_char(c).ok_or(EquityError::UnexpectedValueChar))?;
        let suit = chars
            .next()
            .ok_or(EquityError::TooFewChars)
            .and_then(|c| Suit::from_char(c).ok_or(EquityError::UnexpectedSuitChar))?;
        if chars.next().is_some() {
            return Err(EquityError::UnparsedCharsRemaining);
        }
        Ok(Card { value, suit })
    }
}

/// Parse a concatenated run of cards ("AsKh2d") into a vector.
///
/// Duplicate cards are rejected since no well-formed board or hand
/// can repeat a card.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::cards_from_str;
///
/// let cards = cards_from_str("AsKh").unwrap();
/// assert_eq!(2, cards.len());
///
/// assert!(cards_from_str("AsAs").is_err());
/// ```
pub fn cards_from_str(card_string: &str) -> Result<Vec<Card>, EquityError> {
    let mut chars = card_string.chars();
    let mut cards: Vec<Card> = Vec::with_capacity(card_string.len() / 2);

    while let Some(vc) = chars.next() {
        let v = Value::from_char(vc).ok_or(EquityError::UnexpectedValueChar)?;
        let s = chars
            .next()
            .and_then(Suit::from_char)
            .ok_or(EquityError::UnexpectedSuitChar)?;
        let c = Card { value: v, suit: s };
        if cards.contains(&c) {
            return Err(EquityError::DuplicateCard(c));
        }
        cards.push(c);
    }

    Ok(cards)
}
