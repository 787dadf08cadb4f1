use crate::core::{Card, Deck, EquityError};

/// The shared community cards.
///
/// A board holds 0, 3, 4, or 5 cards and only ever grows through
/// those sizes within one hand: flop, then turn, then river. Each
/// stage deals from the top of a deck that has already had every
/// known card removed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Create a board from already revealed cards.
    ///
    /// The card count must be one of the legal street sizes and the
    /// cards must be distinct.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::cards_from_str;
    /// use holdem_equity::holdem::Board;
    ///
    /// let board = Board::new(cards_from_str("Jd4c2s").unwrap()).unwrap();
    /// assert_eq!(3, board.len());
    ///
    /// assert!(Board::new(cards_from_str("Jd4c").unwrap()).is_err());
    /// ```
    pub fn new(cards: Vec<Card>) -> Result<Self, EquityError> {
        if !matches!(cards.len(), 0 | 3 | 4 | 5) {
            return Err(EquityError::InvalidBoardSize(cards.len()));
        }
        for (idx, c) in cards.iter().enumerate() {
            if cards[..idx].contains(c) {
                return Err(EquityError::DuplicateCard(*c));
            }
        }
        Ok(Self { cards })
    }

    /// An empty preflop board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The revealed cards, in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// How many community cards are revealed.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is this a preflop board?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Are all five community cards out?
    pub fn is_complete(&self) -> bool {
        self.cards.len() == 5
    }

    /// Deal the three flop cards. Only legal on an empty board.
    pub fn deal_flop(&mut self, deck: &mut Deck) -> Result<(), EquityError> {
        if !self.cards.is_empty() {
            return Err(EquityError::InvalidStage {
                stage: "flop",
                board_len: self.cards.len(),
            });
        }
        for _ in 0..3 {
            self.cards.push(Self::draw(deck, 3)?);
        }
        Ok(())
    }

    /// Deal the turn card. Only legal after the flop.
    pub fn deal_turn(&mut self, deck: &mut Deck) -> Result<(), EquityError> {
        if self.cards.len() != 3 {
            return Err(EquityError::InvalidStage {
                stage: "turn",
                board_len: self.cards.len(),
            });
        }
        self.cards.push(Self::draw(deck, 1)?);
        Ok(())
    }

    /// Deal the river card. Only legal after the turn.
    pub fn deal_river(&mut self, deck: &mut Deck) -> Result<(), EquityError> {
        if self.cards.len() != 4 {
            return Err(EquityError::InvalidStage {
                stage: "river",
                board_len: self.cards.len(),
            });
        }
        self.cards.push(Self::draw(deck, 1)?);
        Ok(())
    }

    /// Deal every remaining street so the board reaches five cards.
    ///
    /// A board that is already complete is left untouched. This is
    /// what a simulation trial calls after cloning the base deck.
    pub fn run_out(&mut self, deck: &mut Deck) -> Result<(), EquityError> {
        if self.cards.is_empty() {
            self.deal_flop(deck)?;
        }
        if self.cards.len() == 3 {
            self.deal_turn(deck)?;
        }
        if self.cards.len() == 4 {
            self.deal_river(deck)?;
        }
        Ok(())
    }

    /// Replace the card at `idx`. Test and setup convenience only;
    /// nothing on the simulation path rewrites a revealed card.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is past the revealed cards.
    pub fn replace_at(&mut self, idx: usize, card: Card) {
        self.cards[idx] = card;
    }

    fn draw(deck: &mut Deck, needed: usize) -> Result<Card, EquityError> {
        let available = deck.len();
        deck.deal()
            .ok_or(EquityError::InsufficientCards { needed, available })
    }
}
