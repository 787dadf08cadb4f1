use thiserror::Error;

use super::Card;

/// This is the error type for the library. It uses
/// `thiserror` to provide readable error messages.
///
/// Input validation errors are surfaced synchronously through this
/// type before any simulation work begins. Internal invariant
/// violations (an evaluator fed the wrong number of cards, for
/// example) are programming defects and panic instead.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EquityError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} appears more than once across the board and hands")]
    DuplicateCard(Card),
    #[error("A board must have 0, 3, 4, or 5 cards, not {0}")]
    InvalidBoardSize(usize),
    #[error("A player holds exactly 0 or 2 hole cards, not {0}")]
    InvalidHoleCards(usize),
    #[error("Player name {0:?} is used more than once")]
    DuplicatePlayerName(String),
    #[error("At least one player is needed to simulate equity")]
    NotEnoughPlayers,
    #[error("The deck has {available} cards but {needed} are needed to finish the deal")]
    InsufficientCards { needed: usize, available: usize },
    #[error("The trial count must be positive")]
    ZeroTrials,
    #[error("Cannot deal the {stage} while the board has {board_len} cards")]
    InvalidStage {
        stage: &'static str,
        board_len: usize,
    },
    #[error("Unable to parse starting hand notation {0:?}")]
    UnknownNotation(String),
}
