//! All the holdem specific code: the community board, the players at
//! the table, starting hand classes, and the equity simulator.

/// Module for the community cards and street dealing.
mod board;
/// Export `Board`
pub use self::board::Board;

/// Module for a named seat and its hole cards.
mod player;
/// Export `Player`
pub use self::player::Player;

/// Module that can generate possible cards for a starting hand.
mod starting_hand;
/// Export `StartingHand` and `Suitedness`
pub use self::starting_hand::{StartingHand, Suitedness};

/// Module with the monte carlo win/tie/loss simulation.
mod equity;
/// Export the simulator entry points and its result type.
pub use self::equity::{DEFAULT_TRIALS, Equity, simulate_equity, simulate_equity_default};
