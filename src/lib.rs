//! holdem_equity is a library for Texas Hold'em equity calculation.
//! It is not the fastest hand ranking around. However it is clean,
//! well tested code that answers one question: given a board and a
//! table of known or unknown hands, how often does each player win,
//! tie, or lose the pot?
//!
//! The evaluator scores any two to seven cards into a rank tier plus
//! kicker sequence with a total order, and the simulator samples the
//! remaining deck over many independent trials in parallel.
//!
//! ```
//! use holdem_equity::holdem::{Board, Player, simulate_equity};
//!
//! let board = Board::empty();
//! let players = vec![
//!     Player::from_hole_str("hero", "QsQh").unwrap(),
//!     Player::unknown("villain"),
//! ];
//! let equity = simulate_equity(&board, &players, 2_000).unwrap();
//! assert!(equity["hero"].win > 50.0);
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
