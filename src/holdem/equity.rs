use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use tracing::event;

use crate::core::{Card, Deck, EquityError, HandStrength, evaluate_best_hand};

use super::board::Board;
use super::player::Player;

/// The trial count used when the caller does not pick one.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Win/tie/loss percentages for one player, each in [0, 100] and
/// rounded to two decimal places. The three add up to 100 give or
/// take rounding.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Equity {
    /// Percentage of trials this player beat every opponent.
    pub win: f64,
    /// Percentage of trials this player chopped with the best hand.
    pub tie: f64,
    /// Percentage of trials some opponent beat this player.
    pub loss: f64,
}

/// Per-player outcome counters for one or more trials.
#[derive(Debug, Clone, Copy, Default)]
struct OutcomeCounts {
    win: u64,
    tie: u64,
    loss: u64,
}

impl OutcomeCounts {
    fn merge(&mut self, other: OutcomeCounts) {
        self.win += other.win;
        self.tie += other.tie;
        self.loss += other.loss;
    }
}

/// Estimate each player's equity with [`DEFAULT_TRIALS`] monte carlo
/// trials.
pub fn simulate_equity_default(
    board: &Board,
    players: &[Player],
) -> Result<HashMap<String, Equity>, EquityError> {
    simulate_equity(board, players, DEFAULT_TRIALS)
}

/// Monte carlo win/tie/loss simulation.
///
/// Every trial clones the base deck (the full deck minus all known
/// cards), shuffles its clone, deals two cards to each player with an
/// unknown hand, runs the board out to five cards, and scores each
/// player's best five card hand. Outcomes are summed over all trials
/// and converted to percentages keyed by player name.
///
/// Trials are independent and fan out over the rayon worker pool;
/// each carries its own deck clone and thread-local randomness, and
/// the only shared mutation is the final reduction of counters, so
/// the statistics do not depend on how many workers ran or in what
/// order trials finished. A failed trial aborts the whole call;
/// partial results are never returned.
///
/// All input validation happens before the first trial: board size is
/// enforced by [`Board`], and this function rejects an empty player
/// list, a duplicated player name, a zero trial count, a card that
/// appears twice across the board and hands, and a deck too small to
/// finish dealing.
///
/// # Examples
///
/// ```
/// use holdem_equity::holdem::{Board, Player, simulate_equity};
///
/// let board = Board::empty();
/// let players = vec![
///     Player::from_hole_str("hero", "AsAh").unwrap(),
///     Player::from_hole_str("villain", "7c2d").unwrap(),
/// ];
/// let equity = simulate_equity(&board, &players, 1000).unwrap();
/// assert!(equity["hero"].win > equity["villain"].win);
/// ```
pub fn simulate_equity(
    board: &Board,
    players: &[Player],
    trials: usize,
) -> Result<HashMap<String, Equity>, EquityError> {
    let base_deck = validate(board, players, trials)?;

    event!(
        tracing::Level::DEBUG,
        players = players.len(),
        board_cards = board.len(),
        trials,
        "simulating equity"
    );

    let totals: Vec<OutcomeCounts> = (0..trials)
        .into_par_iter()
        .map(|_| run_trial(&base_deck, board, players))
        .try_reduce(
            || vec![OutcomeCounts::default(); players.len()],
            |mut acc, counts| {
                for (a, c) in acc.iter_mut().zip(counts) {
                    a.merge(c);
                }
                Ok(acc)
            },
        )?;

    event!(tracing::Level::DEBUG, trials, "equity simulation finished");

    Ok(players
        .iter()
        .zip(totals)
        .map(|(player, counts)| {
            (
                player.name().to_string(),
                Equity {
                    win: to_percent(counts.win, trials),
                    tie: to_percent(counts.tie, trials),
                    loss: to_percent(counts.loss, trials),
                },
            )
        })
        .collect())
}

/// Check every caller-facing precondition and build the base deck
/// with all known cards removed. No simulation work happens before
/// this returns.
fn validate(board: &Board, players: &[Player], trials: usize) -> Result<Deck, EquityError> {
    if players.is_empty() {
        return Err(EquityError::NotEnoughPlayers);
    }
    if trials == 0 {
        return Err(EquityError::ZeroTrials);
    }

    let mut names: HashSet<&str> = HashSet::with_capacity(players.len());
    for p in players {
        if !names.insert(p.name()) {
            return Err(EquityError::DuplicatePlayerName(p.name().to_string()));
        }
    }

    let mut known: Vec<Card> = Vec::with_capacity(board.len() + players.len() * 2);
    for c in board
        .cards()
        .iter()
        .chain(players.iter().flat_map(|p| p.hole_cards()))
    {
        if known.contains(c) {
            return Err(EquityError::DuplicateCard(*c));
        }
        known.push(*c);
    }

    let mut base_deck = Deck::default();
    base_deck.remove_all(&known);

    let unknown = players.iter().filter(|p| !p.has_known_hole()).count();
    let needed = unknown * 2 + (5 - board.len());
    if base_deck.len() < needed {
        return Err(EquityError::InsufficientCards {
            needed,
            available: base_deck.len(),
        });
    }

    Ok(base_deck)
}

/// One independent trial: deal the unknowns, run the board out, and
/// score every player. Nothing here touches shared state.
fn run_trial(
    base_deck: &Deck,
    board: &Board,
    players: &[Player],
) -> Result<Vec<OutcomeCounts>, EquityError> {
    let mut rng = rand::rng();
    let mut deck = base_deck.clone();
    // Shuffle before any dealing so unknown hands draw random cards,
    // not whatever happens to sit on top of the sorted base deck.
    deck.shuffle(&mut rng);

    let mut holes: Vec<[Card; 2]> = Vec::with_capacity(players.len());
    for p in players {
        if let [a, b] = *p.hole_cards() {
            holes.push([a, b]);
        } else {
            let a = draw(&mut deck)?;
            let b = draw(&mut deck)?;
            holes.push([a, b]);
        }
    }

    let mut trial_board = board.clone();
    trial_board.run_out(&mut deck)?;

    let strengths: Vec<HandStrength> = holes
        .iter()
        .map(|hole| evaluate_best_hand(trial_board.cards(), hole))
        .collect();

    Ok(trial_outcomes(&strengths))
}

fn draw(deck: &mut Deck) -> Result<Card, EquityError> {
    let available = deck.len();
    deck.deal().ok_or(EquityError::InsufficientCards {
        needed: 1,
        available,
    })
}

/// Resolve one trial's showdown into per-player one-hot counts.
///
/// A player loses if any opponent strictly beats them, wins if they
/// strictly beat every opponent, and ties when beaten by nobody but
/// matched exactly by somebody. Every pair is compared, so the result
/// does not depend on seat order.
fn trial_outcomes(strengths: &[HandStrength]) -> Vec<OutcomeCounts> {
    strengths
        .iter()
        .enumerate()
        .map(|(i, mine)| {
            let mut beaten = false;
            let mut tied = false;
            for (j, other) in strengths.iter().enumerate() {
                if i == j {
                    continue;
                }
                match mine.cmp(other) {
                    Ordering::Less => beaten = true,
                    Ordering::Equal => tied = true,
                    Ordering::Greater => {}
                }
            }
            if beaten {
                OutcomeCounts {
                    loss: 1,
                    ..OutcomeCounts::default()
                }
            } else if tied {
                OutcomeCounts {
                    tie: 1,
                    ..OutcomeCounts::default()
                }
            } else {
                OutcomeCounts {
                    win: 1,
                    ..OutcomeCounts::default()
                }
            }
        })
        .collect()
}

fn to_percent(count: u64, trials: usize) -> f64 {
    round_two_places(count as f64 / trials as f64 * 100.0)
}

fn round_two_places(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
