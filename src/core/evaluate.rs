use super::card::{Card, Value};
use super::rank::{HandRank, HandStrength};

/// Evaluate a two card hand before any board is known.
///
/// A pocket pair ranks as `Pair` with the paired value as its only
/// kicker; anything else is `HighCard` with the two values sorted
/// descending.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::{HandRank, Value, cards_from_str, evaluate_hole_cards};
///
/// let cards = cards_from_str("QdQs").unwrap();
/// let strength = evaluate_hole_cards(&[cards[0], cards[1]]);
/// assert_eq!(HandRank::Pair, strength.rank);
/// assert_eq!(vec![Value::Queen], strength.kickers);
/// ```
pub fn evaluate_hole_cards(cards: &[Card; 2]) -> HandStrength {
    if cards[0].value == cards[1].value {
        HandStrength::new(HandRank::Pair, vec![cards[0].value])
    } else {
        let hi = cards[0].value.max(cards[1].value);
        let lo = cards[0].value.min(cards[1].value);
        HandStrength::new(HandRank::HighCard, vec![hi, lo])
    }
}

/// Evaluate exactly five cards into a [`HandStrength`].
///
/// The result is invariant to the order of the input cards. Duplicate
/// cards are a caller bug and are only caught in debug builds; this
/// sits on the simulation hot path.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::{HandRank, cards_from_str, evaluate_five_cards};
///
/// let cards = cards_from_str("AsKsQsJsTs").unwrap();
/// let strength = evaluate_five_cards(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
/// assert_eq!(HandRank::RoyalFlush, strength.rank);
/// ```
pub fn evaluate_five_cards(cards: &[Card; 5]) -> HandStrength {
    debug_assert!(all_distinct(cards), "duplicate card in evaluation input");

    let mut values: [Value; 5] = cards.map(|c| c.value);
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high_card(&values);

    if is_flush {
        if let Some(high) = straight_high {
            // An ace-high straight flush is T-J-Q-K-A, the royal.
            return if high == Value::Ace {
                HandStrength::new(HandRank::RoyalFlush, vec![])
            } else {
                HandStrength::new(HandRank::StraightFlush, vec![high])
            };
        }
    }

    // Group equal values. The input is sorted descending, so groups
    // come out descending by value; the stable sort by count then
    // puts the quad/trip/pair group first without disturbing that.
    let mut groups: Vec<(Value, usize)> = Vec::with_capacity(5);
    for v in values {
        match groups.last_mut() {
            Some((gv, count)) if *gv == v => *count += 1,
            _ => groups.push((v, 1)),
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    if groups[0].1 == 4 {
        return HandStrength::new(HandRank::FourOfAKind, vec![groups[0].0, groups[1].0]);
    }
    if groups[0].1 == 3 && groups.len() == 2 {
        return HandStrength::new(HandRank::FullHouse, vec![groups[0].0, groups[1].0]);
    }
    if is_flush {
        return HandStrength::new(HandRank::Flush, values.to_vec());
    }
    if let Some(high) = straight_high {
        return HandStrength::new(HandRank::Straight, vec![high]);
    }
    if groups[0].1 == 3 {
        return HandStrength::new(
            HandRank::ThreeOfAKind,
            vec![groups[0].0, groups[1].0, groups[2].0],
        );
    }
    if groups.len() == 3 {
        // Two pairs and the odd card.
        return HandStrength::new(
            HandRank::TwoPair,
            vec![groups[0].0, groups[1].0, groups[2].0],
        );
    }
    if groups.len() == 4 {
        return HandStrength::new(
            HandRank::Pair,
            vec![groups[0].0, groups[1].0, groups[2].0, groups[3].0],
        );
    }
    HandStrength::new(HandRank::HighCard, values.to_vec())
}

/// Find the best five card hand from a pool of board plus hole cards.
///
/// A pool of exactly two cards (no board yet) delegates to
/// [`evaluate_hole_cards`]. A pool of five to seven cards evaluates
/// every five card subset and keeps the maximum, so the result is
/// never lower than any single subset. Any other pool size is a
/// caller bug.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::{HandRank, cards_from_str, evaluate_best_hand};
///
/// let board = cards_from_str("AsAd2c9h9d").unwrap();
/// let hole = cards_from_str("AcKd").unwrap();
/// let strength = evaluate_best_hand(&board, &hole);
/// assert_eq!(HandRank::FullHouse, strength.rank);
/// ```
pub fn evaluate_best_hand(board: &[Card], hole: &[Card]) -> HandStrength {
    let pool: Vec<Card> = board.iter().chain(hole.iter()).copied().collect();
    let n = pool.len();
    match n {
        2 => evaluate_hole_cards(&[pool[0], pool[1]]),
        5..=7 => {
            // The empty kicker list compares below every real hand,
            // so the first evaluated subset always replaces it.
            let mut best = HandStrength::new(HandRank::HighCard, vec![]);
            for i in 0..n - 4 {
                for j in (i + 1)..n - 3 {
                    for k in (j + 1)..n - 2 {
                        for l in (k + 1)..n - 1 {
                            for m in (l + 1)..n {
                                let five = [pool[i], pool[j], pool[k], pool[l], pool[m]];
                                let strength = evaluate_five_cards(&five);
                                if strength > best {
                                    best = strength;
                                }
                            }
                        }
                    }
                }
            }
            best
        }
        _ => panic!("cannot evaluate a pool of {n} cards"),
    }
}

/// The effective high card of a straight, if the five values form one.
///
/// Values must be sorted descending. The wheel (A-5-4-3-2) counts as a
/// straight with Five high; the ace is either strictly highest or
/// strictly lowest, never both, so nothing wraps past the top.
fn straight_high_card(values: &[Value; 5]) -> Option<Value> {
    const WHEEL: [Value; 5] = [Value::Ace, Value::Five, Value::Four, Value::Three, Value::Two];
    if *values == WHEEL {
        return Some(Value::Five);
    }
    let top = values[0].rank();
    if values
        .iter()
        .enumerate()
        .all(|(i, v)| v.rank() == top - i as u8)
    {
        Some(values[0])
    } else {
        None
    }
}

fn all_distinct(cards: &[Card]) -> bool {
    let mut seen = 0u64;
    for c in cards {
        let bit = 1u64 << ((c.value as u64) * 4 + c.suit as u64);
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}
