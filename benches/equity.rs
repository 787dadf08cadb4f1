use criterion::{Criterion, criterion_group, criterion_main};

use holdem_equity::core::cards_from_str;
use holdem_equity::holdem::{Board, Player, simulate_equity};

fn simulate_heads_up(c: &mut Criterion) {
    let board = Board::empty();
    let players = vec![
        Player::from_hole_str("hero", "AsAh").unwrap(),
        Player::from_hole_str("villain", "KsKd").unwrap(),
    ];
    c.bench_function("Simulate 1000 trials heads up", move |b| {
        b.iter(|| simulate_equity(&board, &players, 1_000).unwrap())
    });
}

fn simulate_multiway_with_unknowns(c: &mut Criterion) {
    let board = Board::new(cards_from_str("Jd4c2s").unwrap()).unwrap();
    let players = vec![
        Player::from_hole_str("hero", "AsKh").unwrap(),
        Player::from_hole_str("villain", "QdJc").unwrap(),
        Player::unknown("mystery"),
    ];
    c.bench_function("Simulate 1000 trials three way on a flop", move |b| {
        b.iter(|| simulate_equity(&board, &players, 1_000).unwrap())
    });
}

criterion_group!(benches, simulate_heads_up, simulate_multiway_with_unknowns);
criterion_main!(benches);
