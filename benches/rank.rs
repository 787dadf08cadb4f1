use criterion::{Criterion, criterion_group, criterion_main};

use holdem_equity::core::{Card, Deck, evaluate_best_hand, evaluate_five_cards};

fn sample(count: usize) -> Vec<Card> {
    let mut deck = Deck::default();
    deck.shuffle(&mut rand::rng());
    (0..count).map(|_| deck.deal().unwrap()).collect()
}

fn rank_one(c: &mut Criterion) {
    let cards = sample(5);
    let hand = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    c.bench_function("Rank one 5 card hand", move |b| {
        b.iter(|| evaluate_five_cards(&hand))
    });
}

fn rank_best_seven(c: &mut Criterion) {
    let cards = sample(7);
    c.bench_function("Rank best 5 card hand from 7", move |b| {
        b.iter(|| evaluate_best_hand(&cards[..5], &cards[5..]))
    });
}

criterion_group!(benches, rank_one, rank_best_seven);
criterion_main!(benches);
