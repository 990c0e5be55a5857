use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_arbiter::utils::algebraic::parse_coordinate_move;
use chess_arbiter::GameState;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    moves: &'static [&'static str],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "start",
        moves: &[],
    },
    BenchCase {
        name: "italian",
        moves: &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5"],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "start",
        moves: &[],
    },
    BenchCase {
        name: "italian",
        moves: &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5"],
    },
    BenchCase {
        name: "open_middlegame",
        moves: &[
            "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5", "e1g1", "g8f6", "d2d3", "d7d6",
            "c1g5", "c8g4", "b1c3", "e8g8",
        ],
    },
    BenchCase {
        name: "scholars_mate",
        moves: &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    },
];

fn selected_cases() -> (&'static str, &'static [BenchCase]) {
    match std::env::var("ARBITER_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => ("standard", CASES_STANDARD),
        _ => ("quick", CASES_QUICK),
    }
}

fn replay(moves: &[&str]) -> GameState {
    let mut game = GameState::new_game();
    for lan in moves {
        let (from, to) = parse_coordinate_move(lan).expect("bench move should parse");
        game.try_move_piece(from, to)
            .expect("bench move should be legal");
    }
    game
}

fn bench_rules(c: &mut Criterion) {
    let (suite_name, cases) = selected_cases();

    let mut group = c.benchmark_group(format!("rules_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(20);

    for case in cases {
        let game = replay(case.moves);
        let side = game.current_turn();

        group.bench_with_input(
            BenchmarkId::new("has_legal_moves", case.name),
            &game,
            |b, game| b.iter(|| black_box(game.has_legal_moves(black_box(side)))),
        );

        let move_count = game.generate_legal_moves(side).len() as u64;
        group.throughput(Throughput::Elements(move_count.max(1)));
        group.bench_with_input(
            BenchmarkId::new("generate_legal_moves", case.name),
            &game,
            |b, game| b.iter(|| black_box(game.generate_legal_moves(black_box(side)).len())),
        );

        group.throughput(Throughput::Elements(case.moves.len().max(1) as u64));
        group.bench_with_input(BenchmarkId::new("replay", case.name), case.moves, |b, moves| {
            b.iter(|| black_box(replay(black_box(moves))).move_history().len())
        });
    }

    group.finish();
}

criterion_group!(rules_benches, bench_rules);
criterion_main!(rules_benches);
