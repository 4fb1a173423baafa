use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_checkers::game_state::checkers_types::Color;
use plum_checkers::game_state::game_state::GameState;
use plum_checkers::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    red: u64,
    black: u64,
    kings: u64,
    side_to_move: Color,
    expected_nodes: &'static [u64],
}

const STARTPOS: BenchCase = BenchCase {
    name: "startpos",
    red: 0x0000_0000_00AA_55AA,
    black: 0x55AA_5500_0000_0000,
    kings: 0,
    side_to_move: Color::Red,
    expected_nodes: &[7, 49, 302, 1469],
};

const CASES_QUICK: &[BenchCase] = &[STARTPOS];

const CASES_STANDARD: &[BenchCase] = &[BenchCase {
    expected_nodes: &[7, 49, 302, 1469, 7361, 36_768],
    ..STARTPOS
}];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite_name = match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = GameState::from_bitboards(case.red, case.black, case.kings, case.side_to_move)
            .expect("benchmark position should be valid");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
