//! Benchmarks for the compact automaton storage engine.
//!
//! Measures the two growth paths and the hot lookup path:
//! - State addition with amortized capacity growth
//! - Alphabet widening over a populated table
//! - Transition insertion and successor lookup

extern crate compact_automata;

use compact_automata::{Alphabet, CompactConfig, CompactNfa, StateId};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Builds a deterministic automaton where state `i` moves to `(i * 7 + a) % n` on symbol `a`.
fn populated(states: usize, symbols: u32) -> CompactNfa<u32> {
    let mut nfa = CompactNfa::new((0..symbols).collect::<Alphabet<u32>>());
    for _ in 0..states {
        nfa.add_state(None);
    }
    for s in 0..states {
        for a in 0..symbols as usize {
            let target = StateId::new((s * 7 + a) % states);
            nfa.add_transition(StateId::new(s), a, target).unwrap();
        }
    }
    nfa
}

/// Benchmark adding states one by one from the default capacity.
fn bench_add_states(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_states");
    for &count in &[1_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut nfa: CompactNfa<u8> = CompactNfa::new(Alphabet::from_symbols([0, 1]));
                for _ in 0..count {
                    black_box(nfa.add_state(None));
                }
                nfa
            });
        });
    }
    group.finish();
}

/// Benchmark adding states into a table that was reserved up front.
fn bench_add_states_reserved(c: &mut Criterion) {
    c.bench_function("add_states_reserved_100k", |b| {
        b.iter(|| {
            let config = CompactConfig::new().with_initial_capacity(100_000);
            let mut nfa: CompactNfa<u8> =
                CompactNfa::with_config(Alphabet::from_symbols([0, 1]), config).unwrap();
            for _ in 0..100_000 {
                black_box(nfa.add_state(None));
            }
            nfa
        });
    });
}

/// Benchmark widening the alphabet of a populated automaton.
fn bench_add_alphabet_symbol(c: &mut Criterion) {
    let base = populated(10_000, 4);
    c.bench_function("add_alphabet_symbol_10k_states", |b| {
        b.iter_batched(
            || base.clone(),
            |mut nfa| black_box(nfa.add_alphabet_symbol(4)),
            criterion::BatchSize::LargeInput,
        );
    });
}

/// Benchmark successor lookups across the whole table.
fn bench_successors(c: &mut Criterion) {
    let nfa = populated(10_000, 4);
    c.bench_function("successors_10k_states", |b| {
        b.iter(|| {
            let mut total = 0;
            for state in nfa.states() {
                for a in 0..4 {
                    total += nfa.successors(state, a).unwrap().len();
                }
            }
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    bench_add_states,
    bench_add_states_reserved,
    bench_add_alphabet_symbol,
    bench_successors
);
criterion_main!(benches);
