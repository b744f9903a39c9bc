//! Benchmarks for traversal and strongly connected component analysis.
//!
//! Graph shapes:
//! - Long paths (maximal depth, one state per component)
//! - Rings (one component holding every state)
//! - Random-looking sparse automata with several symbols

extern crate compact_automata;

use compact_automata::{
    graph::algorithms::{preorder, strongly_connected_components},
    graph::NodeId,
    Alphabet, CompactNfa, StateId,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn chain(n: usize, closed: bool) -> CompactNfa<u8> {
    let mut nfa = CompactNfa::new(Alphabet::from_symbols([0]));
    nfa.ensure_capacity(n);
    for _ in 0..n {
        nfa.add_state(None);
    }
    for i in 0..n - 1 {
        nfa.add_transition(StateId::new(i), 0, StateId::new(i + 1))
            .unwrap();
    }
    if closed {
        nfa.add_transition(StateId::new(n - 1), 0, StateId::new(0))
            .unwrap();
    }
    nfa
}

/// Sparse automaton whose transitions follow a linear congruential sequence.
fn scattered(n: usize, symbols: u8) -> CompactNfa<u8> {
    let mut nfa = CompactNfa::new((0..symbols).collect::<Alphabet<u8>>());
    for _ in 0..n {
        nfa.add_state(None);
    }
    let mut x: u64 = 0x2545_f491;
    for s in 0..n {
        for a in 0..symbols as usize {
            x = x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let target = (x >> 33) as usize % n;
            nfa.add_transition(StateId::new(s), a, StateId::new(target))
                .unwrap();
        }
    }
    nfa
}

/// Benchmark SCC analysis of a 100k state path.
fn bench_scc_path(c: &mut Criterion) {
    let nfa = chain(100_000, false);
    c.bench_function("scc_path_100k", |b| {
        b.iter(|| black_box(strongly_connected_components(&nfa.as_graph())));
    });
}

/// Benchmark SCC analysis of a 100k state ring.
fn bench_scc_ring(c: &mut Criterion) {
    let nfa = chain(100_000, true);
    c.bench_function("scc_ring_100k", |b| {
        b.iter(|| black_box(strongly_connected_components(&nfa.as_graph())));
    });
}

/// Benchmark SCC analysis of a sparse automaton with three symbols.
fn bench_scc_scattered(c: &mut Criterion) {
    let nfa = scattered(50_000, 3);
    c.bench_function("scc_scattered_50k", |b| {
        b.iter(|| black_box(strongly_connected_components(&nfa.as_graph())));
    });
}

/// Benchmark a plain pre-order walk for comparison with the SCC visitor.
fn bench_preorder(c: &mut Criterion) {
    let nfa = scattered(50_000, 3);
    c.bench_function("preorder_scattered_50k", |b| {
        b.iter(|| black_box(preorder(&nfa.as_graph(), NodeId::new(0))));
    });
}

criterion_group!(
    benches,
    bench_scc_path,
    bench_scc_ring,
    bench_scc_scattered,
    bench_preorder
);
criterion_main!(benches);
