#![no_main]

use compact_automata::{
    graph::algorithms::strongly_connected_components, Alphabet, CompactConfig, CompactNfa,
    StateId,
};
use libfuzzer_sys::fuzz_target;

// Interprets the input as a stream of storage operations and checks that the SCC result still
// partitions the states afterwards.
fuzz_target!(|data: &[u8]| {
    let Some((&head, ops)) = data.split_first() else {
        return;
    };

    let config = CompactConfig::new()
        .with_initial_capacity(usize::from(head & 0x0f))
        .with_resize_factor(1.0 + f32::from(head >> 4) / 8.0);
    let Ok(mut nfa) = CompactNfa::<u8, ()>::with_config(Alphabet::from_symbols([0]), config) else {
        return;
    };

    for chunk in ops.chunks_exact(4) {
        let state = StateId::new(usize::from(chunk[1]));
        let symbol = usize::from(chunk[2] & 0x07);
        let target = StateId::new(usize::from(chunk[3]));
        match chunk[0] % 8 {
            0 | 1 => {
                nfa.add_state(None);
            }
            2 => {
                nfa.add_alphabet_symbol(chunk[1]);
            }
            3 | 4 => {
                let _ = nfa.add_transition(state, symbol, target);
            }
            5 => {
                let _ = nfa.remove_transition(state, symbol, target);
            }
            6 => {
                let _ = nfa.set_transitions(state, symbol, [state, target]);
            }
            _ => {
                if chunk[1] == 0xff {
                    nfa.clear();
                } else {
                    let _ = nfa.remove_all_transitions(state);
                }
            }
        }
    }

    let sccs = strongly_connected_components(&nfa.as_graph());
    let total: usize = sccs.iter().map(Vec::len).sum();
    assert_eq!(total, nfa.size());
});
