//! Line-oriented ASCII serialization of a finished [`Automaton`], matching the
//! reference CLI's on-disk format exactly (spec.md §6).

use crate::automaton::Automaton;
use std::fmt::Write as _;

/// Render `automaton` as:
///
/// ```text
/// <N> <K>
/// <len(I)> i0 i1 ...
/// <len(A0)> a...
/// ...
/// <len(A_{K-1})> a...
/// <len(d(0))> t...
/// ...
/// <len(d(N-1))> t...
/// ```
///
/// Indices are zero-based decimal; every set line is sorted ascending and
/// duplicate-free (guaranteed by [`crate::automaton::AutomatonBuilder::finalize`]).
pub fn serialize(automaton: &Automaton) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{} {}",
        automaton.state_count(),
        automaton.accepting_set_count()
    )
    .unwrap();

    write_set(&mut out, automaton.initial());
    for set_index in 0..automaton.accepting_set_count() {
        write_set(&mut out, automaton.accepting(set_index));
    }
    for state in 0..automaton.state_count() {
        write_set(&mut out, automaton.transitions(state));
    }

    out
}

fn write_set(out: &mut String, values: &[usize]) {
    write!(out, "{}", values.len()).unwrap();
    for v in values {
        write!(out, " {v}").unwrap();
    }
    writeln!(out).unwrap();
}
