//! The top-level `translate` entry point wiring parsing, normalization, subformula
//! indexing, state enumeration, and automaton construction into a single call
//! (spec.md §6).

use crate::automaton::{Automaton, AutomatonBuilder};
use crate::enumerate::{enumerate, DecisionNode};
use crate::error::TranslateError;
use crate::preprocessing::parser::parse_formula;
use crate::preprocessing::tree::Formula;
use crate::rewrite::normalize;
use crate::subformula::{Status, SubformulaIndex};
use crate::transition::{accepting_sets, has_transition, initial_states};

/// Options threaded explicitly through `translate`, never read from process-wide
/// state — spec.md's Design Notes call this out by name ("expose as an explicit
/// parameter of `translate`, not a process-wide setting").
#[derive(Clone, Copy, Debug, Default)]
pub struct TranslateOptions {
    /// Flips the free-variable mask scan direction (`REVERSED_MASK` in the source).
    pub reversed_mask: bool,
    /// Optional guard: fail with [`TranslateError::TooLarge`] instead of building an
    /// automaton with more than this many states. `None` (the default) is unbounded,
    /// matching spec.md's baseline behavior.
    pub max_states: Option<usize>,
}

/// Everything a translation produces beyond the automaton itself — kept for callers
/// (the CLI's `-v` trace and LaTeX/Graphviz report) that want to show their work; the
/// automaton alone is the documented library contract ([`translate`]).
pub struct Translation {
    pub source: Formula,
    pub normalized: Formula,
    pub index: SubformulaIndex,
    pub states: Vec<Vec<Status>>,
    pub trees: Vec<DecisionNode>,
    pub automaton: Automaton,
}

/// Translate an LTL formula into a generalized Büchi automaton: `translate(formula_text,
/// options) -> Automaton | ParseError`.
pub fn translate(formula_text: &str, options: TranslateOptions) -> Result<Automaton, TranslateError> {
    translate_with_trace(formula_text, options).map(|translation| translation.automaton)
}

/// Like [`translate`], but also returns the parsed formula, its normal form, the
/// subformula index, the raw enumerated states, and their decision trees.
pub fn translate_with_trace(
    formula_text: &str,
    options: TranslateOptions,
) -> Result<Translation, TranslateError> {
    let source = parse_formula(formula_text)?;
    let normalized = normalize(&source);
    let index = SubformulaIndex::build(&normalized);

    let enumeration = enumerate(&index, options.reversed_mask);
    let states = enumeration.states;

    if let Some(limit) = options.max_states {
        if states.len() > limit {
            return Err(TranslateError::TooLarge {
                limit,
                produced: states.len(),
            });
        }
    }

    let accepting = accepting_sets(&index, &states);
    let mut builder = AutomatonBuilder::new(states.len(), accepting.len());

    for state in initial_states(&index, &states) {
        builder.mark_initial(state);
    }
    for (set_index, set) in accepting.into_iter().enumerate() {
        for state in set {
            builder.mark_accepting(set_index, state);
        }
    }
    for from in 0..states.len() {
        for to in 0..states.len() {
            if has_transition(&index, &states, from, to) {
                builder.add_transition(from, to);
            }
        }
    }

    Ok(Translation {
        source,
        normalized,
        index,
        states,
        trees: enumeration.trees,
        automaton: builder.finalize(),
    })
}
