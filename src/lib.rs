//! Translates linear temporal logic formulae into generalized Büchi automata.
//!
//! The library covers parsing, normalization (pushing `X` inward and eliminating
//! `R`/`W`/`G`/`F` in favor of `U`), maximally-consistent state enumeration, and
//! derivation of the initial set, acceptance sets, and transition relation. LaTeX and
//! Graphviz report emission live alongside the core but are not part of its contract;
//! see [`translate::translate`] for the documented entry point.

pub mod automaton;
pub mod enumerate;
pub mod error;
pub mod preprocessing;
pub mod report;
pub mod result_print;
pub mod rewrite;
pub mod serialize;
pub mod subformula;
pub mod transition;
pub mod translate;
