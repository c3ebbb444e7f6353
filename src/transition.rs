//! Deriving the initial set, the accepting-set family, and the transition relation from
//! the consistency rules over `U` and `X` subformulas (spec.md §4.5).

use crate::preprocessing::operators::{BinaryOp, UnaryOp};
use crate::preprocessing::tree::NodeKind;
use crate::subformula::{Status, SubformulaIndex};

/// `I = { s : s[root] = TRUE }`.
pub fn initial_states(index: &SubformulaIndex, states: &[Vec<Status>]) -> Vec<usize> {
    let root = index.root_index();
    states
        .iter()
        .enumerate()
        .filter(|(_, s)| s[root] == Status::True)
        .map(|(i, _)| i)
        .collect()
}

/// One accepting set per temporal subformula of `All`, in `All`-order. For `ψ = lhs U
/// rhs` (the only temporal shape normalized input contains) the dischargee is `rhs`;
/// the engine also tolerates un-normalized `R`/`W`/`F`/`G` here per spec.md §4.5, using
/// `lhs` as the dischargee for `F`/`G` and `rhs` for `R`/`W`.
///
/// `A_ψ = { s : s[ψ] = s[dischargee] }`.
pub fn accepting_sets(index: &SubformulaIndex, states: &[Vec<Status>]) -> Vec<Vec<usize>> {
    let mut sets = Vec::new();

    for (psi_idx, formula) in index.all.iter().enumerate() {
        let dischargee = match &formula.node {
            NodeKind::Binary(BinaryOp::U, _, _)
            | NodeKind::Binary(BinaryOp::R, _, _)
            | NodeKind::Binary(BinaryOp::W, _, _) => index.rhs[psi_idx],
            NodeKind::Unary(UnaryOp::F, _) | NodeKind::Unary(UnaryOp::G, _) => index.lhs[psi_idx],
            _ => None,
        };
        let Some(dischargee) = dischargee else {
            continue;
        };

        let set = states
            .iter()
            .enumerate()
            .filter(|(_, s)| s[psi_idx] == s[dischargee])
            .map(|(i, _)| i)
            .collect();
        sets.push(set);
    }

    sets
}

/// Whether `from -> to` is a legal transition: every `U` obligation in `All` is either
/// discharged, vacuous, or propagated unchanged, and every `X` subformula's value at
/// `from` matches its operand's value at `to`.
pub fn has_transition(index: &SubformulaIndex, states: &[Vec<Status>], from: usize, to: usize) -> bool {
    let s_from = &states[from];
    let s_to = &states[to];

    for (i, formula) in index.all.iter().enumerate() {
        match &formula.node {
            NodeKind::Binary(BinaryOp::U, _, _) => {
                let l = index.lhs[i].expect("U has a left operand");
                let r = index.rhs[i].expect("U has a right operand");

                let discharged_now = s_from[i] == Status::True && s_from[r] == Status::True;
                let vacuous = s_from[i] == Status::False
                    && s_from[l] == Status::False
                    && s_from[r] == Status::False;
                let must_propagate =
                    s_from[l] == Status::True && s_from[r] == Status::False && s_from[i] == s_to[i];

                if !(discharged_now || vacuous || must_propagate) {
                    return false;
                }
            }
            NodeKind::Unary(UnaryOp::X, _) => {
                let operand = index.lhs[i].expect("X has one operand");
                if s_from[i] != s_to[operand] {
                    return false;
                }
            }
            NodeKind::Binary(BinaryOp::R, _, _) | NodeKind::Binary(BinaryOp::W, _, _) => {
                debug_assert!(
                    false,
                    "residual R/W reached transition construction; normalize() must run first"
                );
            }
            _ => {}
        }
    }

    true
}

/// The full adjacency list, `δ(s)` for every state `s`, in ascending order.
pub fn transitions(index: &SubformulaIndex, states: &[Vec<Status>]) -> Vec<Vec<usize>> {
    (0..states.len())
        .map(|from| {
            (0..states.len())
                .filter(|&to| has_transition(index, states, from, to))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::enumerate;
    use crate::preprocessing::parser::parse_formula;
    use crate::rewrite::normalize;

    fn build(formula_text: &str) -> (SubformulaIndex, Vec<Vec<Status>>) {
        let formula = normalize(&parse_formula(formula_text).unwrap());
        let index = SubformulaIndex::build(&formula);
        let states = enumerate(&index, false).states;
        (index, states)
    }

    #[test]
    fn initial_states_are_exactly_root_true_states() {
        let (index, states) = build("U a b");
        let initial = initial_states(&index, &states);
        for &s in &initial {
            assert_eq!(states[s][index.root_index()], Status::True);
        }
        assert_eq!(initial.len(), states.iter().filter(|s| s[index.root_index()] == Status::True).count());
    }

    #[test]
    fn accepting_set_matches_the_until_definition() {
        let (index, states) = build("U a b");
        let sets = accepting_sets(&index, &states);
        assert_eq!(sets.len(), 1);
        let u_idx = index.root_index();
        let rhs_idx = index.rhs[u_idx].unwrap();
        for &s in &sets[0] {
            assert_eq!(states[s][u_idx], states[s][rhs_idx]);
        }
    }

    #[test]
    fn inconsistent_state_has_no_outgoing_transition() {
        // spec.md scenario 4: a=T, b=F, (a U b)=F is inconsistent (U-propagation
        // requires either T or an unchanged obligation when a holds and b doesn't).
        let (index, states) = build("U a b");
        let a_idx = index.atoms[0];
        let b_idx = index.atoms[1];
        let u_idx = index.root_index();

        let dead = states.iter().position(|s| {
            s[a_idx] == Status::True && s[b_idx] == Status::False && s[u_idx] == Status::False
        });
        let dead = dead.expect("scenario 4 requires this state to exist");
        let out = transitions(&index, &states);
        assert!(out[dead].is_empty());
    }

    #[test]
    fn x_transition_propagates_operand_value() {
        let (index, states) = build("X a");
        let x_idx = index.root_index();
        let a_idx = index.lhs[x_idx].unwrap();
        let out = transitions(&index, &states);
        for (from, targets) in out.iter().enumerate() {
            for &to in targets {
                assert_eq!(states[from][x_idx], states[to][a_idx]);
            }
        }
    }
}
