//! The `All` subformula vector, its `Atoms` subsequence, and the bottom-up truth
//! propagation rule (`calculate`) the state enumerator drives to a fixed point
//! (spec.md §4.3, §4.4).

use crate::preprocessing::operators::{Atom, BinaryOp, UnaryOp};
use crate::preprocessing::tree::{Formula, NodeKind};

/// The truth value a subformula holds within a (possibly still-being-built) state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    True,
    False,
    Unknown,
}

/// Every distinct subformula of a normalized tree (`All`), discovered in post-order of
/// first occurrence, plus the positions of its free variables (`Atoms`): the atomic
/// propositions and `X`-rooted subformulas whose truth cannot be derived from others.
///
/// `lhs`/`rhs` cache each position's operand indices into `all`, so [`calculate`] and
/// the transition engine never need to linearly rescan `all` for a child's position.
pub struct SubformulaIndex {
    pub all: Vec<Formula>,
    pub atoms: Vec<usize>,
    pub lhs: Vec<Option<usize>>,
    pub rhs: Vec<Option<usize>>,
}

impl SubformulaIndex {
    /// Build the index for a normalized formula. The root is guaranteed to be the last
    /// element of `all`.
    pub fn build(root: &Formula) -> SubformulaIndex {
        let mut all = Vec::new();
        let mut lhs = Vec::new();
        let mut rhs = Vec::new();
        collect(root, &mut all, &mut lhs, &mut rhs);

        let atoms = all
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_free_variable())
            .map(|(i, _)| i)
            .collect();

        SubformulaIndex {
            all,
            atoms,
            lhs,
            rhs,
        }
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Index of the root formula — the last element of `all` by construction.
    pub fn root_index(&self) -> usize {
        self.all.len() - 1
    }
}

fn collect(
    formula: &Formula,
    all: &mut Vec<Formula>,
    lhs: &mut Vec<Option<usize>>,
    rhs: &mut Vec<Option<usize>>,
) -> usize {
    let (l, r) = match &formula.node {
        NodeKind::Terminal(_) => (None, None),
        NodeKind::Unary(_, child) => (Some(collect(child, all, lhs, rhs)), None),
        NodeKind::Binary(_, left, right) => {
            let l = collect(left, all, lhs, rhs);
            let r = collect(right, all, lhs, rhs);
            (Some(l), Some(r))
        }
    };

    match all.iter().position(|f| f == formula) {
        Some(existing) => existing,
        None => {
            all.push(formula.clone());
            lhs.push(l);
            rhs.push(r);
            all.len() - 1
        }
    }
}

/// Propagate forced statuses through `status` (indexed the same as `index.all`) bottom
/// up. Positions already set (the free-variable assignment) are left untouched; every
/// other position is (re-)computed from its operands, which — since `all` is in
/// post-order — always precede it.
pub fn calculate(index: &SubformulaIndex, status: &mut [Status]) {
    for i in 0..index.len() {
        if status[i] != Status::Unknown {
            continue;
        }
        let l = index.lhs[i].map(|j| status[j]);
        let r = index.rhs[i].map(|j| status[j]);
        status[i] = eval_node(&index.all[i].node, l, r);
    }
}

fn eval_node(node: &NodeKind, l: Option<Status>, r: Option<Status>) -> Status {
    use Status::{False, True, Unknown};

    match node {
        NodeKind::Terminal(Atom::True) => True,
        NodeKind::Terminal(Atom::False) => False,
        // Propositions are always preset by the free-variable assignment before
        // `calculate` runs; reaching here with one still unset is a caller error.
        NodeKind::Terminal(Atom::Prop(_)) => Unknown,
        NodeKind::Unary(UnaryOp::Not, _) => match l.expect("NOT has one operand") {
            True => False,
            False => True,
            Unknown => Unknown,
        },
        // `X`'s own truth is a free variable too, preset alongside the atoms.
        NodeKind::Unary(UnaryOp::X, _) => Unknown,
        NodeKind::Unary(UnaryOp::F, _) => {
            if l.expect("F has one operand") == True {
                True
            } else {
                Unknown
            }
        }
        NodeKind::Unary(UnaryOp::G, _) => {
            if l.expect("G has one operand") == False {
                False
            } else {
                Unknown
            }
        }
        NodeKind::Binary(BinaryOp::And, _, _) => {
            match (l.expect("AND has two operands"), r.expect("AND has two operands")) {
                (True, True) => True,
                (False, _) | (_, False) => False,
                _ => Unknown,
            }
        }
        NodeKind::Binary(BinaryOp::Or, _, _) => {
            match (l.expect("OR has two operands"), r.expect("OR has two operands")) {
                (True, _) | (_, True) => True,
                (False, False) => False,
                _ => Unknown,
            }
        }
        NodeKind::Binary(BinaryOp::Impl, _, _) => {
            match (l.expect("IMPL has two operands"), r.expect("IMPL has two operands")) {
                (False, _) | (_, True) => True,
                (True, False) => False,
                _ => Unknown,
            }
        }
        NodeKind::Binary(BinaryOp::U, _, _) => {
            match (l.expect("U has two operands"), r.expect("U has two operands")) {
                (_, True) => True,
                (False, False) => False,
                _ => Unknown,
            }
        }
        NodeKind::Binary(BinaryOp::R, _, _) | NodeKind::Binary(BinaryOp::W, _, _) => {
            debug_assert!(
                false,
                "residual R/W reached calculate(); normalize() must run first"
            );
            Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessing::parser::parse_formula;
    use crate::rewrite::normalize;

    fn index_for(formula_text: &str) -> SubformulaIndex {
        let formula = normalize(&parse_formula(formula_text).unwrap());
        SubformulaIndex::build(&formula)
    }

    #[test]
    fn all_is_deduplicated_and_root_last() {
        let index = index_for("& p p");
        // `p` occurs twice syntactically but once in `All`; the root `& p p` is last.
        assert_eq!(index.all.len(), 2);
        assert_eq!(index.all[index.root_index()].to_string(), "(& p p)");
    }

    #[test]
    fn atoms_contains_props_and_next_subformulas_only() {
        let index = index_for("& p (X q)");
        let atom_strings: Vec<_> = index
            .atoms
            .iter()
            .map(|&i| index.all[i].to_string())
            .collect();
        assert_eq!(atom_strings, vec!["p", "(X q)"]);
    }

    #[test]
    fn calculate_resolves_and_from_preset_atoms() {
        let index = index_for("& p q");
        let p = index.atoms[0];
        let q = index.atoms[1];
        let mut status = vec![Status::Unknown; index.len()];
        status[p] = Status::True;
        status[q] = Status::True;
        calculate(&index, &mut status);
        assert_eq!(status[index.root_index()], Status::True);
    }

    #[test]
    fn calculate_leaves_until_unknown_when_undetermined() {
        let index = index_for("U p q");
        let p = index.atoms[0];
        let q = index.atoms[1];
        let mut status = vec![Status::Unknown; index.len()];
        status[p] = Status::True;
        status[q] = Status::False;
        calculate(&index, &mut status);
        assert_eq!(status[index.root_index()], Status::Unknown);
    }

    #[test]
    fn calculate_short_circuits_until_when_rhs_true() {
        let index = index_for("U p q");
        let p = index.atoms[0];
        let q = index.atoms[1];
        let mut status = vec![Status::Unknown; index.len()];
        status[p] = Status::False;
        status[q] = Status::True;
        calculate(&index, &mut status);
        assert_eq!(status[index.root_index()], Status::True);
    }
}
