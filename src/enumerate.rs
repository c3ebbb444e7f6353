//! Free-variable mask iteration and the decision-tree expansion that turns each mask
//! into one or more fully-determined states (spec.md §4.4).

use crate::subformula::{calculate, Status, SubformulaIndex};

/// Iterates every assignment to the free-variable (`Atoms`) positions, reproducing the
/// base translator's `iterate_mask` bit-scan order: by default the last atom is the one
/// that increments fastest; `reversed` (spec.md's `ReversedMask`) flips the scan to
/// start from the first atom instead. Either way this is a plain binary count over
/// `2^len` assignments — the direction only changes the resulting state numbering, per
/// spec.md's Design Notes, not the set of states produced.
pub struct MaskIter {
    mask: Option<Vec<bool>>,
    len: usize,
    reversed: bool,
    exhausted: bool,
}

impl MaskIter {
    pub fn new(len: usize, reversed: bool) -> MaskIter {
        MaskIter {
            mask: None,
            len,
            reversed,
            exhausted: false,
        }
    }
}

impl Iterator for MaskIter {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Vec<bool>> {
        if self.exhausted {
            return None;
        }
        match self.mask.take() {
            None => {
                let mask = vec![false; self.len];
                if self.len == 0 {
                    self.exhausted = true;
                } else {
                    self.mask = Some(mask.clone());
                }
                Some(mask)
            }
            Some(mut mask) => {
                if advance_mask(&mut mask, self.reversed) {
                    self.mask = Some(mask.clone());
                    Some(mask)
                } else {
                    self.exhausted = true;
                    None
                }
            }
        }
    }
}

/// Binary-increments `mask` in place; returns `false` once every assignment has been
/// produced (all bits set).
fn advance_mask(mask: &mut [bool], reversed: bool) -> bool {
    let len = mask.len();
    if reversed {
        for i in 0..len {
            if !mask[i] {
                mask[i] = true;
                for bit in mask.iter_mut().take(i) {
                    *bit = false;
                }
                return true;
            }
        }
    } else {
        for i in (0..len).rev() {
            if !mask[i] {
                mask[i] = true;
                for bit in mask.iter_mut().skip(i + 1) {
                    *bit = false;
                }
                return true;
            }
        }
    }
    false
}

/// The binary split tree recorded for a single free-variable mask, kept only so
/// `report.rs` can lay out a LaTeX table with the same row/column shape as the
/// original derivation (spec.md §9's "Decision-tree bookkeeping" — the core
/// construction never consults it past state extraction).
pub enum DecisionNode {
    /// Index into the flat state list returned alongside the trees.
    Leaf(usize),
    /// The leftmost still-unknown position was split: `false` branch, then `true`.
    Branch(Box<DecisionNode>, Box<DecisionNode>),
}

impl DecisionNode {
    pub fn leaf_count(&self) -> usize {
        match self {
            DecisionNode::Leaf(_) => 1,
            DecisionNode::Branch(a, b) => a.leaf_count() + b.leaf_count(),
        }
    }
}

/// The result of enumerating every state: the flat state list (truth vectors over
/// `All`) and one decision tree per free-variable mask, in mask-iteration order.
pub struct Enumeration {
    pub states: Vec<Vec<Status>>,
    pub trees: Vec<DecisionNode>,
}

/// Enumerate every state of `index`: for each free-variable mask, preset the atom
/// positions, propagate forced statuses, and recursively split any subformula (always
/// a `U`, by construction) left `Unknown` after propagation.
pub fn enumerate(index: &SubformulaIndex, reversed_mask: bool) -> Enumeration {
    let mut states = Vec::new();
    let mut trees = Vec::new();

    for mask in MaskIter::new(index.atoms.len(), reversed_mask) {
        let mut status = vec![Status::Unknown; index.len()];
        for (&pos, &value) in index.atoms.iter().zip(mask.iter()) {
            status[pos] = if value { Status::True } else { Status::False };
        }
        trees.push(expand(index, status, &mut states));
    }

    Enumeration { states, trees }
}

fn expand(index: &SubformulaIndex, mut status: Vec<Status>, states: &mut Vec<Vec<Status>>) -> DecisionNode {
    calculate(index, &mut status);

    match status.iter().position(|s| *s == Status::Unknown) {
        None => {
            states.push(status);
            DecisionNode::Leaf(states.len() - 1)
        }
        Some(i) => {
            let mut false_branch = status.clone();
            false_branch[i] = Status::False;
            let false_node = expand(index, false_branch, states);

            let mut true_branch = status;
            true_branch[i] = Status::True;
            let true_node = expand(index, true_branch, states);

            DecisionNode::Branch(Box::new(false_node), Box::new(true_node))
        }
    }
}
