//! A syntax tree struct for LTL formulae and functionality for its manipulation.

use crate::preprocessing::operators::{Atom, BinaryOp, UnaryOp};

use std::cmp;
use std::cmp::Ordering;
use std::fmt;

/// Enum of possible node data types in an LTL formula syntax tree.
///
/// In particular, a node can be:
///     - A "terminal" node, holding a single atomic proposition or Boolean constant.
///     - A "unary" node, with a `UnaryOp` and a sub-formula.
///     - A "binary" node, with a `BinaryOp` and two sub-formulae.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Terminal(Atom),
    Unary(UnaryOp, Box<Formula>),
    Binary(BinaryOp, Box<Formula>, Box<Formula>),
}

/// A single node in the syntax tree of an LTL formula.
///
/// Each node tracks its:
///     - `height`; a positive integer starting from 0 (for atoms and constants).
///     - `node`; the node's data, represented through [NodeKind].
///     - `subform_str`; a canonical prefix-notation string representation, used as the
///     structural-equality witness for deduplicating subformulae during translation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Formula {
    pub subform_str: String,
    pub height: u32,
    pub node: NodeKind,
}

/// Formulae are ordered by height, with atoms/constants being the "smallest".
impl PartialOrd for Formula {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.height.partial_cmp(&other.height)
    }
}

impl Ord for Formula {
    fn cmp(&self, other: &Self) -> Ordering {
        self.height.cmp(&other.height)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.subform_str)
    }
}

impl Formula {
    /// Create a "unary" [Formula] from the given arguments.
    pub fn mk_unary(op: UnaryOp, child: Formula) -> Formula {
        Formula {
            subform_str: format!("({op} {})", child.subform_str),
            height: child.height + 1,
            node: NodeKind::Unary(op, Box::new(child)),
        }
    }

    /// Create a "binary" [Formula] from the given arguments.
    pub fn mk_binary(op: BinaryOp, left: Formula, right: Formula) -> Formula {
        Formula {
            subform_str: format!("({op} {} {})", left.subform_str, right.subform_str),
            height: cmp::max(left.height, right.height) + 1,
            node: NodeKind::Binary(op, Box::new(left), Box::new(right)),
        }
    }

    /// Create a [Formula] representing the Boolean constant `true`.
    pub fn mk_true() -> Formula {
        Self::mk_atom(Atom::True)
    }

    /// Create a [Formula] representing the Boolean constant `false`.
    pub fn mk_false() -> Formula {
        Self::mk_atom(Atom::False)
    }

    /// Create a [Formula] representing an atomic proposition.
    pub fn mk_prop(name: &str) -> Formula {
        Self::mk_atom(Atom::Prop(name.to_string()))
    }

    fn mk_atom(atom: Atom) -> Formula {
        Formula {
            subform_str: atom.to_string(),
            height: 0,
            node: NodeKind::Terminal(atom),
        }
    }

    /// The left (or only) operand, if this node has one.
    pub fn lhs(&self) -> Option<&Formula> {
        match &self.node {
            NodeKind::Terminal(_) => None,
            NodeKind::Unary(_, a) => Some(a),
            NodeKind::Binary(_, a, _) => Some(a),
        }
    }

    /// The right operand, for binary nodes.
    pub fn rhs(&self) -> Option<&Formula> {
        match &self.node {
            NodeKind::Binary(_, _, b) => Some(b),
            _ => None,
        }
    }

    /// True for the two formulae the "free variables" of state enumeration are built
    /// from: atomic propositions and `X`-rooted subformulae (spec.md §4.3's `Atoms`).
    pub fn is_free_variable(&self) -> bool {
        matches!(
            self.node,
            NodeKind::Terminal(Atom::Prop(_)) | NodeKind::Unary(UnaryOp::X, _)
        )
    }

    /// True for operators that require their own acceptance set once the state space
    /// has been enumerated (spec.md §4.5). Tolerant of `F`/`G`/`R`/`W`, even though the
    /// rewrite pipeline eliminates them before this is consulted in practice.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self.node,
            NodeKind::Binary(BinaryOp::U, _, _)
                | NodeKind::Binary(BinaryOp::R, _, _)
                | NodeKind::Binary(BinaryOp::W, _, _)
                | NodeKind::Unary(UnaryOp::F, _)
                | NodeKind::Unary(UnaryOp::G, _)
        )
    }
}
