//! Enum structures for the LTL operators and atomic formula components.

use std::fmt;

/// Unary connectives that can occur in an LTL formula.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum UnaryOp {
    Not, // '!'
    X,   // 'X', next
    F,   // 'F', future
    G,   // 'G', globally
}

/// Binary connectives that can occur in an LTL formula.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum BinaryOp {
    And,  // '&'
    Or,   // '|'
    Impl, // "->"
    U,    // 'U', until
    R,    // 'R', release
    W,    // 'W', weak until
}

/// Atomic sub-formulae: propositions and the two Boolean constants.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Atom {
    Prop(String),
    True,
    False,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "!"),
            UnaryOp::X => write!(f, "X"),
            UnaryOp::F => write!(f, "F"),
            UnaryOp::G => write!(f, "G"),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinaryOp::And => write!(f, "&"),
            BinaryOp::Or => write!(f, "|"),
            BinaryOp::Impl => write!(f, "->"),
            BinaryOp::U => write!(f, "U"),
            BinaryOp::R => write!(f, "R"),
            BinaryOp::W => write!(f, "W"),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Atom::Prop(name) => write!(f, "{name}"),
            Atom::True => write!(f, "true"),
            Atom::False => write!(f, "false"),
        }
    }
}
