use std::cmp::Ordering;
use std::fmt;

use crate::version::natural_cmp;

/// Comparison operator of a constraint line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Lt,
    Le,
    Eq,
    Ge,
    Gt,
    /// `~>`, rewritten into `Ge` + `Lt` before any index is scanned.
    Compatible,
}

impl Operator {
    /// Parse an operator token. Returns `None` for anything but the six
    /// recognised tokens.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            "=" => Some(Self::Eq),
            ">=" => Some(Self::Ge),
            ">" => Some(Self::Gt),
            "~>" => Some(Self::Compatible),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Eq => "=",
            Self::Ge => ">=",
            Self::Gt => ">",
            Self::Compatible => "~>",
        }
    }

    /// Test `candidate OP bound`.
    ///
    /// `Eq` is byte equality, the ordering operators use [`natural_cmp`].
    /// `Compatible` never accepts: it must be expanded first.
    pub fn accepts(self, candidate: &str, bound: &str) -> bool {
        match self {
            Self::Eq => candidate == bound,
            Self::Compatible => false,
            Self::Lt => natural_cmp(candidate, bound) == Ordering::Less,
            Self::Le => natural_cmp(candidate, bound) != Ordering::Greater,
            Self::Ge => natural_cmp(candidate, bound) != Ordering::Less,
            Self::Gt => natural_cmp(candidate, bound) == Ordering::Greater,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
