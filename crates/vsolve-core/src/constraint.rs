//! Predicates, per-package constraint groups, and the constraint list.
//!
//! A [`ConstraintList`] is an ordered sequence of [`ConstraintGroup`]s, one per
//! contiguous run of same-name predicates in the input. The list is expected
//! to be sorted ascending by package name; the merge scan in
//! `vsolve-resolver` depends on it, and nothing here re-sorts.

use std::fmt;

use crate::operator::Operator;
use crate::version::successor;

/// A single `package OP version` test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    op: Operator,
    package: String,
    version: String,
}

impl Predicate {
    pub fn new(package: impl Into<String>, op: Operator, version: impl Into<String>) -> Self {
        Self {
            op,
            package: package.into(),
            version: version.into(),
        }
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether `candidate` satisfies this predicate.
    pub fn matches(&self, candidate: &str) -> bool {
        self.op.accepts(candidate, &self.version)
    }

    /// Rewrite a compatible-release predicate into its primitive bounds.
    ///
    /// `pack ~> V` yields `pack >= V` followed by `pack < successor(V)`. Any
    /// other predicate is yielded unchanged.
    pub fn expand(self) -> impl Iterator<Item = Predicate> {
        match self.op {
            Operator::Compatible => {
                let upper = Predicate {
                    op: Operator::Lt,
                    package: self.package.clone(),
                    version: successor(&self.version),
                };
                let lower = Predicate {
                    op: Operator::Ge,
                    ..self
                };
                Some(lower).into_iter().chain(Some(upper))
            }
            _ => Some(self).into_iter().chain(None),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.package, self.op, self.version)
    }
}

/// All predicates for one package, combined by logical AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintGroup {
    package: String,
    predicates: Vec<Predicate>,
    satisfied: bool,
}

impl ConstraintGroup {
    fn new(first: Predicate) -> Self {
        Self {
            package: first.package.clone(),
            predicates: vec![first],
            satisfied: false,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Predicates in input order. Never empty.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Whether `version` passes every predicate, stopping at the first
    /// failure.
    pub fn accepts(&self, version: &str) -> bool {
        self.predicates.iter().all(|p| p.matches(version))
    }

    pub fn is_satisfied(&self) -> bool {
        self.satisfied
    }

    pub fn mark_satisfied(&mut self) {
        self.satisfied = true;
    }
}

/// Ordered constraint groups, the live state of a resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintList {
    groups: Vec<ConstraintGroup>,
}

impl ConstraintList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from predicates in input order.
    ///
    /// A new group starts whenever the package name differs from the previous
    /// predicate's; no sorting or merging of non-adjacent runs is done.
    pub fn from_predicates(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        let mut list = Self::new();
        for predicate in predicates {
            list.push(predicate);
        }
        list
    }

    /// Append a predicate, extending the last group when the name matches.
    pub fn push(&mut self, predicate: Predicate) {
        match self.groups.last_mut() {
            Some(group) if group.package == predicate.package => group.predicates.push(predicate),
            _ => self.groups.push(ConstraintGroup::new(predicate)),
        }
    }

    /// Expand every compatible-release predicate in place of its group
    /// position. Applied once by the parser, after all lines are read.
    pub fn expanded(self) -> Self {
        Self::from_predicates(
            self.groups
                .into_iter()
                .flat_map(|g| g.predicates)
                .flat_map(Predicate::expand),
        )
    }

    pub fn groups(&self) -> &[ConstraintGroup] {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut [ConstraintGroup] {
        &mut self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConstraintGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Whether groups are strictly ascending by package name (byte order).
    pub fn is_sorted(&self) -> bool {
        self.groups
            .windows(2)
            .all(|pair| pair[0].package < pair[1].package)
    }

    pub fn all_satisfied(&self) -> bool {
        self.groups.iter().all(ConstraintGroup::is_satisfied)
    }

    /// Drop satisfied groups, keeping the rest in their original order.
    pub fn retain_unsatisfied(mut self) -> Self {
        self.groups.retain(|g| !g.satisfied);
        self
    }

    /// Names of groups never satisfied, in list order.
    pub fn unsatisfied_packages(&self) -> Vec<String> {
        self.groups
            .iter()
            .filter(|g| !g.satisfied)
            .map(|g| g.package.clone())
            .collect()
    }
}

impl<'a> IntoIterator for &'a ConstraintList {
    type Item = &'a ConstraintGroup;
    type IntoIter = std::slice::Iter<'a, ConstraintGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
