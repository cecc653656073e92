//! First-match-wins case selection over predicates.
//!
//! [`Cases`] is the predicate-driven counterpart of a guarded `match`: arms
//! are tested in order against one value and the first arm whose predicate
//! [`matches`](crate::Predicate::matches) decides the outcome.
//!
//! ```
//! use keypath::{Cases, KeyPath};
//!
//! struct Person { age: u32 }
//! let age = KeyPath::new(|p: &Person| p.age);
//!
//! let stage = Cases::new()
//!     .case(age.greater_than(70), "old")
//!     .case(age.less_than(18), "minor");
//!
//! assert_eq!(stage.select(&Person { age: 12 }), Some(&"minor"));
//! assert_eq!(stage.select_or(&Person { age: 40 }, &"adult"), &"adult");
//! ```

use crate::predicate::Predicate;

/// An ordered list of `(predicate, outcome)` arms.
#[derive(Debug, Clone)]
pub struct Cases<T, R> {
    arms: Vec<(Predicate<T>, R)>,
}

impl<T, R> Default for Cases<T, R> {
    fn default() -> Self {
        Cases { arms: Vec::new() }
    }
}

impl<T, R> Cases<T, R> {
    /// Creates an empty set of cases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an arm. Arms are tested in insertion order.
    pub fn case(mut self, predicate: Predicate<T>, outcome: R) -> Self {
        self.arms.push((predicate, outcome));
        self
    }

    /// Returns the number of arms.
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    /// Returns `true` if there are no arms.
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Returns the index of the first arm matching `candidate`.
    pub fn position(&self, candidate: &T) -> Option<usize> {
        self.arms
            .iter()
            .position(|(predicate, _)| predicate.matches(candidate))
    }

    /// Returns the outcome of the first arm matching `candidate`.
    pub fn select(&self, candidate: &T) -> Option<&R> {
        self.position(candidate).map(|index| &self.arms[index].1)
    }

    /// Like [`select`](Self::select), falling back to `default` when no arm
    /// matches.
    pub fn select_or<'a>(&'a self, candidate: &T, default: &'a R) -> &'a R {
        self.select(candidate).unwrap_or(default)
    }

    /// Returns the outcome of the first matching arm followed by the
    /// outcomes of every later arm, whether or not they match.
    ///
    /// Empty when no arm matches.
    pub fn fallthrough(&self, candidate: &T) -> impl Iterator<Item = &R> + '_ {
        let start = self.position(candidate).unwrap_or(self.arms.len());
        self.arms[start..].iter().map(|(_, outcome)| outcome)
    }
}
