//! Joins between two sequences.
//!
//! [`join`] pairs every element of `left` with every element of `right`
//! satisfying a [`JoinPredicate`]. Output order is fixed: the outer loop walks
//! `left` in order, the inner loop walks `right` in order, and a pair is
//! emitted as soon as it matches.
//!
//! ```
//! use keypath::{join, JoinPredicate, KeyPath};
//!
//! struct Person { first: String, last: String }
//!
//! let people = vec![
//!     Person { first: "Charlie".into(), last: "Webb".into() },
//!     Person { first: "Webb".into(), last: "Elexson".into() },
//! ];
//! let first = KeyPath::new(|p: &Person| p.first.clone());
//! let last = KeyPath::new(|p: &Person| p.last.clone());
//!
//! let pairs = join(&people, &people, &JoinPredicate::equal(first, last));
//! assert_eq!(pairs.len(), 1);
//! assert_eq!(pairs[0].0.first, "Webb");
//! assert_eq!(pairs[0].1.first, "Charlie");
//! ```

use std::any::type_name;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::keypath::KeyPath;
use crate::op::Op;

/// An immutable boolean test over a pair of elements from two sequences.
pub struct JoinPredicate<L, R> {
    evaluator: Arc<dyn Fn(&L, &R) -> bool + Send + Sync>,
}

impl<L, R> JoinPredicate<L, R> {
    /// Creates a join predicate from a pure evaluator function.
    pub fn new<F>(evaluator: F) -> Self
    where
        F: Fn(&L, &R) -> bool + Send + Sync + 'static,
    {
        JoinPredicate {
            evaluator: Arc::new(evaluator),
        }
    }

    /// Evaluates the predicate on a `(left, right)` pair.
    pub fn evaluate(&self, left: &L, right: &R) -> bool {
        (self.evaluator)(left, right)
    }
}

impl<L: 'static, R: 'static> JoinPredicate<L, R> {
    /// Matches pairs whose key path values are equal.
    pub fn equal<V>(left: KeyPath<L, V>, right: KeyPath<R, V>) -> Self
    where
        V: PartialEq + 'static,
    {
        JoinPredicate::new(move |l, r| left.get(l) == right.get(r))
    }

    /// Matches pairs where `left(l) <op> right(r)` holds.
    pub fn compare<V>(left: KeyPath<L, V>, op: Op, right: KeyPath<R, V>) -> Self
    where
        V: PartialOrd + 'static,
    {
        JoinPredicate::new(move |l, r| op.eval(&left.get(l), &right.get(r)))
    }

    /// Logical AND. `other` is not evaluated when `self` is false.
    pub fn and(self, other: JoinPredicate<L, R>) -> Self {
        JoinPredicate::new(move |l, r| self.evaluate(l, r) && other.evaluate(l, r))
    }
}

impl<L, R> Clone for JoinPredicate<L, R> {
    fn clone(&self) -> Self {
        JoinPredicate {
            evaluator: Arc::clone(&self.evaluator),
        }
    }
}

impl<L, R> fmt::Debug for JoinPredicate<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JoinPredicate<{}, {}>",
            type_name::<L>(),
            type_name::<R>()
        )
    }
}

/// Nested-loop join: every `(l, r)` for which `predicate` holds.
pub fn join<'a, L, R>(
    left: &'a [L],
    right: &'a [R],
    predicate: &JoinPredicate<L, R>,
) -> Vec<(&'a L, &'a R)> {
    let mut result = Vec::new();
    for l in left {
        for r in right {
            if predicate.evaluate(l, r) {
                result.push((l, r));
            }
        }
    }
    result
}

/// Like [`join`], cloning the matched pairs.
pub fn join_cloned<L, R>(left: &[L], right: &[R], predicate: &JoinPredicate<L, R>) -> Vec<(L, R)>
where
    L: Clone,
    R: Clone,
{
    join(left, right, predicate)
        .into_iter()
        .map(|(l, r)| (l.clone(), r.clone()))
        .collect()
}

/// Equality join through a hash index on `right`.
///
/// Produces exactly the pairs, in exactly the order, of
/// `join(left, right, &JoinPredicate::equal(left_key, right_key))`, reading
/// each key once instead of once per pair.
pub fn hash_join<'a, L, R, V>(
    left: &'a [L],
    right: &'a [R],
    left_key: &KeyPath<L, V>,
    right_key: &KeyPath<R, V>,
) -> Vec<(&'a L, &'a R)>
where
    V: Hash + Eq,
{
    // Indices are pushed in ascending order, so each bucket preserves `right` order.
    let mut index: HashMap<V, Vec<usize>> = HashMap::new();
    for (i, r) in right.iter().enumerate() {
        index.entry(right_key.get(r)).or_default().push(i);
    }

    let mut result = Vec::new();
    for l in left {
        if let Some(bucket) = index.get(&left_key.get(l)) {
            result.extend(bucket.iter().map(|&i| (l, &right[i])));
        }
    }
    result
}
