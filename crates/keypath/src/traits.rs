//! Extension methods plugging key paths, predicates and sorts into slices.
//!
//! [`SliceExt`] is implemented for every `[T]` (and so for `Vec<T>` through
//! deref), giving collections a key-path flavoured vocabulary:
//!
//! ```
//! use keypath::{KeyPath, SliceExt, Sort};
//!
//! struct Task { name: String, priority: u8, done: bool }
//!
//! let tasks = vec![
//!     Task { name: "Write docs".into(), priority: 3, done: false },
//!     Task { name: "Fix bug".into(), priority: 5, done: false },
//!     Task { name: "Old task".into(), priority: 1, done: true },
//! ];
//! let priority = KeyPath::new(|t: &Task| t.priority);
//! let done = KeyPath::new(|t: &Task| t.done);
//!
//! assert_eq!(tasks.filter_by(&done).len(), 1);
//! assert_eq!(tasks.map_by(&priority), vec![3, 5, 1]);
//! assert_eq!(tasks.count_where(&priority.greater_or_equal(3)), 2);
//!
//! let ordered = tasks.sorted_by_keys(&[Sort::descending(priority)]);
//! assert_eq!(ordered[0].name, "Fix bug");
//! ```

use crate::join::{self, JoinPredicate};
use crate::keypath::{self, KeyPath};
use crate::predicate::Predicate;
use crate::sort::{self, Sort};

/// Key path aware operations over a slice.
pub trait SliceExt<T> {
    /// Items whose boolean key path reads `true`, in order.
    fn filter_by(&self, key: &KeyPath<T, bool>) -> Vec<&T>;

    /// One value per item, read through `key`, in order.
    fn map_by<V>(&self, key: &KeyPath<T, V>) -> Vec<V>;

    /// Items satisfying `predicate`, in order.
    fn filter_where(&self, predicate: &Predicate<T>) -> Vec<&T>;

    /// Number of items satisfying `predicate`.
    fn count_where(&self, predicate: &Predicate<T>) -> usize;

    /// Returns `true` if any item satisfies `predicate`.
    fn any_where(&self, predicate: &Predicate<T>) -> bool;

    /// Returns `true` if every item satisfies `predicate`.
    fn all_where(&self, predicate: &Predicate<T>) -> bool;

    /// The first item satisfying `predicate`.
    fn find_where(&self, predicate: &Predicate<T>) -> Option<&T>;

    /// The index of the first item satisfying `predicate`.
    fn position_where(&self, predicate: &Predicate<T>) -> Option<usize>;

    /// Items ordered by `sorts` (stable).
    fn sorted_by_keys(&self, sorts: &[Sort<T>]) -> Vec<&T>;

    /// Nested-loop join with `other`.
    fn join_with<'a, U>(
        &'a self,
        other: &'a [U],
        predicate: &JoinPredicate<T, U>,
    ) -> Vec<(&'a T, &'a U)>;
}

impl<T> SliceExt<T> for [T] {
    fn filter_by(&self, key: &KeyPath<T, bool>) -> Vec<&T> {
        keypath::filter_by(self, key)
    }

    fn map_by<V>(&self, key: &KeyPath<T, V>) -> Vec<V> {
        keypath::map_by(self, key)
    }

    fn filter_where(&self, predicate: &Predicate<T>) -> Vec<&T> {
        self.iter()
            .filter(|item| predicate.evaluate(item))
            .collect()
    }

    fn count_where(&self, predicate: &Predicate<T>) -> usize {
        self.iter().filter(|item| predicate.evaluate(item)).count()
    }

    fn any_where(&self, predicate: &Predicate<T>) -> bool {
        self.iter().any(|item| predicate.evaluate(item))
    }

    fn all_where(&self, predicate: &Predicate<T>) -> bool {
        self.iter().all(|item| predicate.evaluate(item))
    }

    fn find_where(&self, predicate: &Predicate<T>) -> Option<&T> {
        self.iter().find(|item| predicate.evaluate(item))
    }

    fn position_where(&self, predicate: &Predicate<T>) -> Option<usize> {
        self.iter().position(|item| predicate.evaluate(item))
    }

    fn sorted_by_keys(&self, sorts: &[Sort<T>]) -> Vec<&T> {
        sort::sorted_by_keys(self, sorts)
    }

    fn join_with<'a, U>(
        &'a self,
        other: &'a [U],
        predicate: &JoinPredicate<T, U>,
    ) -> Vec<(&'a T, &'a U)> {
        join::join(self, other, predicate)
    }
}
