//! Multi-key sorting with type-erased sort keys.
//!
//! Provides [`Dir`] for sort direction and [`Sort`] for a single sort key.
//! Keys over values of different types (an `u32` age, a `String` name) are
//! erased to the same `Sort<T>` so they can be chained:
//!
//! ```
//! use keypath::{sorted_by_keys, KeyPath, Sort};
//!
//! #[derive(Debug)]
//! struct Person { name: String, age: u32 }
//!
//! let people = vec![
//!     Person { name: "Xavier".into(), age: 12 },
//!     Person { name: "John".into(), age: 45 },
//!     Person { name: "Charlie".into(), age: 12 },
//! ];
//!
//! let sorted = sorted_by_keys(
//!     &people,
//!     &[
//!         Sort::ascending(KeyPath::new(|p: &Person| p.age)),
//!         Sort::ascending(KeyPath::new(|p: &Person| p.name.clone())),
//!     ],
//! );
//! let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, vec!["Charlie", "Xavier", "John"]);
//! ```

use std::any::type_name;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::KeyPathError;
use crate::keypath::KeyPath;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dir {
    type Err = KeyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            _ => Err(KeyPathError::UnknownDirection(s.to_string())),
        }
    }
}

/// A single sort key: a three-way comparator over `T`.
pub struct Sort<T> {
    compare: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
}

impl<T> Sort<T> {
    /// Creates a sort key from a three-way comparator.
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Sort {
            compare: Arc::new(compare),
        }
    }

    /// Compares two elements under this key.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }
}

impl<T: 'static> Sort<T> {
    /// Orders by `key`, smallest first.
    pub fn ascending<V: Ord + 'static>(key: KeyPath<T, V>) -> Self {
        Sort::by(key, Dir::Asc)
    }

    /// Orders by `key`, largest first.
    pub fn descending<V: Ord + 'static>(key: KeyPath<T, V>) -> Self {
        Sort::by(key, Dir::Desc)
    }

    /// Orders by `key` in the given direction.
    pub fn by<V: Ord + 'static>(key: KeyPath<T, V>, dir: Dir) -> Self {
        Sort::new(move |a, b| dir.apply(key.get(a).cmp(&key.get(b))))
    }

    /// The key under which every pair compares equal.
    pub fn unordered() -> Self {
        Sort::new(|_, _| Ordering::Equal)
    }

    /// Returns this key with its direction inverted.
    pub fn reversed(self) -> Self {
        Sort::new(move |a, b| self.compare(a, b).reverse())
    }

    /// Breaks ties of this key with `next`.
    pub fn then(self, next: Sort<T>) -> Self {
        Sort::new(move |a, b| self.compare(a, b).then_with(|| next.compare(a, b)))
    }
}

impl<T> Clone for Sort<T> {
    fn clone(&self) -> Self {
        Sort {
            compare: Arc::clone(&self.compare),
        }
    }
}

impl<T> fmt::Debug for Sort<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sort<{}>", type_name::<T>())
    }
}

/// Compares two items using a list of sort keys.
///
/// Uses the first key as the primary sort key, the second to break ties, etc.
/// If all keys compare equal (or there are none), returns `Equal`.
pub fn compare_by_sorts<T>(a: &T, b: &T, sorts: &[Sort<T>]) -> Ordering {
    for sort in sorts {
        let ordering = sort.compare(a, b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Combines sort keys into an "is less than" comparator.
pub fn order_by<T>(sorts: &[Sort<T>]) -> impl Fn(&T, &T) -> bool + '_ {
    move |a, b| compare_by_sorts(a, b, sorts) == Ordering::Less
}

/// Single-key "is less than" comparator.
pub fn their<T, V: Ord>(key: &KeyPath<T, V>) -> impl Fn(&T, &T) -> bool + '_ {
    move |a, b| key.get(a) < key.get(b)
}

/// Sorts `items` in place by the given keys.
///
/// The sort is stable: items equal under every key keep their relative order.
pub fn sort_by_keys<T>(items: &mut [T], sorts: &[Sort<T>]) {
    items.sort_by(|a, b| compare_by_sorts(a, b, sorts));
}

/// Returns references to `items` ordered by the given keys.
///
/// The sort is stable: items equal under every key keep their relative order.
pub fn sorted_by_keys<'a, T>(items: &'a [T], sorts: &[Sort<T>]) -> Vec<&'a T> {
    let mut results: Vec<&'a T> = items.iter().collect();
    results.sort_by(|a, b| compare_by_sorts(*a, *b, sorts));
    results
}
