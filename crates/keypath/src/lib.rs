//! Keypath - typed property paths for filtering, sorting, joining and validating.
//!
//! A [`KeyPath<Root, Value>`](KeyPath) is a first-class, reusable reference to
//! "read a `Value` out of a `Root`". On top of it this crate provides:
//!
//! - Conversion of key paths into plain functions for `map`/`filter`
//! - [`Predicate`]: composable boolean tests (`and`, `or`, `negate`)
//! - [`Cases`]: first-match-wins selection among predicates
//! - [`Sort`]: type-erased sort keys, chained with ascending/descending order
//! - [`join`]: nested-loop join of two slices under a [`JoinPredicate`]
//! - [`Validator`]: fluent, immutable validation chains
//!
//! # Quick Start
//!
//! ```rust
//! use keypath::{KeyPath, SliceExt, Sort};
//!
//! // Define your data
//! #[derive(Debug)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! // Create key paths
//! let name = KeyPath::new(|p: &Person| p.name.clone());
//! let age = KeyPath::new(|p: &Person| p.age);
//!
//! let people = vec![
//!     Person { name: "John".into(), age: 45 },
//!     Person { name: "Xavier".into(), age: 12 },
//!     Person { name: "Charlie".into(), age: 12 },
//!     Person { name: "Tony".into(), age: 16 },
//! ];
//!
//! // Filter with a type-safe predicate
//! let minors = people.filter_where(&age.less_than(18));
//! assert_eq!(minors.len(), 3);
//!
//! // Sort over several keys of different types
//! let sorted = people.sorted_by_keys(&[Sort::ascending(age.clone()), Sort::ascending(name)]);
//! assert_eq!(sorted[0].name, "Charlie");
//! assert_eq!(sorted[1].name, "Xavier");
//! ```
//!
//! # Static Checking
//!
//! Nothing is looked up by name at runtime. Comparing a key path against a
//! constant of the wrong type, sorting by a value that is not `Ord`, or
//! joining on keys of different types are all compile errors.
//!
//! # Deriving Key Paths
//!
//! With the default `macros` feature, `#[derive(KeyPaths)]` generates one
//! constructor per named field:
//!
//! ```rust
//! # #[cfg(feature = "macros")]
//! # {
//! use keypath::KeyPaths;
//!
//! #[derive(KeyPaths)]
//! struct User {
//!     id: String,
//!     last_name: String,
//! }
//!
//! let user = User { id: "1".into(), last_name: "Lennon".into() };
//! assert_eq!(User::last_name().get(&user), "Lennon");
//! # }
//! ```

mod cases;
mod error;
mod join;
mod keypath;
mod op;
mod predicate;
mod sort;
mod traits;
mod validate;

// Re-export public API
pub use cases::Cases;
pub use error::{KeyPathError, Result};
pub use join::{hash_join, join, join_cloned, JoinPredicate};
pub use keypath::{filter_by, get, map_by, KeyPath};
pub use op::Op;
pub use predicate::{all_of, any_of, Predicate};
pub use sort::{compare_by_sorts, order_by, sort_by_keys, sorted_by_keys, their, Dir, Sort};
pub use traits::SliceExt;
pub use validate::{start_validation, Validatable, Validator};

#[cfg(feature = "macros")]
pub use keypath_macros::KeyPaths;
