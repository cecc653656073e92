//! Composable, type-safe predicates.
//!
//! A [`Predicate`] wraps one pure `Fn(&T) -> bool`. Predicates are usually
//! built from a [`KeyPath`] and a constant, then combined with [`and`],
//! [`or`] and [`negate`]:
//!
//! ```
//! use keypath::{KeyPath, Predicate};
//!
//! struct Person { age: u32 }
//!
//! let age = KeyPath::new(|p: &Person| p.age);
//! let adult: Predicate<Person> = age.greater_than(18).and(age.less_than(80));
//!
//! assert!(adult.evaluate(&Person { age: 45 }));
//! assert!(!adult.evaluate(&Person { age: 12 }));
//! assert!(!adult.evaluate(&Person { age: 86 }));
//! ```
//!
//! Because the constant's type must match the key path's value type,
//! misspelled fields and mismatched comparisons fail to compile instead of
//! silently matching nothing.
//!
//! [`and`]: Predicate::and
//! [`or`]: Predicate::or
//! [`negate`]: Predicate::negate

use std::any::type_name;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use regex::Regex;

use crate::error::Result;
use crate::keypath::KeyPath;
use crate::op::Op;

/// An immutable boolean test over one element.
pub struct Predicate<T> {
    evaluator: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Predicate<T> {
    /// Creates a predicate from a pure evaluator function.
    pub fn new<F>(evaluator: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Predicate {
            evaluator: Arc::new(evaluator),
        }
    }

    /// Evaluates the predicate against `element`.
    pub fn evaluate(&self, element: &T) -> bool {
        (self.evaluator)(element)
    }

    /// Pattern-match style test, used to pick a branch among several
    /// predicates. Same result as [`evaluate`](Self::evaluate).
    pub fn matches(&self, candidate: &T) -> bool {
        self.evaluate(candidate)
    }

    /// Borrows this predicate as a plain closure, e.g. for `Iterator::filter`.
    pub fn as_fn(&self) -> impl Fn(&T) -> bool + '_ {
        move |element| self.evaluate(element)
    }
}

impl<T: 'static> Predicate<T> {
    /// The predicate that accepts everything (identity of [`and`](Self::and)).
    pub fn always() -> Self {
        Predicate::new(|_| true)
    }

    /// The predicate that accepts nothing (identity of [`or`](Self::or)).
    pub fn never() -> Self {
        Predicate::new(|_| false)
    }

    /// Logical AND. `other` is not evaluated when `self` is false.
    pub fn and(self, other: Predicate<T>) -> Predicate<T> {
        Predicate::new(move |element| self.evaluate(element) && other.evaluate(element))
    }

    /// Logical OR. `other` is not evaluated when `self` is true.
    pub fn or(self, other: Predicate<T>) -> Predicate<T> {
        Predicate::new(move |element| self.evaluate(element) || other.evaluate(element))
    }

    /// Logical NOT.
    pub fn negate(self) -> Predicate<T> {
        Predicate::new(move |element| !self.evaluate(element))
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Predicate {
            evaluator: Arc::clone(&self.evaluator),
        }
    }
}

impl<T: 'static> Default for Predicate<T> {
    fn default() -> Self {
        Predicate::always()
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate<{}>", type_name::<T>())
    }
}

impl<T: 'static> BitAnd for Predicate<T> {
    type Output = Predicate<T>;

    fn bitand(self, rhs: Predicate<T>) -> Predicate<T> {
        self.and(rhs)
    }
}

impl<T: 'static> BitOr for Predicate<T> {
    type Output = Predicate<T>;

    fn bitor(self, rhs: Predicate<T>) -> Predicate<T> {
        self.or(rhs)
    }
}

impl<T: 'static> Not for Predicate<T> {
    type Output = Predicate<T>;

    fn not(self) -> Predicate<T> {
        self.negate()
    }
}

/// AND-combines every predicate. An empty input yields [`Predicate::always`].
pub fn all_of<T: 'static>(predicates: impl IntoIterator<Item = Predicate<T>>) -> Predicate<T> {
    let predicates: Vec<Predicate<T>> = predicates.into_iter().collect();
    Predicate::new(move |element| predicates.iter().all(|p| p.evaluate(element)))
}

/// OR-combines every predicate. An empty input yields [`Predicate::never`].
pub fn any_of<T: 'static>(predicates: impl IntoIterator<Item = Predicate<T>>) -> Predicate<T> {
    let predicates: Vec<Predicate<T>> = predicates.into_iter().collect();
    Predicate::new(move |element| predicates.iter().any(|p| p.evaluate(element)))
}

// ============================================================================
// Construction from key paths
// ============================================================================

impl<Root: 'static, Value: 'static> KeyPath<Root, Value> {
    /// Builds `key(element) <op> constant`.
    pub fn compare(&self, op: Op, constant: Value) -> Predicate<Root>
    where
        Value: PartialOrd + Send + Sync,
    {
        let key = self.clone();
        Predicate::new(move |element| op.eval(&key.get(element), &constant))
    }

    /// Builds `key(element) == constant`.
    pub fn equal_to(&self, constant: Value) -> Predicate<Root>
    where
        Value: PartialEq + Send + Sync,
    {
        let key = self.clone();
        Predicate::new(move |element| key.get(element) == constant)
    }

    /// Builds `key(element) != constant`.
    pub fn not_equal_to(&self, constant: Value) -> Predicate<Root>
    where
        Value: PartialEq + Send + Sync,
    {
        let key = self.clone();
        Predicate::new(move |element| key.get(element) != constant)
    }

    /// Builds `key(element) > constant`.
    pub fn greater_than(&self, constant: Value) -> Predicate<Root>
    where
        Value: PartialOrd + Send + Sync,
    {
        self.compare(Op::Gt, constant)
    }

    /// Builds `key(element) >= constant`.
    pub fn greater_or_equal(&self, constant: Value) -> Predicate<Root>
    where
        Value: PartialOrd + Send + Sync,
    {
        self.compare(Op::Gte, constant)
    }

    /// Builds `key(element) < constant`.
    pub fn less_than(&self, constant: Value) -> Predicate<Root>
    where
        Value: PartialOrd + Send + Sync,
    {
        self.compare(Op::Lt, constant)
    }

    /// Builds `key(element) <= constant`.
    pub fn less_or_equal(&self, constant: Value) -> Predicate<Root>
    where
        Value: PartialOrd + Send + Sync,
    {
        self.compare(Op::Lte, constant)
    }

    /// Builds a predicate from an arbitrary test on the key path's value.
    pub fn satisfies<F>(&self, test: F) -> Predicate<Root>
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let key = self.clone();
        Predicate::new(move |element| test(&key.get(element)))
    }
}

impl<Root: 'static> KeyPath<Root, bool> {
    /// Accepts elements whose boolean value is `true`.
    pub fn is_true(&self) -> Predicate<Root> {
        let key = self.clone();
        Predicate::new(move |element| key.get(element))
    }

    /// Accepts elements whose boolean value is `false`.
    pub fn is_false(&self) -> Predicate<Root> {
        let key = self.clone();
        Predicate::new(move |element| !key.get(element))
    }
}

impl<Root: 'static> KeyPath<Root, String> {
    /// Accepts elements whose string starts with `prefix`.
    pub fn starts_with(&self, prefix: impl Into<String>) -> Predicate<Root> {
        let prefix = prefix.into();
        self.satisfies(move |s| s.starts_with(prefix.as_str()))
    }

    /// Accepts elements whose string ends with `suffix`.
    pub fn ends_with(&self, suffix: impl Into<String>) -> Predicate<Root> {
        let suffix = suffix.into();
        self.satisfies(move |s| s.ends_with(suffix.as_str()))
    }

    /// Accepts elements whose string contains `needle`.
    pub fn contains(&self, needle: impl Into<String>) -> Predicate<Root> {
        let needle = needle.into();
        self.satisfies(move |s| s.contains(needle.as_str()))
    }

    /// Accepts elements whose string is empty.
    pub fn is_empty(&self) -> Predicate<Root> {
        self.satisfies(String::is_empty)
    }

    /// Accepts elements whose string matches `pattern`.
    ///
    /// The pattern is compiled once, here; a malformed pattern is reported
    /// as [`KeyPathError::InvalidRegex`](crate::KeyPathError::InvalidRegex).
    pub fn matches_regex(&self, pattern: &str) -> Result<Predicate<Root>> {
        let regex = Regex::new(pattern)?;
        Ok(self.satisfies(move |s| regex.is_match(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: String,
        age: u32,
        member: bool,
    }

    fn person(name: &str, age: u32, member: bool) -> Person {
        Person {
            name: name.to_string(),
            age,
            member,
        }
    }

    fn age() -> KeyPath<Person, u32> {
        KeyPath::new(|p: &Person| p.age)
    }

    fn name() -> KeyPath<Person, String> {
        KeyPath::new(|p: &Person| p.name.clone())
    }

    fn people() -> Vec<Person> {
        vec![
            person("John", 45, true),
            person("Xavier", 12, false),
            person("Michael", 23, true),
            person("Franck", 86, false),
            person("Tony", 16, true),
        ]
    }

    fn ages_matching(predicate: &Predicate<Person>) -> Vec<u32> {
        people()
            .iter()
            .filter(|p| predicate.evaluate(p))
            .map(|p| p.age)
            .collect()
    }

    #[test]
    fn greater_than() {
        assert_eq!(ages_matching(&age().greater_than(18)), vec![45, 23, 86]);
    }

    #[test]
    fn range_with_and() {
        let adult = age().greater_than(18).and(age().less_than(80));
        assert_eq!(ages_matching(&adult), vec![45, 23]);
    }

    #[test]
    fn comparison_constructors() {
        assert_eq!(ages_matching(&age().equal_to(23)), vec![23]);
        assert_eq!(ages_matching(&age().not_equal_to(23)), vec![45, 12, 86, 16]);
        assert_eq!(ages_matching(&age().greater_or_equal(45)), vec![45, 86]);
        assert_eq!(ages_matching(&age().less_or_equal(16)), vec![12, 16]);
        assert_eq!(ages_matching(&age().compare(Op::Lt, 16)), vec![12]);
    }

    #[test]
    fn or_and_negate() {
        let extremes = age().less_than(13).or(age().greater_than(80));
        assert_eq!(ages_matching(&extremes), vec![12, 86]);
        assert_eq!(ages_matching(&extremes.negate()), vec![45, 23, 16]);
    }

    #[test]
    fn operators_mirror_named_combinators() {
        let members = KeyPath::new(|p: &Person| p.member).is_true();
        let adults = age().greater_than(18);

        assert_eq!(
            ages_matching(&(members.clone() & adults.clone())),
            ages_matching(&members.clone().and(adults.clone()))
        );
        assert_eq!(
            ages_matching(&(members.clone() | adults.clone())),
            ages_matching(&members.clone().or(adults))
        );
        assert_eq!(ages_matching(&!members), vec![12, 86]);
    }

    #[test]
    fn and_short_circuits_on_left() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let right = Predicate::new(move |_: &Person| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        let combined = Predicate::never().and(right);
        assert!(!combined.evaluate(&person("A", 1, true)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn or_short_circuits_on_left() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let right = Predicate::new(move |_: &Person| {
            counter.fetch_add(1, Ordering::SeqCst);
            false
        });

        let combined = Predicate::always().or(right);
        assert!(combined.evaluate(&person("A", 1, true)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn identities() {
        let p = person("A", 30, false);
        assert!(Predicate::<Person>::always().evaluate(&p));
        assert!(!Predicate::<Person>::never().evaluate(&p));
        assert!(Predicate::<Person>::default().evaluate(&p));
    }

    #[test]
    fn all_of_and_any_of() {
        let both = all_of([age().greater_than(18), name().starts_with("M")]);
        assert_eq!(ages_matching(&both), vec![23]);

        let either = any_of([age().equal_to(12), name().equal_to("Tony".to_string())]);
        assert_eq!(ages_matching(&either), vec![12, 16]);

        assert_eq!(ages_matching(&all_of(Vec::new())).len(), 5);
        assert!(ages_matching(&any_of(Vec::new())).is_empty());
    }

    #[test]
    fn bool_key_paths() {
        let member = KeyPath::new(|p: &Person| p.member);
        assert_eq!(ages_matching(&member.is_true()), vec![45, 23, 16]);
        assert_eq!(ages_matching(&member.is_false()), vec![12, 86]);
    }

    #[test]
    fn string_predicates() {
        assert_eq!(ages_matching(&name().starts_with("Fr")), vec![86]);
        assert_eq!(ages_matching(&name().ends_with("er")), vec![12]);
        assert_eq!(ages_matching(&name().contains("cha")), vec![23]);
        assert!(ages_matching(&name().is_empty()).is_empty());
    }

    #[test]
    fn regex_predicate() {
        let short = name().matches_regex(r"^[A-Z][a-z]{3}$").unwrap();
        assert_eq!(ages_matching(&short), vec![45, 16]);
    }

    #[test]
    fn invalid_regex() {
        let err = name().matches_regex("([unclosed").unwrap_err();
        assert!(matches!(err, crate::KeyPathError::InvalidRegex(_)));
    }

    #[test]
    fn matches_agrees_with_evaluate() {
        let adult = age().greater_than(18);
        for p in people() {
            assert_eq!(adult.matches(&p), adult.evaluate(&p));
        }
    }

    #[test]
    fn evaluation_is_repeatable() {
        let adult = age().greater_than(18);
        let p = person("John", 45, true);
        assert_eq!(adult.evaluate(&p), adult.evaluate(&p));
    }

    #[test]
    fn as_fn_plugs_into_iterator_filter() {
        let adult = age().greater_than(18);
        let count = people().iter().filter(|p| adult.as_fn()(*p)).count();
        assert_eq!(count, 3);
    }

    #[test]
    fn debug_names_element_type() {
        assert!(format!("{:?}", age().greater_than(1)).contains("Person"));
    }
}
