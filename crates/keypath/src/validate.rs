//! Fluent, immutable validation chains.
//!
//! A [`Validator`] pairs one subject with an AND-composed [`Predicate`].
//! Each [`add`](Validator::add) returns a new validator; the subject is
//! carried over untouched.
//!
//! ```
//! use keypath::{KeyPath, Validatable};
//!
//! struct User { id: String, last_name: String }
//! impl Validatable for User {}
//!
//! let id = KeyPath::new(|u: &User| u.id.clone());
//! let last_name = KeyPath::new(|u: &User| u.last_name.clone());
//!
//! let user = User { id: "1".into(), last_name: "Lennon".into() };
//! let valid = user
//!     .add_validation(id.is_empty().negate())
//!     .add(last_name.equal_to("Lennon".to_string()))
//!     .validate();
//! assert!(valid);
//! ```

use std::any::type_name;

use crate::error::{KeyPathError, Result};
use crate::predicate::Predicate;

/// A subject together with the predicate it must satisfy.
#[derive(Debug, Clone)]
pub struct Validator<T> {
    validee: T,
    predicate: Predicate<T>,
}

impl<T: 'static> Validator<T> {
    /// Starts a validation chain with no checks (always valid).
    pub fn new(validee: T) -> Self {
        Validator {
            validee,
            predicate: Predicate::always(),
        }
    }

    /// Starts a validation chain with an initial predicate.
    pub fn with_predicate(validee: T, predicate: Predicate<T>) -> Self {
        Validator { validee, predicate }
    }

    /// Returns a validator that also requires `predicate`.
    pub fn add(self, predicate: Predicate<T>) -> Self {
        Validator {
            validee: self.validee,
            predicate: self.predicate.and(predicate),
        }
    }

    /// Evaluates every accumulated check against the subject.
    pub fn validate(&self) -> bool {
        self.predicate.evaluate(&self.validee)
    }

    /// Consumes the validator, returning the subject if it is valid.
    pub fn check(self) -> Result<T> {
        if self.validate() {
            Ok(self.validee)
        } else {
            Err(KeyPathError::ValidationFailed {
                subject: type_name::<T>(),
            })
        }
    }

    /// Returns the subject.
    pub fn validee(&self) -> &T {
        &self.validee
    }

    /// Returns the composed predicate.
    pub fn predicate(&self) -> &Predicate<T> {
        &self.predicate
    }

    /// Consumes the validator, returning the subject.
    pub fn into_inner(self) -> T {
        self.validee
    }
}

/// Starts a validation chain for any subject.
pub fn start_validation<T: 'static>(validee: T, predicate: Predicate<T>) -> Validator<T> {
    Validator::with_predicate(validee, predicate)
}

/// Opt-in capability to start a validation chain directly on a value.
///
/// ```
/// use keypath::{KeyPath, Validatable};
///
/// struct Port(u16);
/// impl Validatable for Port {}
///
/// let number = KeyPath::new(|p: &Port| p.0);
/// assert!(!Port(80).add_validation(number.greater_than(1024)).validate());
/// ```
pub trait Validatable: Sized + 'static {
    /// Builds the first [`Validator`] from this subject and one predicate.
    fn add_validation(self, predicate: Predicate<Self>) -> Validator<Self> {
        start_validation(self, predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyPath;

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        id: String,
        first_name: String,
        last_name: String,
    }

    impl Validatable for User {}

    fn user(id: &str, first_name: &str, last_name: &str) -> User {
        User {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    fn has_id() -> Predicate<User> {
        KeyPath::new(|u: &User| u.id.is_empty()).equal_to(false)
    }

    fn is_lennon() -> Predicate<User> {
        KeyPath::new(|u: &User| u.last_name.clone()).equal_to("Lennon".to_string())
    }

    #[test]
    fn chain_accepts_matching_subject() {
        let john = user("1", "John", "Lennon");
        assert!(john.add_validation(has_id()).add(is_lennon()).validate());
    }

    #[test]
    fn chain_rejects_failing_subject() {
        let ringo = user("2", "Ringo", "Starr");
        assert!(!ringo.add_validation(has_id()).add(is_lennon()).validate());
    }

    #[test]
    fn empty_validator_is_valid() {
        assert!(Validator::new(user("", "", "")).validate());
    }

    #[test]
    fn add_keeps_subject() {
        let john = user("1", "John", "Lennon");
        let validator = Validator::new(john.clone()).add(has_id());
        assert_eq!(validator.validee(), &john);

        let validator = validator.add(is_lennon());
        assert_eq!(validator.into_inner(), john);
    }

    #[test]
    fn earlier_validator_is_unchanged_by_add() {
        let ringo = user("2", "Ringo", "Starr");
        let base = start_validation(ringo, has_id());
        let stricter = base.clone().add(is_lennon());

        assert!(base.validate());
        assert!(!stricter.validate());
    }

    #[test]
    fn predicate_accessor() {
        let validator = start_validation(user("1", "John", "Lennon"), has_id());
        assert!(validator.predicate().evaluate(validator.validee()));
    }

    #[test]
    fn check_returns_subject_or_error() {
        let john = user("1", "John", "Lennon");
        assert_eq!(
            john.clone().add_validation(is_lennon()).check().unwrap(),
            john
        );

        let err = user("", "Paul", "McCartney")
            .add_validation(has_id())
            .check()
            .unwrap_err();
        assert!(matches!(err, KeyPathError::ValidationFailed { .. }));
        assert!(err.to_string().contains("User"));
    }
}
