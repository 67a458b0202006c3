//! Bridge from constraint validators to predicates.
//!
//! A [`Validator`] inspects a value and reports every constraint it breaks.
//! [`ValidatorPredicate`] turns that report into a yes/no answer and keeps the
//! violations of its most recent evaluation for diagnostics.
//!
//! # Example
//!
//! ```rust
//! use reqs::adapter::validator::{ConstraintViolation, Validate, ValidatorPredicate};
//! use reqs::predicate::Predicate;
//!
//! struct Account {
//!     owner: String,
//!     balance: i64,
//! }
//!
//! impl Validate for Account {
//!     fn validate(&self) -> Vec<ConstraintViolation> {
//!         let mut violations = Vec::new();
//!         if self.owner.trim().is_empty() {
//!             violations.push(ConstraintViolation::new("owner", "must not be blank"));
//!         }
//!         if self.balance < 0 {
//!             violations.push(ConstraintViolation::new("balance", "must be positive"));
//!         }
//!         violations
//!     }
//! }
//!
//! let valid = ValidatorPredicate::new();
//! let overdrawn = Account { owner: "ada".into(), balance: -5 };
//! assert!(!valid.apply(&overdrawn).unwrap());
//! assert_eq!(valid.last_violations()[0].path(), "balance");
//! ```

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::RequirementError;
use crate::predicate::Predicate;

/// One broken constraint: where it was found and what it requires.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintViolation {
    path: String,
    message: String,
}

impl ConstraintViolation {
    /// Create a violation for the property at `path`.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Property path of the offending value; empty for the value as a whole.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// What the constraint requires.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Validation engine judging values of type `T`.
///
/// Any `Fn(&T) -> Vec<ConstraintViolation>` closure is a validator.
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Every constraint `value` violates; empty when it is valid.
    fn validate(&self, value: &T) -> Vec<ConstraintViolation>;
}

impl<T: ?Sized, F> Validator<T> for F
where
    F: Fn(&T) -> Vec<ConstraintViolation> + Send + Sync,
{
    fn validate(&self, value: &T) -> Vec<ConstraintViolation> {
        self(value)
    }
}

/// A type carrying its own constraints.
pub trait Validate {
    /// Every constraint `self` violates; empty when it is valid.
    fn validate(&self) -> Vec<ConstraintViolation>;
}

/// Validator that defers to the value's own [`Validate`] implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelfValidating;

impl<T: Validate + ?Sized> Validator<T> for SelfValidating {
    fn validate(&self, value: &T) -> Vec<ConstraintViolation> {
        Validate::validate(value)
    }
}

/// Predicate that holds when a validator reports no violations.
///
/// Each evaluation replaces the recorded violations; concurrent evaluations
/// race for the record, and the last to finish wins.
#[derive(Debug)]
pub struct ValidatorPredicate<V> {
    validator: V,
    last: Mutex<Vec<ConstraintViolation>>,
}

impl ValidatorPredicate<SelfValidating> {
    /// Predicate over values implementing [`Validate`].
    pub fn new() -> Self {
        Self::with_validator(SelfValidating)
    }
}

impl Default for ValidatorPredicate<SelfValidating> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ValidatorPredicate<V> {
    /// Predicate backed by an explicit validator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reqs::adapter::validator::{ConstraintViolation, ValidatorPredicate};
    /// use reqs::predicate::Predicate;
    ///
    /// let short = ValidatorPredicate::with_validator(|s: &str| {
    ///     if s.len() > 8 {
    ///         vec![ConstraintViolation::new("", "at most 8 characters")]
    ///     } else {
    ///         Vec::new()
    ///     }
    /// });
    /// assert!(short.apply("tiny").unwrap());
    /// assert!(!short.apply("far too long").unwrap());
    /// assert_eq!(short.last_violations()[0].to_string(), "at most 8 characters");
    /// ```
    pub fn with_validator(validator: V) -> Self {
        Self {
            validator,
            last: Mutex::new(Vec::new()),
        }
    }

    /// The underlying validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Violations found by the most recent evaluation.
    ///
    /// Empty before the first evaluation and after a successful one.
    pub fn last_violations(&self) -> Vec<ConstraintViolation> {
        self.record().clone()
    }

    fn record(&self) -> MutexGuard<'_, Vec<ConstraintViolation>> {
        self.last.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: ?Sized, V: Validator<T>> Predicate<T> for ValidatorPredicate<V> {
    fn apply(&self, value: &T) -> Result<bool, RequirementError> {
        let violations = self.validator.validate(value);
        let valid = violations.is_empty();

        #[cfg(feature = "tracing")]
        if !valid {
            tracing::debug!(violations = violations.len(), "constraint violations found");
        }

        *self.record() = violations;
        Ok(valid)
    }
}
