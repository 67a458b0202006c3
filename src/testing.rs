//! Testing utilities for code that uses requirements and predicates
//!
//! This module provides instrumented predicates for observing how combinators
//! and caches drive their members, and assertion macros for each error kind.
//!
//! # Examples
//!
//! ## Instrumented predicates
//!
//! ```rust
//! use std::sync::Arc;
//! use reqs::predicate::*;
//! use reqs::testing::{counting, failing};
//!
//! let second = Arc::new(counting(failing("never evaluated")));
//! let p = always_false().and(second.clone());
//! assert!(!p.apply(&1).unwrap());
//! assert_eq!(second.calls(), 0);
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use reqs::predicate::*;
//! use reqs::requirement::pre_condition;
//! use reqs::{assert_pre_condition_failed, assert_invalid_argument};
//!
//! assert_pre_condition_failed!(pre_condition(&always_false(), &1, "must hold"));
//! assert_invalid_argument!(
//!     zero().apply(&None::<i32>),
//!     "Input number parameter must not be null."
//! );
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::RequirementError;
use crate::predicate::Predicate;

/// Predicate wrapper that counts how many times it is evaluated.
#[derive(Debug, Default)]
pub struct Counting<P> {
    inner: P,
    calls: AtomicUsize,
}

impl<P> Counting<P> {
    /// Wrap `inner`, starting the count at zero.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of evaluations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Reset the count to zero.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Counting<P> {
    fn apply(&self, value: &T) -> Result<bool, RequirementError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.apply(value)
    }
}

/// Wrap a predicate so its evaluations are counted.
pub fn counting<P>(inner: P) -> Counting<P> {
    Counting::new(inner)
}

/// Predicate that always fails with an invalid-argument error.
#[derive(Clone, Debug)]
pub struct Failing {
    detail: String,
}

impl<T: ?Sized> Predicate<T> for Failing {
    fn apply(&self, _value: &T) -> Result<bool, RequirementError> {
        Err(RequirementError::invalid_argument(&self.detail))
    }
}

/// Create a predicate whose every evaluation fails with `detail`.
pub fn failing(detail: impl Into<String>) -> Failing {
    Failing {
        detail: detail.into(),
    }
}

/// Predicate that returns a fixed answer for any input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constant(pub bool);

impl<T: ?Sized> Predicate<T> for Constant {
    #[inline]
    fn apply(&self, _value: &T) -> Result<bool, RequirementError> {
        Ok(self.0)
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_requirement_kind {
    ($result:expr, $kind:ident) => {
        match $result {
            ::std::result::Result::Err(e) => {
                let e: $crate::RequirementError = e;
                if e.kind() != $crate::RequirementKind::$kind {
                    panic!(
                        "Expected {} error, got {:?}: {}",
                        stringify!($kind),
                        e.kind(),
                        e
                    );
                }
                e
            }
            ::std::result::Result::Ok(v) => {
                panic!("Expected {} error, got Ok: {:?}", stringify!($kind), v);
            }
        }
    };
    ($result:expr, $kind:ident, $detail:expr) => {{
        let e = $crate::__assert_requirement_kind!($result, $kind);
        let expected = $crate::RequirementError::new($crate::RequirementKind::$kind, $detail);
        assert_eq!(e.message(), expected.message());
        e
    }};
}

/// Assert that a result failed with an invalid-argument error.
///
/// With a second argument, the error's detail message must match it.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
/// use reqs::assert_invalid_argument;
///
/// assert_invalid_argument!(empty_string().apply(&None::<String>));
/// ```
#[macro_export]
macro_rules! assert_invalid_argument {
    ($result:expr) => {
        $crate::__assert_requirement_kind!($result, InvalidArgument)
    };
    ($result:expr, $detail:expr) => {
        $crate::__assert_requirement_kind!($result, InvalidArgument, $detail)
    };
}

/// Assert that a result failed with a requirement error.
#[macro_export]
macro_rules! assert_requirement_failed {
    ($result:expr) => {
        $crate::__assert_requirement_kind!($result, Requirement)
    };
    ($result:expr, $detail:expr) => {
        $crate::__assert_requirement_kind!($result, Requirement, $detail)
    };
}

/// Assert that a result failed with a pre-condition error.
#[macro_export]
macro_rules! assert_pre_condition_failed {
    ($result:expr) => {
        $crate::__assert_requirement_kind!($result, PreCondition)
    };
    ($result:expr, $detail:expr) => {
        $crate::__assert_requirement_kind!($result, PreCondition, $detail)
    };
}

/// Assert that a result failed with a post-condition error.
#[macro_export]
macro_rules! assert_post_condition_failed {
    ($result:expr) => {
        $crate::__assert_requirement_kind!($result, PostCondition)
    };
    ($result:expr, $detail:expr) => {
        $crate::__assert_requirement_kind!($result, PostCondition, $detail)
    };
}

/// Assert that a result failed with an unsupported-operation error.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
/// use reqs::assert_unsupported;
///
/// assert_unsupported!(even().apply(&4), "even predicate is still not implemented.");
/// ```
#[macro_export]
macro_rules! assert_unsupported {
    ($result:expr) => {
        $crate::__assert_requirement_kind!($result, Unsupported)
    };
    ($result:expr, $detail:expr) => {
        $crate::__assert_requirement_kind!($result, Unsupported, $detail)
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::requirement::{condition, post_condition};

    #[test]
    fn counting_tracks_calls() {
        let p = counting(Constant(true));
        assert_eq!(p.calls(), 0);
        assert!(p.apply(&1).unwrap());
        assert!(p.apply("text").unwrap());
        assert_eq!(p.calls(), 2);
        p.reset();
        assert_eq!(p.calls(), 0);
    }

    #[test]
    fn counting_is_shared_through_arc() {
        let p = Arc::new(counting(Constant(false)));
        let handle = p.clone();
        assert!(!handle.apply(&()).unwrap());
        assert_eq!(p.calls(), 1);
    }

    #[test]
    fn failing_always_errors() {
        let err = failing("no").apply(&0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.message(), "Parameter requirement not verified: no");
    }

    #[test]
    fn assertion_macros_accept_matching_kind() {
        assert_requirement_failed!(condition(&Constant(false), &1, "r"), "r");
        assert_post_condition_failed!(post_condition(&Constant(false), &1, "p"));
        let e = assert_invalid_argument!(failing("x").apply(&1));
        assert!(e.message().ends_with('x'));
    }

    #[test]
    #[should_panic(expected = "Expected PreCondition error, got Ok")]
    fn assertion_macro_panics_on_success() {
        assert_pre_condition_failed!(Ok::<(), RequirementError>(()));
    }

    #[test]
    #[should_panic(expected = "Expected Unsupported error, got InvalidArgument")]
    fn assertion_macro_panics_on_other_kind() {
        assert_unsupported!(failing("x").apply(&1));
    }
}
