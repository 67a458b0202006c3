//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and the AND, OR,
//! XOR and NOT combinators for composing predicates.

use std::sync::Arc;

use crate::error::RequirementError;
use crate::requirement::present;

/// A composable predicate over values of type T.
///
/// Evaluation must be free of observable side effects and consistent with
/// value equality. A predicate that cannot judge an input (for instance an
/// absent value it does not accept) returns an invalid-argument error instead
/// of a boolean.
///
/// Any `Fn(&T) -> bool` closure is a predicate.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// let is_valid_age = (|age: &i32| *age >= 0).and(|age: &i32| *age <= 150);
/// assert!(is_valid_age.apply(&25).unwrap());
/// assert!(!is_valid_age.apply(&-5).unwrap());
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Evaluate the predicate against a value.
    fn apply(&self, value: &T) -> Result<bool, RequirementError>;
}

/// An owned, type-erased predicate.
pub type BoxedPredicate<T> = Box<dyn Predicate<T>>;

/// A shared, type-erased predicate.
pub type SharedPredicate<T> = Arc<dyn Predicate<T>>;

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn apply(&self, value: &T) -> Result<bool, RequirementError> {
        Ok(self(value))
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for Arc<P> {
    #[inline]
    fn apply(&self, value: &T) -> Result<bool, RequirementError> {
        (**self).apply(value)
    }
}

impl<T: ?Sized> Predicate<T> for Box<dyn Predicate<T>> {
    #[inline]
    fn apply(&self, value: &T) -> Result<bool, RequirementError> {
        (**self).apply(value)
    }
}

/// Predicate backed by a fallible closure.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F>(F);

impl<T: ?Sized, F> Predicate<T> for FromFn<F>
where
    F: Fn(&T) -> Result<bool, RequirementError> + Send + Sync,
{
    #[inline]
    fn apply(&self, value: &T) -> Result<bool, RequirementError> {
        (self.0)(value)
    }
}

/// Create a predicate from a closure that may reject its input.
///
/// # Example
///
/// ```rust
/// use reqs::{RequirementError, predicate::*};
///
/// let small = from_fn(|n: &i64| {
///     if *n == i64::MIN {
///         Err(RequirementError::invalid_argument("value has no absolute value"))
///     } else {
///         Ok(n.abs() < 10)
///     }
/// });
/// assert!(small.apply(&-3).unwrap());
/// assert!(small.apply(&i64::MIN).is_err());
/// ```
pub fn from_fn<T: ?Sized, F>(f: F) -> FromFn<F>
where
    F: Fn(&T) -> Result<bool, RequirementError> + Send + Sync,
{
    FromFn(f)
}

/// Extension trait for predicate combinators.
///
/// The trait carries no input type so that predicates implemented for several
/// inputs (`str`, `String`, `Option<String>`) compose without annotations; the
/// input type is fixed at the `apply` call.
///
/// It is implemented for every sized type. With [`std::ops::Not`] also in
/// scope, `x.not()` on a type implementing both (such as `bool` or the
/// integers) is ambiguous; write `!x` or `PredicateExt::not(x)` there.
/// Predicate types do not implement `std::ops::Not`, so chaining on them is
/// unaffected.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// let p = contains_pattern("hel.*").unwrap().and(not_blank_string());
/// assert!(p.apply("hello").unwrap());
/// assert!(!p.apply("hero").unwrap());
/// ```
pub trait PredicateExt: Sized {
    /// Combine with AND logic, short-circuiting on the first false.
    fn and<P>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic, short-circuiting on the first true.
    fn or<P>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Combine with XOR logic. Both sides are always evaluated.
    fn xor<P>(self, other: P) -> Xor<Self, P> {
        Xor(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Negated AND.
    fn nand<P>(self, other: P) -> Not<And<Self, P>> {
        Not(And(self, other))
    }

    /// Negated OR.
    fn nor<P>(self, other: P) -> Not<Or<Self, P>> {
        Not(Or(self, other))
    }

    /// Erase the predicate type behind a `Box`.
    fn boxed<T: ?Sized>(self) -> BoxedPredicate<T>
    where
        Self: Predicate<T> + 'static,
    {
        Box::new(self)
    }

    /// Erase the predicate type behind an `Arc`.
    fn shared<T: ?Sized>(self) -> SharedPredicate<T>
    where
        Self: Predicate<T> + 'static,
    {
        Arc::new(self)
    }
}

impl<P> PredicateExt for P {}

const FIRST_MEMBER: &str = "First member predicate object parameter must not be null.";
const SECOND_MEMBER: &str = "Second member predicate object parameter must not be null.";
const ORIGINAL: &str = "Original predicate object parameter must not be null.";

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<P1, P2> And<P1, P2> {
    /// Build from possibly-absent members.
    pub fn try_new(first: Option<P1>, second: Option<P2>) -> Result<Self, RequirementError> {
        Ok(And(present(first, FIRST_MEMBER)?, present(second, SECOND_MEMBER)?))
    }
}

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn apply(&self, value: &T) -> Result<bool, RequirementError> {
        Ok(self.0.apply(value)? && self.1.apply(value)?)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<P1, P2> Or<P1, P2> {
    /// Build from possibly-absent members.
    pub fn try_new(first: Option<P1>, second: Option<P2>) -> Result<Self, RequirementError> {
        Ok(Or(present(first, FIRST_MEMBER)?, present(second, SECOND_MEMBER)?))
    }
}

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn apply(&self, value: &T) -> Result<bool, RequirementError> {
        Ok(self.0.apply(value)? || self.1.apply(value)?)
    }
}

/// XOR combinator - exactly one predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Xor<P1, P2>(pub P1, pub P2);

impl<P1, P2> Xor<P1, P2> {
    /// Build from possibly-absent members.
    pub fn try_new(first: Option<P1>, second: Option<P2>) -> Result<Self, RequirementError> {
        Ok(Xor(present(first, FIRST_MEMBER)?, present(second, SECOND_MEMBER)?))
    }
}

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Xor<P1, P2> {
    #[inline]
    fn apply(&self, value: &T) -> Result<bool, RequirementError> {
        let first = self.0.apply(value)?;
        let second = self.1.apply(value)?;
        Ok(first != second)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<P> Not<P> {
    /// Build from a possibly-absent predicate.
    pub fn try_new(original: Option<P>) -> Result<Self, RequirementError> {
        Ok(Not(present(original, ORIGINAL)?))
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn apply(&self, value: &T) -> Result<bool, RequirementError> {
        Ok(!self.0.apply(value)?)
    }
}

/// Combine two predicates with AND logic.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// let p = and(not_null(), |v: &Option<i32>| v.map_or(false, |n| n > 0));
/// assert!(p.apply(&Some(3)).unwrap());
/// assert!(!p.apply(&None).unwrap());
/// ```
pub fn and<P1, P2>(first: P1, second: P2) -> And<P1, P2> {
    And(first, second)
}

/// Combine two predicates with OR logic.
pub fn or<P1, P2>(first: P1, second: P2) -> Or<P1, P2> {
    Or(first, second)
}

/// Combine two predicates with XOR logic.
pub fn xor<P1, P2>(first: P1, second: P2) -> Xor<P1, P2> {
    Xor(first, second)
}

/// Invert a predicate.
pub fn not<P>(original: P) -> Not<P> {
    Not(original)
}

/// Negated AND of two predicates.
pub fn nand<P1, P2>(first: P1, second: P2) -> Not<And<P1, P2>> {
    Not(And(first, second))
}

/// Negated OR of two predicates.
pub fn nor<P1, P2>(first: P1, second: P2) -> Not<Or<P1, P2>> {
    Not(Or(first, second))
}
