//! Number predicates
//!
//! Sign checks over every primitive integer and float, and over any other
//! type implementing [`Number`]. "Positive" and "negative" include zero; use
//! the `strictly_` variants to exclude it.

use std::cmp::Ordering;

use super::combinators::Predicate;
use crate::error::RequirementError;
use crate::requirement::present;

/// A numeric value that can be compared against zero.
///
/// Implement this for arbitrary-precision or fixed-point types to use them
/// with the sign predicates.
pub trait Number {
    /// How the value orders relative to zero, or `None` if it is unordered (NaN).
    fn sign(&self) -> Option<Ordering>;
}

macro_rules! impl_number_int {
    ($($t:ty),+) => {
        $(
            impl Number for $t {
                #[inline]
                fn sign(&self) -> Option<Ordering> {
                    Some(self.cmp(&0))
                }
            }
        )+
    };
}

macro_rules! impl_number_float {
    ($($t:ty),+) => {
        $(
            impl Number for $t {
                #[inline]
                fn sign(&self) -> Option<Ordering> {
                    self.partial_cmp(&0.0)
                }
            }
        )+
    };
}

impl_number_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number_float!(f32, f64);

const NULL_NUMBER: &str = "Input number parameter must not be null.";

/// Sign predicate over [`Number`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Equal to zero.
    Zero,
    /// Less than zero.
    StrictlyNegative,
    /// Greater than zero.
    StrictlyPositive,
    /// Less than or equal to zero.
    Negative,
    /// Greater than or equal to zero.
    Positive,
}

impl Sign {
    fn accepts(self, ordering: Option<Ordering>) -> bool {
        let Some(ordering) = ordering else {
            return false;
        };
        match self {
            Sign::Zero => ordering.is_eq(),
            Sign::StrictlyNegative => ordering.is_lt(),
            Sign::StrictlyPositive => ordering.is_gt(),
            Sign::Negative => ordering.is_le(),
            Sign::Positive => ordering.is_ge(),
        }
    }
}

impl<N: Number> Predicate<N> for Sign {
    #[inline]
    fn apply(&self, value: &N) -> Result<bool, RequirementError> {
        Ok(self.accepts(value.sign()))
    }
}

impl<N: Number> Predicate<Option<N>> for Sign {
    fn apply(&self, value: &Option<N>) -> Result<bool, RequirementError> {
        let value = present(value.as_ref(), NULL_NUMBER)?;
        Ok(self.accepts(value.sign()))
    }
}

/// Create a predicate that checks a number is zero.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(zero().apply(&0).unwrap());
/// assert!(zero().apply(&0.0f64).unwrap());
/// assert!(!zero().apply(&1u8).unwrap());
/// assert!(zero().apply(&None::<i32>).is_err());
/// ```
pub fn zero() -> Sign {
    Sign::Zero
}

/// Create a predicate that checks a number is below zero.
pub fn strictly_negative() -> Sign {
    Sign::StrictlyNegative
}

/// Create a predicate that checks a number is above zero.
pub fn strictly_positive() -> Sign {
    Sign::StrictlyPositive
}

/// Create a predicate that checks a number is zero or below.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(negative().apply(&-3).unwrap());
/// assert!(negative().apply(&0).unwrap());
/// assert!(!negative().apply(&3).unwrap());
/// ```
pub fn negative() -> Sign {
    Sign::Negative
}

/// Create a predicate that checks a number is zero or above.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(positive().apply(&3).unwrap());
/// assert!(positive().apply(&0).unwrap());
/// assert!(!positive().apply(&-3).unwrap());
/// ```
pub fn positive() -> Sign {
    Sign::Positive
}

const EVEN_UNSUPPORTED: &str = "even predicate is still not implemented.";

/// Parity predicate. Not implemented: every evaluation fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Divisible by two.
    Even,
    /// Not divisible by two.
    Odd,
}

impl Parity {
    // odd is the negation of even and reports the even failure
    fn unsupported() -> RequirementError {
        RequirementError::unsupported(EVEN_UNSUPPORTED)
    }
}

impl<N: Number> Predicate<N> for Parity {
    fn apply(&self, _value: &N) -> Result<bool, RequirementError> {
        Err(Parity::unsupported())
    }
}

impl<N: Number> Predicate<Option<N>> for Parity {
    fn apply(&self, _value: &Option<N>) -> Result<bool, RequirementError> {
        Err(Parity::unsupported())
    }
}

/// Create the even predicate.
///
/// # Errors
///
/// Evaluation always fails with an unsupported-operation error.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(even().apply(&2).unwrap_err().is_unsupported());
/// ```
pub fn even() -> Parity {
    Parity::Even
}

/// Create the odd predicate.
///
/// # Errors
///
/// Evaluation always fails with an unsupported-operation error.
pub fn odd() -> Parity {
    Parity::Odd
}
