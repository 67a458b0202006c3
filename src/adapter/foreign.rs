//! Bridge from foreign boolean functions to predicates.
//!
//! Plain closures already implement [`Predicate`]. These wrappers exist for
//! functions from other libraries whose shape is close but not identical,
//! such as by-value methods like `char::is_alphanumeric`, and for callers that
//! receive the function as an `Option`.

use crate::error::RequirementError;
use crate::predicate::Predicate;
use crate::requirement::present;

/// A foreign `Fn(&T) -> bool` behind the [`Predicate`] contract.
#[derive(Clone, Copy, Debug)]
pub struct Foreign<F>(F);

impl<F> Foreign<F> {
    /// Unwrap the foreign function.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<T: ?Sized, F> Predicate<T> for Foreign<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn apply(&self, value: &T) -> Result<bool, RequirementError> {
        Ok((self.0)(value))
    }
}

/// Wrap a foreign by-reference predicate function.
///
/// # Example
///
/// ```rust
/// use reqs::adapter::foreign::wrap;
/// use reqs::predicate::*;
///
/// let ascii = wrap(str::is_ascii);
/// assert!(ascii.apply("plain").unwrap());
/// assert!(!ascii.apply("naïve").unwrap());
/// ```
pub fn wrap<T: ?Sized, F>(foreign: F) -> Foreign<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    Foreign(foreign)
}

/// Wrap a possibly-absent foreign predicate function.
///
/// # Errors
///
/// An invalid-argument error when `foreign` is `None`.
pub fn try_wrap<T: ?Sized, F>(foreign: Option<F>) -> Result<Foreign<F>, RequirementError>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    let foreign = present(foreign, "The foreign predicate parameter must not be null.")?;
    Ok(Foreign(foreign))
}

/// A foreign by-value `Fn(T) -> bool` over `Copy` inputs.
#[derive(Clone, Copy, Debug)]
pub struct ForeignCopied<F>(F);

impl<T: Copy, F> Predicate<T> for ForeignCopied<F>
where
    F: Fn(T) -> bool + Send + Sync,
{
    #[inline]
    fn apply(&self, value: &T) -> Result<bool, RequirementError> {
        Ok((self.0)(*value))
    }
}

/// Wrap a foreign predicate function that takes its input by value.
///
/// # Example
///
/// ```rust
/// use reqs::adapter::foreign::wrap_copied;
/// use reqs::predicate::*;
///
/// let finite = wrap_copied(f64::is_finite);
/// assert!(finite.apply(&1.5).unwrap());
/// assert!(!finite.apply(&f64::INFINITY).unwrap());
/// ```
pub fn wrap_copied<T: Copy, F>(foreign: F) -> ForeignCopied<F>
where
    F: Fn(T) -> bool + Send + Sync,
{
    ForeignCopied(foreign)
}
