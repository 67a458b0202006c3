//! Object predicates
//!
//! Constant, presence, equality, type-instance and boolean predicates.
//! Absence is modelled with `Option`: [`is_null`] and [`not_null`] judge an
//! `Option<T>`, while [`is_true`] rejects `None` as an invalid argument.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use super::combinators::{Not, Predicate};
use crate::error::RequirementError;
use crate::requirement::present;

/// Predicate that accepts every input, including absent ones.
#[derive(Clone, Copy, Default, Debug)]
pub struct AlwaysTrue;

impl<T: ?Sized> Predicate<T> for AlwaysTrue {
    #[inline]
    fn apply(&self, _value: &T) -> Result<bool, RequirementError> {
        Ok(true)
    }
}

/// Create a predicate that always evaluates to true.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(always_true().apply(&None::<i32>).unwrap());
/// assert!(always_true().apply("anything").unwrap());
/// ```
pub fn always_true() -> AlwaysTrue {
    AlwaysTrue
}

/// Create a predicate that always evaluates to false.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(!always_false().apply(&None::<i32>).unwrap());
/// assert!(!always_false().apply(&42).unwrap());
/// ```
pub fn always_false() -> Not<AlwaysTrue> {
    Not(AlwaysTrue)
}

/// Predicate that checks an optional value is absent.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNull;

impl<T> Predicate<Option<T>> for IsNull {
    #[inline]
    fn apply(&self, value: &Option<T>) -> Result<bool, RequirementError> {
        Ok(value.is_none())
    }
}

/// Create a predicate that checks an optional value is absent.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(is_null().apply(&None::<String>).unwrap());
/// assert!(!is_null().apply(&Some(1)).unwrap());
/// ```
pub fn is_null() -> IsNull {
    IsNull
}

/// Create a predicate that checks an optional value is present.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(not_null().apply(&Some(1)).unwrap());
/// assert!(!not_null().apply(&None::<i32>).unwrap());
/// ```
pub fn not_null() -> Not<IsNull> {
    Not(IsNull)
}

/// Predicate for equality with a fixed value.
#[derive(Clone, Copy, Debug)]
pub struct EqualTo<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for EqualTo<T> {
    #[inline]
    fn apply(&self, value: &T) -> Result<bool, RequirementError> {
        Ok(*value == self.0)
    }
}

impl<T: PartialEq + Send + Sync> Predicate<Option<T>> for EqualTo<T> {
    #[inline]
    fn apply(&self, value: &Option<T>) -> Result<bool, RequirementError> {
        Ok(value.as_ref() == Some(&self.0))
    }
}

/// Create a predicate that checks for equality with `expected`.
///
/// An absent input is never equal.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(equal_to(5).apply(&5).unwrap());
/// assert!(!equal_to(5).apply(&4).unwrap());
/// assert!(!equal_to(5).apply(&None).unwrap());
/// ```
pub fn equal_to<T: PartialEq + Send + Sync>(expected: T) -> EqualTo<T> {
    EqualTo(expected)
}

/// Predicate that checks a dynamically typed value is a `C`.
pub struct InstanceOf<C>(PhantomData<fn() -> C>);

impl<C> fmt::Debug for InstanceOf<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceOf<{}>", std::any::type_name::<C>())
    }
}

impl<C> Clone for InstanceOf<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for InstanceOf<C> {}

impl<C: Any> Predicate<dyn Any> for InstanceOf<C> {
    #[inline]
    fn apply(&self, value: &dyn Any) -> Result<bool, RequirementError> {
        Ok(value.is::<C>())
    }
}

impl<C: Any> Predicate<dyn Any + Send + Sync> for InstanceOf<C> {
    #[inline]
    fn apply(&self, value: &(dyn Any + Send + Sync)) -> Result<bool, RequirementError> {
        Ok(value.is::<C>())
    }
}

/// Create a predicate that checks a `dyn Any` value is of type `C`.
///
/// # Example
///
/// ```rust
/// use std::any::Any;
/// use reqs::predicate::*;
///
/// let value: Box<dyn Any> = Box::new(String::from("text"));
/// assert!(instance_of::<String>().apply(&*value).unwrap());
/// assert!(!instance_of::<i32>().apply(&*value).unwrap());
/// ```
pub fn instance_of<C: Any>() -> InstanceOf<C> {
    InstanceOf(PhantomData)
}

/// Predicate that checks every element of a dynamically typed collection is a `C`.
pub struct AllInstanceOf<C>(PhantomData<fn() -> C>);

impl<C> fmt::Debug for AllInstanceOf<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AllInstanceOf<{}>", std::any::type_name::<C>())
    }
}

impl<C> Clone for AllInstanceOf<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for AllInstanceOf<C> {}

impl<C: Any> Predicate<[Box<dyn Any>]> for AllInstanceOf<C> {
    fn apply(&self, value: &[Box<dyn Any>]) -> Result<bool, RequirementError> {
        Ok(value.iter().all(|item| item.is::<C>()))
    }
}

impl<C: Any> Predicate<Vec<Box<dyn Any>>> for AllInstanceOf<C> {
    fn apply(&self, value: &Vec<Box<dyn Any>>) -> Result<bool, RequirementError> {
        Predicate::<[Box<dyn Any>]>::apply(self, value.as_slice())
    }
}

impl<C: Any> Predicate<Option<Vec<Box<dyn Any>>>> for AllInstanceOf<C> {
    fn apply(&self, value: &Option<Vec<Box<dyn Any>>>) -> Result<bool, RequirementError> {
        let items = present(value.as_ref(), "Input collection parameter must not be null.")?;
        Predicate::<[Box<dyn Any>]>::apply(self, items.as_slice())
    }
}

/// Create a predicate that checks every element is of type `C`.
///
/// An empty collection satisfies the predicate.
///
/// # Example
///
/// ```rust
/// use std::any::Any;
/// use reqs::predicate::*;
///
/// let items: Vec<Box<dyn Any>> = vec![Box::new(1u8), Box::new(2u8)];
/// assert!(all_instance_of::<u8>().apply(&items).unwrap());
///
/// let mixed: Vec<Box<dyn Any>> = vec![Box::new(1u8), Box::new("two")];
/// assert!(!all_instance_of::<u8>().apply(&mixed).unwrap());
/// ```
pub fn all_instance_of<C: Any>() -> AllInstanceOf<C> {
    AllInstanceOf(PhantomData)
}

/// Predicate that checks a boolean has an expected value.
#[derive(Clone, Copy, Debug)]
pub struct IsBool(bool);

impl Predicate<bool> for IsBool {
    #[inline]
    fn apply(&self, value: &bool) -> Result<bool, RequirementError> {
        Ok(*value == self.0)
    }
}

impl Predicate<Option<bool>> for IsBool {
    fn apply(&self, value: &Option<bool>) -> Result<bool, RequirementError> {
        let value = present(*value, "Input parameter must not be null.")?;
        Ok(value == self.0)
    }
}

/// Create a predicate that checks a boolean is true.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(is_true().apply(&true).unwrap());
/// assert!(!is_true().apply(&Some(false)).unwrap());
/// assert!(is_true().apply(&None).is_err());
/// ```
pub fn is_true() -> IsBool {
    IsBool(true)
}

/// Create a predicate that checks a boolean is false.
pub fn is_false() -> IsBool {
    IsBool(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_true_and_false() {
        assert!(always_true().apply(&()).unwrap());
        assert!(always_true().apply(&None::<u8>).unwrap());
        assert!(!always_false().apply(&()).unwrap());
        assert!(!always_false().apply(&None::<u8>).unwrap());
    }

    #[test]
    fn test_null_checks() {
        let missing: Option<Box<dyn Any>> = None;
        let object: Option<Box<dyn Any>> = Some(Box::new(()));
        assert!(is_null().apply(&missing).unwrap());
        assert!(!is_null().apply(&object).unwrap());
        assert!(!not_null().apply(&missing).unwrap());
        assert!(not_null().apply(&object).unwrap());
    }

    #[test]
    fn test_equal_to() {
        assert!(equal_to("abc").apply(&"abc").unwrap());
        assert!(!equal_to("abc").apply(&"abd").unwrap());
        assert!(equal_to(3.5).apply(&Some(3.5)).unwrap());
        assert!(!equal_to(3.5).apply(&None).unwrap());
    }

    #[test]
    fn test_instance_of() {
        let text: Box<dyn Any> = Box::new(String::from("x"));
        let number: Box<dyn Any + Send + Sync> = Box::new(7u64);
        assert!(instance_of::<String>().apply(&*text).unwrap());
        assert!(!instance_of::<&str>().apply(&*text).unwrap());
        assert!(instance_of::<u64>().apply(&*number).unwrap());
        assert!(!instance_of::<u32>().apply(&*number).unwrap());
    }

    #[test]
    fn test_all_instance_of() {
        let empty: Vec<Box<dyn Any>> = Vec::new();
        assert!(all_instance_of::<String>().apply(&empty).unwrap());

        let strings: Vec<Box<dyn Any>> = vec![Box::new(String::new()), Box::new(String::new())];
        assert!(all_instance_of::<String>().apply(&strings).unwrap());

        let mixed: Vec<Box<dyn Any>> = vec![Box::new(String::new()), Box::new(1i32)];
        assert!(!all_instance_of::<String>().apply(&mixed).unwrap());
        assert!(!all_instance_of::<String>().apply(mixed.as_slice()).unwrap());
    }

    #[test]
    fn test_all_instance_of_rejects_absent_collection() {
        let err = all_instance_of::<String>().apply(&None).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_is_true_is_false() {
        assert!(is_true().apply(&true).unwrap());
        assert!(!is_true().apply(&false).unwrap());
        assert!(is_false().apply(&false).unwrap());
        assert!(is_false().apply(&Some(false)).unwrap());

        let err = is_false().apply(&None).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.message().ends_with("Input parameter must not be null."));
    }
}
