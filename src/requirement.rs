//! Requirement dispatch
//!
//! Four assertion functions evaluate a predicate against a value and return a
//! categorized [`RequirementError`] when it does not hold:
//!
//! | Function | Error kind |
//! |---|---|
//! | [`parameter_condition`] | [`RequirementKind::InvalidArgument`] |
//! | [`condition`] | [`RequirementKind::Requirement`] |
//! | [`pre_condition`] | [`RequirementKind::PreCondition`] |
//! | [`post_condition`] | [`RequirementKind::PostCondition`] |
//!
//! An error raised by the predicate itself is returned as is, never re-wrapped
//! into the requirement's kind.
//!
//! # Example
//!
//! ```rust
//! use reqs::predicate::*;
//! use reqs::requirement::{parameter_condition, post_condition};
//! use reqs::RequirementError;
//!
//! fn shout(input: &str) -> Result<String, RequirementError> {
//!     parameter_condition(&not_blank_string(), input, "input must not be blank")?;
//!     let out = input.to_uppercase();
//!     post_condition(&not_empty_string(), out.as_str(), "output must not be empty")?;
//!     Ok(out)
//! }
//!
//! assert_eq!(shout("hi").unwrap(), "HI");
//! assert!(shout("   ").unwrap_err().is_invalid_argument());
//! ```

use crate::error::{RequirementError, RequirementKind};
use crate::predicate::Predicate;

/// Evaluate `predicate` against `value`, failing with `kind` when false.
///
/// This is the dispatch the four named entry points delegate to.
pub fn verify<T, P>(
    kind: RequirementKind,
    predicate: &P,
    value: &T,
    message: &str,
) -> Result<(), RequirementError>
where
    T: ?Sized,
    P: Predicate<T> + ?Sized,
{
    if predicate.apply(value)? {
        Ok(())
    } else {
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = %kind, detail = message, "requirement not verified");
        Err(RequirementError::new(kind, message))
    }
}

/// Check that a function parameter satisfies a predicate.
///
/// # Errors
///
/// [`RequirementKind::InvalidArgument`] with
/// `"Parameter requirement not verified: <message>"`.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
/// use reqs::requirement::parameter_condition;
///
/// assert!(parameter_condition(&always_true(), &5, "anything goes").is_ok());
///
/// let err = parameter_condition(&always_false(), &5, "nothing goes").unwrap_err();
/// assert_eq!(err.to_string(), "Parameter requirement not verified: nothing goes");
/// ```
pub fn parameter_condition<T, P>(
    predicate: &P,
    value: &T,
    message: &str,
) -> Result<(), RequirementError>
where
    T: ?Sized,
    P: Predicate<T> + ?Sized,
{
    verify(RequirementKind::InvalidArgument, predicate, value, message)
}

/// Check an arbitrary runtime invariant.
///
/// # Errors
///
/// [`RequirementKind::Requirement`] with `"Requirement not verified: <message>"`.
pub fn condition<T, P>(predicate: &P, value: &T, message: &str) -> Result<(), RequirementError>
where
    T: ?Sized,
    P: Predicate<T> + ?Sized,
{
    verify(RequirementKind::Requirement, predicate, value, message)
}

/// Check state before an operation.
///
/// # Errors
///
/// [`RequirementKind::PreCondition`] with `"Pre-condition not verified: <message>"`.
pub fn pre_condition<T, P>(predicate: &P, value: &T, message: &str) -> Result<(), RequirementError>
where
    T: ?Sized,
    P: Predicate<T> + ?Sized,
{
    verify(RequirementKind::PreCondition, predicate, value, message)
}

/// Check state after an operation.
///
/// # Errors
///
/// [`RequirementKind::PostCondition`] with `"Post-condition not verified: <message>"`.
pub fn post_condition<T, P>(predicate: &P, value: &T, message: &str) -> Result<(), RequirementError>
where
    T: ?Sized,
    P: Predicate<T> + ?Sized,
{
    verify(RequirementKind::PostCondition, predicate, value, message)
}

/// Check a value and hand it back on success.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
/// use reqs::requirement::ensure;
/// use reqs::RequirementKind;
///
/// let kind = RequirementKind::InvalidArgument;
/// let name = ensure(String::from("alice"), &not_blank_string(), kind, "name").unwrap();
/// assert_eq!(name, "alice");
/// ```
pub fn ensure<T, P>(
    value: T,
    predicate: &P,
    kind: RequirementKind,
    message: &str,
) -> Result<T, RequirementError>
where
    P: Predicate<T> + ?Sized,
{
    verify(kind, predicate, &value, message)?;
    Ok(value)
}

/// Unwrap a possibly-absent parameter.
///
/// # Errors
///
/// [`RequirementKind::InvalidArgument`] when `value` is `None`.
///
/// # Example
///
/// ```rust
/// use reqs::requirement::present;
///
/// assert_eq!(present(Some(3), "count").unwrap(), 3);
/// let err = present(None::<i32>, "Count parameter must not be null.").unwrap_err();
/// assert!(err.is_invalid_argument());
/// ```
pub fn present<T>(value: Option<T>, message: &str) -> Result<T, RequirementError> {
    value.ok_or_else(|| RequirementError::invalid_argument(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{always_false, always_true, blank_string, not_null, zero};
    use crate::testing::failing;

    const MSG: &str = "AlwaysFalse predicate does not evaluate to true, as expected.";

    #[test]
    fn test_parameter_condition_failure() {
        let err = parameter_condition(&always_false(), &Some(1), MSG).unwrap_err();
        assert_eq!(err.kind(), RequirementKind::InvalidArgument);
        assert_eq!(err.message(), format!("Parameter requirement not verified: {}", MSG));
    }

    #[test]
    fn test_condition_failure() {
        let err = condition(&always_false(), &None::<i32>, MSG).unwrap_err();
        assert_eq!(err.kind(), RequirementKind::Requirement);
        assert_eq!(err.message(), format!("Requirement not verified: {}", MSG));
    }

    #[test]
    fn test_pre_condition_failure() {
        let err = pre_condition(&always_false(), "input", MSG).unwrap_err();
        assert!(err.is_pre_condition());
        assert!(err.is_requirement());
        assert!(err.message().starts_with("Pre-condition not verified: "));
    }

    #[test]
    fn test_post_condition_failure() {
        let err = post_condition(&always_false(), &0u8, MSG).unwrap_err();
        assert!(err.is_post_condition());
        assert!(err.is_requirement());
        assert!(err.message().starts_with("Post-condition not verified: "));
    }

    #[test]
    fn test_all_succeed_with_always_true() {
        let none: Option<()> = None;
        assert!(parameter_condition(&always_true(), &none, "ok").is_ok());
        assert!(condition(&always_true(), &none, "ok").is_ok());
        assert!(pre_condition(&always_true(), &none, "ok").is_ok());
        assert!(post_condition(&always_true(), &none, "ok").is_ok());

        assert!(parameter_condition(&always_true(), "x", "ok").is_ok());
        assert!(condition(&always_true(), "x", "ok").is_ok());
        assert!(pre_condition(&always_true(), "x", "ok").is_ok());
        assert!(post_condition(&always_true(), "x", "ok").is_ok());
    }

    #[test]
    fn test_predicate_error_is_not_rewrapped() {
        let err = post_condition(&zero(), &None::<i32>, "unused").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.message().contains("Input number parameter must not be null."));

        let err = pre_condition(&failing("cannot judge"), &1, "unused").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(!err.message().contains("unused"));
    }

    #[test]
    fn test_dispatch_through_trait_objects() {
        let boxed: crate::predicate::BoxedPredicate<Option<String>> = Box::new(blank_string());
        assert!(condition(boxed.as_ref(), &None, "blank").is_ok());
        assert!(condition(boxed.as_ref(), &Some("x".to_string()), "blank").is_err());
    }

    #[test]
    fn test_ensure_passes_value_through() {
        let v = ensure(Some(5), &not_null(), RequirementKind::PreCondition, "present").unwrap();
        assert_eq!(v, Some(5));

        let err = ensure(None::<i32>, &not_null(), RequirementKind::PreCondition, "present")
            .unwrap_err();
        assert!(err.is_pre_condition());
    }

    #[test]
    fn test_present() {
        assert_eq!(present(Some("a"), "m").unwrap(), "a");
        let err = present(None::<&str>, "Class parameter must not be null.").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parameter requirement not verified: Class parameter must not be null."
        );
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn test_failure_is_logged() {
        let _ = condition(&always_false(), &1, "logged requirement");
        assert!(logs_contain("requirement not verified"));
    }
}
