//! String predicates
//!
//! This module provides blankness, emptiness and pattern predicates. Each one
//! judges `str`, `String` and `Option<S>` for any `S: AsRef<str>`.

use regex::Regex;

use super::combinators::{Not, Predicate};
use crate::error::RequirementError;
use crate::requirement::present;

/// Predicate that checks a string is absent or holds only control and space
/// characters (code points up to U+0020).
#[derive(Clone, Copy, Default, Debug)]
pub struct BlankString;

fn is_blank(value: &str) -> bool {
    value.chars().all(|c| c <= ' ')
}

impl Predicate<str> for BlankString {
    #[inline]
    fn apply(&self, value: &str) -> Result<bool, RequirementError> {
        Ok(is_blank(value))
    }
}

impl Predicate<String> for BlankString {
    #[inline]
    fn apply(&self, value: &String) -> Result<bool, RequirementError> {
        Ok(is_blank(value))
    }
}

impl<S: AsRef<str>> Predicate<Option<S>> for BlankString {
    #[inline]
    fn apply(&self, value: &Option<S>) -> Result<bool, RequirementError> {
        Ok(value.as_ref().is_none_or(|s| is_blank(s.as_ref())))
    }
}

/// Create a predicate that checks a string is blank.
///
/// An absent string counts as blank.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(blank_string().apply("   \t").unwrap());
/// assert!(!blank_string().apply("x").unwrap());
/// assert!(blank_string().apply(&None::<String>).unwrap());
/// ```
pub fn blank_string() -> BlankString {
    BlankString
}

/// Create a predicate that checks a string has content beyond control and space characters.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(not_blank_string().apply("x").unwrap());
/// assert!(!not_blank_string().apply(" ").unwrap());
/// ```
pub fn not_blank_string() -> Not<BlankString> {
    Not(BlankString)
}

/// Predicate that checks a string has zero length.
#[derive(Clone, Copy, Default, Debug)]
pub struct EmptyString;

impl Predicate<str> for EmptyString {
    #[inline]
    fn apply(&self, value: &str) -> Result<bool, RequirementError> {
        Ok(value.is_empty())
    }
}

impl Predicate<String> for EmptyString {
    #[inline]
    fn apply(&self, value: &String) -> Result<bool, RequirementError> {
        Ok(value.is_empty())
    }
}

impl<S: AsRef<str>> Predicate<Option<S>> for EmptyString {
    fn apply(&self, value: &Option<S>) -> Result<bool, RequirementError> {
        let value = present(value.as_ref(), "String input parameter must not be null.")?;
        Ok(value.as_ref().is_empty())
    }
}

/// Create a predicate that checks a string is empty.
///
/// Unlike [`blank_string`], an absent string is rejected.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(empty_string().apply("").unwrap());
/// assert!(!empty_string().apply(" ").unwrap());
/// assert!(empty_string().apply(&None::<&str>).is_err());
/// ```
pub fn empty_string() -> EmptyString {
    EmptyString
}

/// Create a predicate that checks a string is not empty.
pub fn not_empty_string() -> Not<EmptyString> {
    Not(EmptyString)
}

/// Predicate that checks a regular expression matches somewhere in a string.
#[derive(Clone, Debug)]
pub struct ContainsPattern {
    pattern: Regex,
}

impl ContainsPattern {
    /// Wrap an already compiled pattern.
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// The pattern being searched for.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    #[inline]
    fn find(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

impl Predicate<str> for ContainsPattern {
    #[inline]
    fn apply(&self, value: &str) -> Result<bool, RequirementError> {
        Ok(self.find(value))
    }
}

impl Predicate<String> for ContainsPattern {
    #[inline]
    fn apply(&self, value: &String) -> Result<bool, RequirementError> {
        Ok(self.find(value))
    }
}

impl<S: AsRef<str>> Predicate<Option<S>> for ContainsPattern {
    fn apply(&self, value: &Option<S>) -> Result<bool, RequirementError> {
        let value = present(value.as_ref(), "CharSequence input parameter must not be null.")?;
        Ok(self.find(value.as_ref()))
    }
}

/// Create a predicate that checks `pattern` is found anywhere in a string.
///
/// This is a search, not a full match: `"ell"` is contained in `"hello"`.
///
/// # Errors
///
/// An invalid-argument error, carrying the regex error as its cause, when
/// `pattern` does not compile.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// let p = contains_pattern(r"\d{3}").unwrap();
/// assert!(p.apply("call 555 now").unwrap());
/// assert!(!p.apply("no digits").unwrap());
///
/// assert!(contains_pattern("(unclosed").unwrap_err().is_invalid_argument());
/// ```
pub fn contains_pattern(pattern: &str) -> Result<ContainsPattern, RequirementError> {
    let compiled = Regex::new(pattern).map_err(|e| {
        RequirementError::invalid_argument(format!("Pattern parameter must compile: {}", pattern))
            .with_cause(e)
    })?;
    Ok(ContainsPattern::new(compiled))
}
