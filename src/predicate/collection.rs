//! Collection predicates
//!
//! This module provides emptiness checks over the standard collections and
//! element-matching predicates that apply an inner predicate to every element.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use super::combinators::{Not, Predicate};
use crate::error::RequirementError;
use crate::requirement::present;

/// A collection whose emptiness can be queried.
///
/// Implemented for the standard collections; implement it for your own
/// containers to use them with [`empty_collection`].
pub trait Collection {
    /// Whether the collection holds no elements.
    fn is_empty_collection(&self) -> bool;
}

macro_rules! impl_collection {
    ($([$($generics:tt)*] $t:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> Collection for $t {
                #[inline]
                fn is_empty_collection(&self) -> bool {
                    self.is_empty()
                }
            }
        )+
    };
}

impl_collection!(
    [T] Vec<T>,
    [T] [T],
    [T] VecDeque<T>,
    [K, V, S] HashMap<K, V, S>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
);

/// Predicate that checks if a collection is empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct EmptyCollection;

impl<C: Collection + ?Sized> Predicate<C> for EmptyCollection {
    #[inline]
    fn apply(&self, value: &C) -> Result<bool, RequirementError> {
        Ok(value.is_empty_collection())
    }
}

impl<C: Collection> Predicate<Option<C>> for EmptyCollection {
    fn apply(&self, value: &Option<C>) -> Result<bool, RequirementError> {
        let value = present(value.as_ref(), "Collection input parameter must not be null.")?;
        Ok(value.is_empty_collection())
    }
}

/// Create a predicate that checks if a collection is empty.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use reqs::predicate::*;
///
/// assert!(empty_collection().apply(&Vec::<i32>::new()).unwrap());
/// assert!(!empty_collection().apply(&vec![1, 2, 3]).unwrap());
/// assert!(empty_collection().apply(&HashMap::<String, u8>::new()).unwrap());
/// assert!(empty_collection().apply(&None::<Vec<i32>>).is_err());
/// ```
pub fn empty_collection() -> EmptyCollection {
    EmptyCollection
}

/// Create a predicate that checks if a collection has at least one element.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(not_empty_collection().apply(&vec![1]).unwrap());
/// assert!(!not_empty_collection().apply(&Vec::<i32>::new()).unwrap());
/// ```
pub fn not_empty_collection() -> Not<EmptyCollection> {
    Not(EmptyCollection)
}

/// How many elements must satisfy the inner predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Matching {
    /// Every element. Vacuously true for an empty collection.
    All,
    /// No element. Vacuously true for an empty collection.
    None,
    /// Exactly one element.
    One,
}

/// Predicate that applies an inner predicate to each element of a sequence.
#[derive(Clone, Copy, Debug)]
pub struct Elements<P> {
    predicate: P,
    matching: Matching,
}

impl<P> Elements<P> {
    /// Create an element-matching predicate.
    pub fn new(predicate: P, matching: Matching) -> Self {
        Self { predicate, matching }
    }

    /// Build from a possibly-absent inner predicate.
    pub fn try_new(predicate: Option<P>, matching: Matching) -> Result<Self, RequirementError> {
        let predicate = present(predicate, "Predicate parameter must not be null.")?;
        Ok(Self::new(predicate, matching))
    }

    /// The required number of matches.
    pub fn matching(&self) -> Matching {
        self.matching
    }

    fn check<T>(&self, items: &[T]) -> Result<bool, RequirementError>
    where
        P: Predicate<T>,
    {
        match self.matching {
            Matching::All => {
                for item in items {
                    if !self.predicate.apply(item)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Matching::None => {
                for item in items {
                    if self.predicate.apply(item)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Matching::One => {
                // every element is judged so a failing one is always reported
                let mut matches = 0usize;
                for item in items {
                    if self.predicate.apply(item)? {
                        matches += 1;
                    }
                }
                Ok(matches == 1)
            }
        }
    }
}

impl<T, P: Predicate<T>> Predicate<[T]> for Elements<P> {
    #[inline]
    fn apply(&self, value: &[T]) -> Result<bool, RequirementError> {
        self.check(value)
    }
}

impl<T, P: Predicate<T>> Predicate<Vec<T>> for Elements<P> {
    #[inline]
    fn apply(&self, value: &Vec<T>) -> Result<bool, RequirementError> {
        self.check(value)
    }
}

impl<T, P: Predicate<T>> Predicate<Option<Vec<T>>> for Elements<P> {
    fn apply(&self, value: &Option<Vec<T>>) -> Result<bool, RequirementError> {
        let items = present(value.as_ref(), "Input collection parameter must not be null.")?;
        self.check(items)
    }
}

/// Create a predicate that checks every element satisfies `predicate`.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(all_elements(strictly_positive()).apply(&vec![1, 2, 3]).unwrap());
/// assert!(!all_elements(strictly_positive()).apply(&vec![1, -2, 3]).unwrap());
/// ```
pub fn all_elements<P>(predicate: P) -> Elements<P> {
    Elements::new(predicate, Matching::All)
}

/// Create a predicate that checks no element satisfies `predicate`.
pub fn no_element<P>(predicate: P) -> Elements<P> {
    Elements::new(predicate, Matching::None)
}

/// Create a predicate that checks exactly one element satisfies `predicate`.
///
/// # Example
///
/// ```rust
/// use reqs::predicate::*;
///
/// assert!(one_element(zero()).apply(&vec![0, 1, 2]).unwrap());
/// assert!(!one_element(zero()).apply(&vec![0, 0, 2]).unwrap());
/// assert!(!one_element(zero()).apply(&vec![1, 2]).unwrap());
/// ```
pub fn one_element<P>(predicate: P) -> Elements<P> {
    Elements::new(predicate, Matching::One)
}
