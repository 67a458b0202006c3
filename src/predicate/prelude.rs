//! Predicate prelude for convenient imports
//!
//! This module re-exports the predicate trait, the combinators and the most
//! commonly used leaf factories.
//!
//! # Example
//!
//! ```rust
//! use reqs::predicate::prelude::*;
//!
//! let valid_count = positive().and(not(zero()));
//! assert!(valid_count.apply(&3).unwrap());
//! assert!(!valid_count.apply(&0).unwrap());
//! ```

// Core trait
pub use super::combinators::{from_fn, Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{and, not, or, xor, And, Not, Or, Xor};

// Object predicates
pub use super::object::{always_false, always_true, equal_to, is_false, is_null, is_true, not_null};

// String predicates
pub use super::string::{
    blank_string, contains_pattern, empty_string, not_blank_string, not_empty_string,
};

// Number predicates
pub use super::number::{negative, positive, strictly_negative, strictly_positive, zero};

// Collection predicates
pub use super::collection::{
    all_elements, empty_collection, no_element, not_empty_collection, one_element,
};
