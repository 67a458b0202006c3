//! Composable predicates
//!
//! A [`Predicate`] judges a value and answers `Ok(true)`, `Ok(false)`, or an
//! invalid-argument error when it cannot judge the input at all (typically an
//! absent value it does not accept). Predicates compose with `and`, `or`,
//! `xor` and `not`, either through [`PredicateExt`] methods or the free
//! functions of the same names.
//!
//! Leaf predicates are grouped by the kind of value they inspect:
//!
//! - objects: constants, presence, equality, type instances, booleans
//! - strings: blankness, emptiness, pattern search
//! - numbers: sign
//! - date-times: past and future
//! - files: file system attributes
//! - collections: emptiness and element matching
//!
//! # Example
//!
//! ```rust
//! use reqs::predicate::*;
//!
//! let username = not_blank_string().and(contains_pattern("^[a-z_]+$").unwrap());
//! assert!(username.apply("john_doe").unwrap());
//! assert!(!username.apply("John Doe").unwrap());
//!
//! // absence is modelled with Option
//! assert!(!not_null().apply(&None::<String>).unwrap());
//! assert!(empty_string().apply(&None::<String>).is_err());
//! ```

mod collection;
mod combinators;
mod datetime;
mod file;
mod number;
mod object;
mod string;

pub mod prelude;

// Re-export core trait
pub use combinators::{from_fn, BoxedPredicate, FromFn, Predicate, PredicateExt, SharedPredicate};

// Re-export combinator types
pub use combinators::{and, nand, nor, not, or, xor, And, Not, Or, Xor};

// Re-export object predicates
pub use object::{
    all_instance_of, always_false, always_true, equal_to, instance_of, is_false, is_null, is_true,
    not_null, AllInstanceOf, AlwaysTrue, EqualTo, InstanceOf, IsBool, IsNull,
};

// Re-export string predicates
pub use string::{
    blank_string, contains_pattern, empty_string, not_blank_string, not_empty_string, BlankString,
    ContainsPattern, EmptyString,
};

// Re-export number predicates
pub use number::{
    even, negative, odd, positive, strictly_negative, strictly_positive, zero, Number, Parity, Sign,
};

// Re-export date-time predicates
pub use datetime::{future, past, Temporal};

// Re-export file predicates
pub use file::{
    executable_file, existing_file, hidden_file, is_directory, is_file, readable_file,
    writeable_file, FileAttribute,
};

// Re-export collection predicates
pub use collection::{
    all_elements, empty_collection, no_element, not_empty_collection, one_element, Collection,
    Elements, EmptyCollection, Matching,
};
