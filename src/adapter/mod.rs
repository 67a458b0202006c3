//! Adapters to external validation engines and predicate functions.
//!
//! - [`validator`]: constraint validators reporting violations
//! - [`foreign`]: boolean functions from other libraries

pub mod foreign;
pub mod validator;

pub use foreign::{try_wrap, wrap, wrap_copied, Foreign, ForeignCopied};
pub use validator::{ConstraintViolation, SelfValidating, Validate, Validator, ValidatorPredicate};
