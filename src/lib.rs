//! # Reqs
//!
//! Design-by-contract requirements and composable predicates.
//!
//! A [`Predicate`](predicate::Predicate) judges a value. Predicates compose
//! with AND, OR, XOR and NOT, and the requirement functions turn a predicate
//! that does not hold into a categorized [`RequirementError`]:
//!
//! - [`parameter_condition`](requirement::parameter_condition): a caller passed a bad argument
//! - [`condition`](requirement::condition): a runtime invariant broke
//! - [`pre_condition`](requirement::pre_condition) /
//!   [`post_condition`](requirement::post_condition): state was wrong before or after an operation
//!
//! ## Quick Example
//!
//! ```rust
//! use reqs::prelude::*;
//!
//! fn withdraw(balance: i64, amount: i64) -> Result<i64, RequirementError> {
//!     parameter_condition(&strictly_positive(), &amount, "amount must be above zero")?;
//!     pre_condition(&positive(), &balance, "balance must not be overdrawn")?;
//!     let remaining = balance - amount;
//!     post_condition(&positive(), &remaining, "withdrawal must not overdraw")?;
//!     Ok(remaining)
//! }
//!
//! assert_eq!(withdraw(100, 30).unwrap(), 70);
//! assert!(withdraw(100, 0).unwrap_err().is_invalid_argument());
//! assert!(withdraw(10, 30).unwrap_err().is_post_condition());
//! ```
//!
//! ## Sharing predicate instances
//!
//! [`PredicateCache`](cache::PredicateCache) hands out shared instances of
//! parameterized and composite predicates, holding them weakly so unused
//! ones are reclaimed.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for failed requirements and cache activity
//! - `serde`: derive `Serialize`/`Deserialize` for error kinds and constraint violations

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod adapter;
pub mod cache;
pub mod error;
pub mod predicate;
pub mod requirement;
pub mod testing;

// Re-exports
pub use cache::{CacheKey, PredicateCache};
pub use error::{RequirementError, RequirementKind};
pub use predicate::{Predicate, PredicateExt};
pub use requirement::{condition, parameter_condition, post_condition, pre_condition};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cache::PredicateCache;
    pub use crate::error::{RequirementError, RequirementKind};
    pub use crate::predicate::prelude::*;
    pub use crate::requirement::{
        condition, ensure, parameter_condition, post_condition, pre_condition, present,
    };
}
