//! Requirement error taxonomy
//!
//! Every failure in this crate is a [`RequirementError`]: a tagged
//! [`RequirementKind`], the rendered message, and an optional cause.
//!
//! # Example
//!
//! ```rust
//! use reqs::{RequirementError, RequirementKind};
//!
//! let err = RequirementError::new(RequirementKind::PreCondition, "connection must be open");
//! assert_eq!(err.to_string(), "Pre-condition not verified: connection must be open");
//! assert!(err.kind().is_requirement());
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// The category of a failed requirement.
///
/// `PreCondition` and `PostCondition` are specializations of `Requirement`:
/// [`is_requirement`](Self::is_requirement) holds for all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RequirementKind {
    /// A caller passed a disallowed value to a predicate or function.
    InvalidArgument,
    /// A runtime invariant did not hold.
    Requirement,
    /// State was invalid before an operation.
    PreCondition,
    /// State was invalid after an operation.
    PostCondition,
    /// The operation exists but is explicitly not implemented.
    Unsupported,
}

impl RequirementKind {
    /// Human-readable category used as the message prefix.
    pub fn category(self) -> &'static str {
        match self {
            Self::InvalidArgument => "Parameter requirement",
            Self::Requirement => "Requirement",
            Self::PreCondition => "Pre-condition",
            Self::PostCondition => "Post-condition",
            Self::Unsupported => "Operation",
        }
    }

    /// Returns true for `Requirement` and its pre/post-condition specializations.
    pub fn is_requirement(self) -> bool {
        matches!(
            self,
            Self::Requirement | Self::PreCondition | Self::PostCondition
        )
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Error raised when a predicate-backed requirement does not hold.
///
/// The message is rendered once at construction:
/// `"<category> not verified: <detail>"` for the dispatch kinds and
/// `"Unsupported operation: <detail>"` for [`RequirementKind::Unsupported`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct RequirementError {
    kind: RequirementKind,
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl RequirementError {
    /// Create an error of the given kind from a detail message.
    pub fn new(kind: RequirementKind, detail: impl AsRef<str>) -> Self {
        let message = match kind {
            RequirementKind::Unsupported => format!("Unsupported operation: {}", detail.as_ref()),
            _ => format!("{} not verified: {}", kind.category(), detail.as_ref()),
        };
        Self {
            kind,
            message,
            cause: None,
        }
    }

    /// Shorthand for an [`RequirementKind::InvalidArgument`] error.
    pub fn invalid_argument(detail: impl AsRef<str>) -> Self {
        Self::new(RequirementKind::InvalidArgument, detail)
    }

    /// Shorthand for a [`RequirementKind::Requirement`] error.
    pub fn requirement(detail: impl AsRef<str>) -> Self {
        Self::new(RequirementKind::Requirement, detail)
    }

    /// Shorthand for a [`RequirementKind::PreCondition`] error.
    pub fn pre_condition(detail: impl AsRef<str>) -> Self {
        Self::new(RequirementKind::PreCondition, detail)
    }

    /// Shorthand for a [`RequirementKind::PostCondition`] error.
    pub fn post_condition(detail: impl AsRef<str>) -> Self {
        Self::new(RequirementKind::PostCondition, detail)
    }

    /// Shorthand for an [`RequirementKind::Unsupported`] error.
    pub fn unsupported(detail: impl AsRef<str>) -> Self {
        Self::new(RequirementKind::Unsupported, detail)
    }

    /// Attach an underlying cause, exposed through `Error::source`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::error::Error;
    /// use reqs::RequirementError;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    /// let err = RequirementError::invalid_argument("config path").with_cause(io);
    /// assert!(err.source().is_some());
    /// ```
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// The error category.
    pub fn kind(&self) -> RequirementKind {
        self.kind
    }

    /// The full rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying cause, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns true if this is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind == RequirementKind::InvalidArgument
    }

    /// Returns true for a generic requirement failure or one of its specializations.
    pub fn is_requirement(&self) -> bool {
        self.kind.is_requirement()
    }

    /// Returns true if this is a pre-condition failure.
    pub fn is_pre_condition(&self) -> bool {
        self.kind == RequirementKind::PreCondition
    }

    /// Returns true if this is a post-condition failure.
    pub fn is_post_condition(&self) -> bool {
        self.kind == RequirementKind::PostCondition
    }

    /// Returns true if the failing operation is not implemented.
    pub fn is_unsupported(&self) -> bool {
        self.kind == RequirementKind::Unsupported
    }
}
