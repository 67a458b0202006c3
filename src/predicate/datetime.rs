//! Date-time predicates
//!
//! Compare an instant against the current system clock. Both `chrono`
//! date-times (in any time zone) and `std::time::SystemTime` are accepted.

use std::cmp::Ordering;
use std::time::SystemTime;

use chrono::{DateTime, TimeZone, Utc};

use super::combinators::Predicate;
use crate::error::RequirementError;
use crate::requirement::present;

const NULL_DATE_TIME: &str = "Date-time input parameter must not be null.";

/// Position of an instant relative to now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Temporal {
    /// Strictly before now.
    Past,
    /// Strictly after now.
    Future,
}

impl Temporal {
    fn accepts(self, relative_to_now: Ordering) -> bool {
        match self {
            Temporal::Past => relative_to_now.is_lt(),
            Temporal::Future => relative_to_now.is_gt(),
        }
    }

    fn check_date_time<Tz: TimeZone>(self, value: &DateTime<Tz>) -> bool {
        self.accepts(value.with_timezone(&Utc).cmp(&Utc::now()))
    }

    fn check_system_time(self, value: &SystemTime) -> bool {
        self.accepts(value.cmp(&SystemTime::now()))
    }
}

impl<Tz: TimeZone> Predicate<DateTime<Tz>> for Temporal {
    #[inline]
    fn apply(&self, value: &DateTime<Tz>) -> Result<bool, RequirementError> {
        Ok(self.check_date_time(value))
    }
}

impl<Tz: TimeZone> Predicate<Option<DateTime<Tz>>> for Temporal {
    fn apply(&self, value: &Option<DateTime<Tz>>) -> Result<bool, RequirementError> {
        let value = present(value.as_ref(), NULL_DATE_TIME)?;
        Ok(self.check_date_time(value))
    }
}

impl Predicate<SystemTime> for Temporal {
    #[inline]
    fn apply(&self, value: &SystemTime) -> Result<bool, RequirementError> {
        Ok(self.check_system_time(value))
    }
}

impl Predicate<Option<SystemTime>> for Temporal {
    fn apply(&self, value: &Option<SystemTime>) -> Result<bool, RequirementError> {
        let value = present(value.as_ref(), NULL_DATE_TIME)?;
        Ok(self.check_system_time(value))
    }
}

/// Create a predicate that checks an instant is before now.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use reqs::predicate::*;
///
/// assert!(past().apply(&(Utc::now() - Duration::days(1))).unwrap());
/// assert!(!past().apply(&(Utc::now() + Duration::days(1))).unwrap());
/// ```
pub fn past() -> Temporal {
    Temporal::Past
}

/// Create a predicate that checks an instant is after now.
pub fn future() -> Temporal {
    Temporal::Future
}
