//! Shared traits, date ranges and text helpers for record-keeping primitives.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RangeError, ValidationError};

/// Exposes a stable identifier for entities held by the managers.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Inclusive reporting range used by balance calculations.
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Single-day range.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// True when `value` is empty after trimming.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn require_text(value: &str, err: ValidationError) -> Result<(), ValidationError> {
    if is_blank(value) {
        tracing::warn!(error = %err, "rejected blank field");
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_includes_both_bounds() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
        assert!(range.contains(date(2025, 1, 1)));
        assert!(range.contains(date(2025, 1, 31)));
        assert!(!range.contains(date(2024, 12, 31)));
        assert!(!range.contains(date(2025, 2, 1)));
    }

    #[test]
    fn range_accepts_equal_bounds() {
        let range = DateRange::new(date(2025, 3, 3), date(2025, 3, 3)).unwrap();
        assert_eq!(range, DateRange::day(date(2025, 3, 3)));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = DateRange::new(date(2025, 2, 1), date(2025, 1, 1)).unwrap_err();
        assert_eq!(err, RangeError::InvalidRange);
        assert_eq!(err.to_string(), "start date cannot be after end date");
    }
}
