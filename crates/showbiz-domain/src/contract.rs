//! Artist agreements with validity windows.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{common::*, error::ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    id: Uuid,
    artist_name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    terms: String,
}

impl Contract {
    pub fn new(
        artist_name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        terms: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (artist_name, terms) = (artist_name.into(), terms.into());
        require_text(&artist_name, ValidationError::InvalidName("artist name"))?;
        validate_period(start_date, end_date)?;
        require_text(&terms, ValidationError::InvalidTerms)?;
        Ok(Self {
            id: Uuid::new_v4(),
            artist_name,
            start_date,
            end_date,
            terms,
        })
    }

    pub fn artist_name(&self) -> &str {
        &self.artist_name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn terms(&self) -> &str {
        &self.terms
    }

    pub fn set_artist_name(&mut self, artist_name: impl Into<String>) -> Result<(), ValidationError> {
        let artist_name = artist_name.into();
        require_text(&artist_name, ValidationError::InvalidName("artist name"))?;
        self.artist_name = artist_name;
        Ok(())
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) -> Result<(), ValidationError> {
        validate_period(start_date, self.end_date)?;
        self.start_date = start_date;
        Ok(())
    }

    pub fn set_end_date(&mut self, end_date: NaiveDate) -> Result<(), ValidationError> {
        validate_period(self.start_date, end_date)?;
        self.end_date = end_date;
        Ok(())
    }

    pub fn set_terms(&mut self, terms: impl Into<String>) -> Result<(), ValidationError> {
        let terms = terms.into();
        require_text(&terms, ValidationError::InvalidTerms)?;
        self.terms = terms;
        Ok(())
    }

    pub fn is_active(&self, today: NaiveDate) -> bool {
        today >= self.start_date && today <= self.end_date
    }

    /// Days left until `end_date`, counted from the start date when the
    /// contract has not begun yet. Negative once expired.
    pub fn days_until_expiration(&self, today: NaiveDate) -> i64 {
        let reference = today.max(self.start_date);
        (self.end_date - reference).num_days()
    }
}

fn validate_period(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if start > end {
        tracing::warn!(%start, %end, "contract period inverted");
        return Err(ValidationError::InvalidContractPeriod);
    }
    Ok(())
}

impl Identifiable for Contract {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Contract {
    fn name(&self) -> &str {
        &self.artist_name
    }
}

impl Displayable for Contract {
    fn display_label(&self) -> String {
        format!(
            "{} ({} .. {}): {}",
            self.artist_name, self.start_date, self.end_date, self.terms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Contract {
        Contract::new("Nina", date(2025, 1, 1), date(2025, 12, 31), "Two shows").unwrap()
    }

    #[test]
    fn rejects_inverted_period_and_blank_fields() {
        assert_eq!(
            Contract::new("Nina", date(2025, 2, 1), date(2025, 1, 1), "Terms"),
            Err(ValidationError::InvalidContractPeriod)
        );
        assert_eq!(
            Contract::new(" ", date(2025, 1, 1), date(2025, 1, 1), "Terms"),
            Err(ValidationError::InvalidName("artist name"))
        );
        assert_eq!(
            Contract::new("Nina", date(2025, 1, 1), date(2025, 1, 1), ""),
            Err(ValidationError::InvalidTerms)
        );
    }

    #[test]
    fn setters_keep_period_valid() {
        let mut contract = sample();
        assert!(contract.set_end_date(date(2024, 12, 31)).is_err());
        assert_eq!(contract.end_date(), date(2025, 12, 31));
        contract.set_start_date(date(2025, 6, 1)).unwrap();
        assert_eq!(contract.start_date(), date(2025, 6, 1));
        assert!(contract.set_terms("  ").is_err());
    }

    #[test]
    fn activity_includes_both_ends() {
        let contract = sample();
        assert!(contract.is_active(date(2025, 1, 1)));
        assert!(contract.is_active(date(2025, 12, 31)));
        assert!(!contract.is_active(date(2026, 1, 1)));
    }

    #[test]
    fn expiration_counts_from_start_when_not_begun() {
        let contract = sample();
        assert_eq!(contract.days_until_expiration(date(2024, 6, 1)), 364);
        assert_eq!(contract.days_until_expiration(date(2025, 12, 1)), 30);
        assert_eq!(contract.days_until_expiration(date(2026, 1, 2)), -2);
    }
}
