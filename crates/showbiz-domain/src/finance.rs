//! Domain models for income/expense ledger entries.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::*,
    error::{ParseError, ValidationError},
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Classifies a ledger entry as money coming in or going out.
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Income, RecordKind::Expense];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Income => "INCOME",
            RecordKind::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Ok(RecordKind::Income),
            "EXPENSE" => Ok(RecordKind::Expense),
            _ => Err(ParseError::UnknownKind(value.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Secondary classification tag attached to every finance record.
///
/// Names are prefixed with the kind they conventionally pair with; the
/// record constructor does not enforce that pairing.
pub enum Category {
    IncomeTicketSales,
    IncomeSponsorships,
    IncomeContractFees,
    IncomeMerchandise,
    IncomeStreaming,
    IncomeSalary,
    IncomeBusiness,
    IncomeOther,
    ExpenseArtistFees,
    ExpenseVenueRental,
    ExpenseMarketing,
    ExpenseStaff,
    ExpenseTechnical,
    ExpenseLogistics,
    ExpenseFood,
    ExpenseRent,
    ExpenseSport,
    ExpenseOther,
}

impl Category {
    pub const ALL: [Category; 18] = [
        Category::IncomeTicketSales,
        Category::IncomeSponsorships,
        Category::IncomeContractFees,
        Category::IncomeMerchandise,
        Category::IncomeStreaming,
        Category::IncomeSalary,
        Category::IncomeBusiness,
        Category::IncomeOther,
        Category::ExpenseArtistFees,
        Category::ExpenseVenueRental,
        Category::ExpenseMarketing,
        Category::ExpenseStaff,
        Category::ExpenseTechnical,
        Category::ExpenseLogistics,
        Category::ExpenseFood,
        Category::ExpenseRent,
        Category::ExpenseSport,
        Category::ExpenseOther,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::IncomeTicketSales => "INCOME_TICKET_SALES",
            Category::IncomeSponsorships => "INCOME_SPONSORSHIPS",
            Category::IncomeContractFees => "INCOME_CONTRACT_FEES",
            Category::IncomeMerchandise => "INCOME_MERCHANDISE",
            Category::IncomeStreaming => "INCOME_STREAMING",
            Category::IncomeSalary => "INCOME_SALARY",
            Category::IncomeBusiness => "INCOME_BUSINESS",
            Category::IncomeOther => "INCOME_OTHER",
            Category::ExpenseArtistFees => "EXPENSE_ARTIST_FEES",
            Category::ExpenseVenueRental => "EXPENSE_VENUE_RENTAL",
            Category::ExpenseMarketing => "EXPENSE_MARKETING",
            Category::ExpenseStaff => "EXPENSE_STAFF",
            Category::ExpenseTechnical => "EXPENSE_TECHNICAL",
            Category::ExpenseLogistics => "EXPENSE_LOGISTICS",
            Category::ExpenseFood => "EXPENSE_FOOD",
            Category::ExpenseRent => "EXPENSE_RENT",
            Category::ExpenseSport => "EXPENSE_SPORT",
            Category::ExpenseOther => "EXPENSE_OTHER",
        }
    }

    /// Kind implied by the category's name prefix.
    pub fn kind(self) -> RecordKind {
        if self.as_str().starts_with("INCOME_") {
            RecordKind::Income
        } else {
            RecordKind::Expense
        }
    }

    pub fn matches(self, kind: RecordKind) -> bool {
        self.kind() == kind
    }

    /// Categories conventionally offered for `kind`.
    pub fn for_kind(kind: RecordKind) -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(move |cat| cat.matches(kind))
    }

    /// Catch-all bucket for `kind`.
    pub fn fallback_for(kind: RecordKind) -> Category {
        match kind {
            RecordKind::Income => Category::IncomeOther,
            RecordKind::Expense => Category::ExpenseOther,
        }
    }

    /// Parses `value`, substituting the catch-all bucket for `kind` when the
    /// tag is unknown. Callers opt into this policy explicitly.
    pub fn parse_or_fallback(value: &str, kind: RecordKind) -> Category {
        value.parse().unwrap_or_else(|err: ParseError| {
            let fallback = Category::fallback_for(kind);
            tracing::warn!(%err, %fallback, "using fallback category");
            fallback
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|cat| cat.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownCategory(value.trim().to_string()))
    }
}

/// A validated income or expense entry.
///
/// Everything except `amount` is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceRecord {
    id: Uuid,
    kind: RecordKind,
    amount: f64,
    description: String,
    date: NaiveDate,
    category: Category,
}

impl FinanceRecord {
    /// Validates the inputs against `today` and assigns a fresh identifier.
    pub fn new(
        kind: RecordKind,
        amount: f64,
        description: impl Into<String>,
        date: NaiveDate,
        category: Category,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        RecordDraft {
            kind: Some(kind),
            amount,
            description: Some(description.into()),
            date: Some(date),
            category: Some(category),
        }
        .build(today)
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Replaces the amount; the previous value is kept when validation fails.
    pub fn set_amount(&mut self, amount: f64) -> Result<(), ValidationError> {
        validate_amount(amount)?;
        self.amount = amount;
        Ok(())
    }

    /// Compares every field except the identifier.
    pub fn same_entry(&self, other: &FinanceRecord) -> bool {
        self.kind == other.kind
            && self.amount == other.amount
            && self.description == other.description
            && self.date == other.date
            && self.category == other.category
    }

    /// Signed contribution to a balance: positive for income.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            RecordKind::Income => self.amount,
            RecordKind::Expense => -self.amount,
        }
    }
}

impl Identifiable for FinanceRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for FinanceRecord {
    fn display_label(&self) -> String {
        format!(
            "{} {} {:.2} {} [{}]",
            self.date, self.kind, self.amount, self.description, self.category
        )
    }
}

/// Loosely-typed record input, as gathered from a form or a parsed line.
///
/// Missing fields surface as the matching [`ValidationError`] in the fixed
/// rule order: kind, amount, description, date, category.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub kind: Option<RecordKind>,
    pub amount: f64,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub category: Option<Category>,
}

impl RecordDraft {
    pub fn build(self, today: NaiveDate) -> Result<FinanceRecord, ValidationError> {
        let kind = self.kind.ok_or_else(|| {
            tracing::warn!("record kind missing");
            ValidationError::InvalidKind
        })?;
        validate_amount(self.amount)?;
        let description = self.description.unwrap_or_default();
        require_text(&description, ValidationError::InvalidDescription)?;
        let date = match self.date {
            Some(date) if date <= today => date,
            other => {
                tracing::warn!(date = ?other, %today, "date cannot be in the future");
                return Err(ValidationError::InvalidDate);
            }
        };
        let category = self.category.ok_or_else(|| {
            tracing::warn!("category missing");
            ValidationError::InvalidCategory
        })?;

        Ok(FinanceRecord {
            id: Uuid::new_v4(),
            kind,
            amount: self.amount,
            description,
            date,
            category,
        })
    }
}

fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    // NaN fails the comparison as well.
    if !(amount > 0.0) || !amount.is_finite() {
        tracing::warn!(amount, "amount must be greater than 0");
        return Err(ValidationError::InvalidAmount);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn salary() -> FinanceRecord {
        FinanceRecord::new(
            RecordKind::Income,
            1000.0,
            "Salary",
            today(),
            Category::IncomeSalary,
            today(),
        )
        .expect("valid record")
    }

    #[test]
    fn valid_record_keeps_inputs() {
        let record = salary();
        assert_eq!(record.kind(), RecordKind::Income);
        assert_eq!(record.amount(), 1000.0);
        assert_eq!(record.description(), "Salary");
        assert_eq!(record.date(), today());
        assert_eq!(record.category(), Category::IncomeSalary);
        assert!(!record.id().is_nil());
    }

    #[test]
    fn identical_inputs_get_distinct_ids() {
        let first = salary();
        let second = salary();
        assert_ne!(first.id(), second.id());
        assert_ne!(first, second);
        assert!(first.same_entry(&second));
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        for amount in [0.0, -500.0, f64::NAN, f64::INFINITY] {
            let err = FinanceRecord::new(
                RecordKind::Expense,
                amount,
                "Rent",
                today(),
                Category::ExpenseRent,
                today(),
            )
            .unwrap_err();
            assert_eq!(err, ValidationError::InvalidAmount);
        }
    }

    #[test]
    fn blank_description_is_rejected() {
        for description in ["", "   ", "\t"] {
            let err = FinanceRecord::new(
                RecordKind::Income,
                500.0,
                description,
                today(),
                Category::IncomeOther,
                today(),
            )
            .unwrap_err();
            assert_eq!(err, ValidationError::InvalidDescription);
        }
    }

    #[test]
    fn future_date_is_rejected_but_today_is_accepted() {
        let tomorrow = today() + Duration::days(1);
        let err = FinanceRecord::new(
            RecordKind::Income,
            500.0,
            "Future Salary",
            tomorrow,
            Category::IncomeOther,
            today(),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate);
        assert_eq!(err.to_string(), "date cannot be in the future");
    }

    #[test]
    fn draft_reports_first_failing_rule() {
        let err = RecordDraft::default().build(today()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidKind);

        let err = RecordDraft {
            kind: Some(RecordKind::Income),
            amount: -1.0,
            description: None,
            ..RecordDraft::default()
        }
        .build(today())
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidAmount);

        let err = RecordDraft {
            kind: Some(RecordKind::Income),
            amount: 100.0,
            description: Some("Gift".into()),
            date: Some(today()),
            category: None,
        }
        .build(today())
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidCategory);

        let err = RecordDraft {
            kind: Some(RecordKind::Income),
            amount: 100.0,
            description: Some("Gift".into()),
            date: None,
            category: Some(Category::IncomeOther),
        }
        .build(today())
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate);
    }

    #[test]
    fn set_amount_revalidates() {
        let mut record = FinanceRecord::new(
            RecordKind::Expense,
            50.0,
            "Lunch",
            today(),
            Category::ExpenseFood,
            today(),
        )
        .unwrap();
        record.set_amount(75.5).unwrap();
        assert_eq!(record.amount(), 75.5);
        assert_eq!(record.set_amount(0.0), Err(ValidationError::InvalidAmount));
        assert_eq!(record.amount(), 75.5);
    }

    #[test]
    fn mismatched_category_is_not_rejected_by_constructor() {
        let record = FinanceRecord::new(
            RecordKind::Expense,
            10.0,
            "Odd pairing",
            today(),
            Category::IncomeSalary,
            today(),
        )
        .expect("pairing is a caller policy");
        assert!(!record.category().matches(record.kind()));
    }

    #[test]
    fn categories_split_by_prefix() {
        let income: Vec<_> = Category::for_kind(RecordKind::Income).collect();
        let expense: Vec<_> = Category::for_kind(RecordKind::Expense).collect();
        assert_eq!(income.len() + expense.len(), Category::ALL.len());
        assert!(income.iter().all(|c| c.as_str().starts_with("INCOME_")));
        assert!(expense.iter().all(|c| c.as_str().starts_with("EXPENSE_")));
    }

    #[test]
    fn category_parsing_is_explicit_about_fallback() {
        assert_eq!(
            "expense_rent".parse::<Category>(),
            Ok(Category::ExpenseRent)
        );
        assert_eq!(
            "bogus".parse::<Category>(),
            Err(ParseError::UnknownCategory("bogus".into()))
        );
        assert_eq!(
            Category::parse_or_fallback("bogus", RecordKind::Income),
            Category::IncomeOther
        );
        assert_eq!(
            Category::parse_or_fallback("bogus", RecordKind::Expense),
            Category::ExpenseOther
        );
    }

    #[test]
    fn kind_round_trips_through_text() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.to_string().parse::<RecordKind>(), Ok(kind));
        }
        assert!(" income ".parse::<RecordKind>().is_ok());
        assert!("transfer".parse::<RecordKind>().is_err());
    }

    #[test]
    fn category_serializes_with_upper_snake_names() {
        let json = serde_json::to_string(&Category::ExpenseVenueRental).unwrap();
        assert_eq!(json, "\"EXPENSE_VENUE_RENTAL\"");
    }
}
