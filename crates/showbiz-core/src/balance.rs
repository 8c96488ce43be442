//! Date-ranged income/expense aggregation.

use chrono::NaiveDate;
use showbiz_domain::{DateRange, FinanceRecord, RecordKind};

use crate::CoreError;

/// Totals for one inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceSummary {
    pub range: DateRange,
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    pub record_count: usize,
}

pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Income minus expense over records dated within `start..=end`.
    pub fn compute_balance<'a, I>(
        records: I,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<f64, CoreError>
    where
        I: IntoIterator<Item = &'a FinanceRecord>,
    {
        let range = DateRange::new(start, end).map_err(|err| {
            tracing::warn!(%start, %end, "invalid balance range");
            CoreError::from(err)
        })?;
        Ok(Self::summarize(records, range).balance)
    }

    pub fn summarize<'a, I>(records: I, range: DateRange) -> BalanceSummary
    where
        I: IntoIterator<Item = &'a FinanceRecord>,
    {
        let mut income = 0.0;
        let mut expense = 0.0;
        let mut record_count = 0;
        for record in records
            .into_iter()
            .filter(|record| range.contains(record.date()))
        {
            match record.kind() {
                RecordKind::Income => income += record.amount(),
                RecordKind::Expense => expense += record.amount(),
            }
            record_count += 1;
        }
        let balance = income - expense;
        tracing::info!(%range, income, expense, balance, "balance calculated");
        BalanceSummary {
            range,
            income,
            expense,
            balance,
            record_count,
        }
    }
}
