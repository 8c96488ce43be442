use std::path::Path;

use chrono::NaiveDate;
use showbiz_domain::{
    Category, DateRange, Displayable, FinanceRecord, Identifiable, RecordDraft, RecordKind,
    ValidationError,
};
use uuid::Uuid;

use crate::{
    storage::{RecordStorage, SaveOutcome},
    BalanceCalculator, BalanceSummary, Clock, CoreError, RecordStore,
};

/// Owns the finance record store and applies ledger policies on top of it.
pub struct FinanceService {
    store: RecordStore,
    clock: Box<dyn Clock>,
    enforce_category_kind: bool,
}

impl FinanceService {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            store: RecordStore::new(),
            clock,
            enforce_category_kind: false,
        }
    }

    /// When enabled, a category whose prefix disagrees with the record kind is rejected.
    pub fn with_category_kind_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_category_kind = enforce;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn records(&self) -> Vec<FinanceRecord> {
        self.store.snapshot()
    }

    pub fn add_record(
        &mut self,
        kind: RecordKind,
        amount: f64,
        description: &str,
        date: NaiveDate,
        category: Category,
    ) -> Result<Uuid, CoreError> {
        self.add_draft(RecordDraft {
            kind: Some(kind),
            amount,
            description: Some(description.to_string()),
            date: Some(date),
            category: Some(category),
        })
    }

    pub fn add_draft(&mut self, draft: RecordDraft) -> Result<Uuid, CoreError> {
        if self.enforce_category_kind {
            if let (Some(kind), Some(category)) = (draft.kind, draft.category) {
                if !category.matches(kind) {
                    tracing::warn!(%kind, %category, "category does not match record kind");
                    return Err(ValidationError::CategoryKindMismatch {
                        kind: kind.to_string(),
                        category: category.to_string(),
                    }
                    .into());
                }
            }
        }
        let record = draft.build(self.clock.today())?;
        let id = record.id();
        tracing::info!(record = %record.display_label(), "new record added");
        self.store.append(record);
        Ok(id)
    }

    pub fn compute_balance(&self, start: NaiveDate, end: NaiveDate) -> Result<f64, CoreError> {
        BalanceCalculator::compute_balance(self.store.iter(), start, end)
    }

    pub fn summarize(&self, range: DateRange) -> BalanceSummary {
        BalanceCalculator::summarize(self.store.iter(), range)
    }

    pub fn save(&self, storage: &dyn RecordStorage, path: &Path) -> Result<SaveOutcome, CoreError> {
        let outcome = storage.save_records(path, self.store.as_slice())?;
        match &outcome {
            SaveOutcome::NothingToSave => {
                tracing::warn!("the financial records list is empty; nothing will be saved")
            }
            SaveOutcome::Written { path, count } => {
                tracing::info!(path = %path.display(), count, "financial records saved")
            }
        }
        Ok(outcome)
    }

    /// Replaces the store with the file contents. The store is left untouched on any error.
    pub fn load(&mut self, storage: &dyn RecordStorage, path: &Path) -> Result<LoadSummary, CoreError> {
        let report = storage.load_records(path, self.clock.today())?;
        let summary = LoadSummary {
            loaded: report.records.len(),
            skipped: report.skipped,
        };
        tracing::info!(
            path = %path.display(),
            loaded = summary.loaded,
            skipped = summary.skipped,
            "financial records loaded"
        );
        self.store.replace_all(report.records);
        Ok(summary)
    }
}

/// Counts reported after a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}
