use showbiz_domain::{FinanceRecord, Identifiable};

/// Insertion-ordered, in-memory collection of finance records.
///
/// Only [`append`](RecordStore::append) and [`replace_all`](RecordStore::replace_all)
/// mutate it. Wrap it in a mutex when sharing across threads.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<FinanceRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<FinanceRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: FinanceRecord) {
        tracing::debug!(id = %record.id(), "record appended");
        self.records.push(record);
    }

    /// Owned copy of the records in insertion order.
    pub fn snapshot(&self) -> Vec<FinanceRecord> {
        self.records.clone()
    }

    pub fn replace_all(&mut self, records: Vec<FinanceRecord>) {
        tracing::debug!(previous = self.records.len(), next = records.len(), "store replaced");
        self.records = records;
    }

    pub fn iter(&self) -> impl Iterator<Item = &FinanceRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[FinanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
