use chrono::{Days, NaiveDate};
use showbiz_domain::{Contract, Identifiable};
use uuid::Uuid;

use crate::CoreError;

/// Window used when no explicit horizon is configured.
pub const DEFAULT_EXPIRY_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Default)]
pub struct ContractManager {
    contracts: Vec<Contract>,
}

impl ContractManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_contract(&mut self, contract: Contract) -> Result<Uuid, CoreError> {
        let id = contract.id();
        if self.contracts.iter().any(|contract| contract.id() == id) {
            return Err(CoreError::Duplicate {
                kind: "contract",
                id,
            });
        }
        tracing::info!(%id, artist = contract.artist_name(), "contract added");
        self.contracts.push(contract);
        Ok(id)
    }

    pub fn contract(&self, id: Uuid) -> Result<&Contract, CoreError> {
        self.contracts
            .iter()
            .find(|contract| contract.id() == id)
            .ok_or(CoreError::NotFound {
                kind: "contract",
                id,
            })
    }

    pub fn contract_mut(&mut self, id: Uuid) -> Result<&mut Contract, CoreError> {
        self.contracts
            .iter_mut()
            .find(|contract| contract.id() == id)
            .ok_or(CoreError::NotFound {
                kind: "contract",
                id,
            })
    }

    pub fn contracts(&self) -> Vec<Contract> {
        self.contracts.clone()
    }

    /// Contracts ending within the next `days` days, today included.
    pub fn expiring_within(&self, today: NaiveDate, days: u32) -> Vec<&Contract> {
        if days == 0 {
            return Vec::new();
        }
        // Windows reaching past the calendar's end are clamped to its last day.
        let last_day = today
            .checked_add_days(Days::new(u64::from(days) - 1))
            .unwrap_or(NaiveDate::MAX);
        let expiring: Vec<_> = self
            .contracts
            .iter()
            .filter(|contract| contract.end_date() >= today && contract.end_date() <= last_day)
            .collect();
        tracing::info!(count = expiring.len(), days, "expiring contracts checked");
        expiring
    }

    pub fn active(&self, today: NaiveDate) -> Vec<&Contract> {
        self.contracts
            .iter()
            .filter(|contract| contract.is_active(today))
            .collect()
    }
}
