//! showbiz-core
//!
//! Business logic and managers for the showbiz ledger suite.
//! Depends on showbiz-domain. No CLI, no terminal I/O, no direct file access;
//! persistence goes through the [`storage::RecordStorage`] trait.

pub mod artist_service;
pub mod balance;
pub mod casting_service;
pub mod contract_service;
pub mod error;
pub mod event_service;
pub mod finance_service;
pub mod record_store;
pub mod storage;
pub mod time;

pub use artist_service::*;
pub use balance::*;
pub use casting_service::*;
pub use contract_service::*;
pub use error::CoreError;
pub use event_service::*;
pub use finance_service::*;
pub use record_store::*;
pub use time::{Clock, FixedClock};
