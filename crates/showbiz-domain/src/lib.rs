//! showbiz-domain
//!
//! Pure domain models (FinanceRecord, Artist, Casting, Contract, Event, etc.).
//! No I/O, no CLI, no storage. Only data types, validation rules and core enums.

pub mod artist;
pub mod casting;
pub mod common;
pub mod contract;
pub mod error;
pub mod event;
pub mod finance;

pub use artist::*;
pub use casting::*;
pub use common::*;
pub use contract::*;
pub use error::*;
pub use event::*;
pub use finance::*;
