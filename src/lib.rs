#![doc(test(attr(deny(warnings))))]

//! Showbiz is a small ledger for production companies: finance records with
//! validation, date-range balances and flat-file persistence, driven from a
//! command shell.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Showbiz tracing initialized.");
    });
}
