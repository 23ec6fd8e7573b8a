#![doc(test(attr(deny(warnings))))]

//! fintrack projects recurring financial schedules (payroll, rent, subscriptions,
//! periodic investments) into dated entries for a reporting window, skipping dates
//! that already have a matching recorded transaction.
//!
//! The engine lives in `fintrack-core`; this crate adds snapshot loading, tracing
//! setup and the `fintrack_cli` shell.

pub mod cli;
pub mod errors;
pub mod snapshot;
pub mod utils;

pub use fintrack_core;
pub use fintrack_domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("fintrack tracing initialized.");
    });
}
