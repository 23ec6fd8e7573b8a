//! fintrack-domain
//!
//! Pure domain models for recurring schedules, actual transactions and projections.
//! No I/O, no CLI, no storage. Only data types, core enums and calendar helpers.

pub mod common;
pub mod schedule;
pub mod transaction;
pub mod window;

pub use common::*;
pub use schedule::*;
pub use transaction::*;
pub use window::*;
