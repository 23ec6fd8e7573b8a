//! fintrack-core
//!
//! Recurring-schedule projection engine.
//! Depends on fintrack-domain. No CLI, no terminal I/O, no storage, no logging.

pub mod actual_index;
pub mod error;
pub mod format;
pub mod frequency;
pub mod occurrence;
pub mod projection_service;
pub mod time;
pub mod timeline_service;

pub use actual_index::ActualTransactionIndex;
pub use error::ProjectionError;
pub use format::*;
pub use frequency::*;
pub use occurrence::*;
pub use projection_service::*;
pub use time::Clock;
pub use timeline_service::*;
