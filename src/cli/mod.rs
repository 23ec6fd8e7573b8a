pub mod commands;
pub mod core;
pub mod formatters;
pub mod help;
pub mod output;
pub mod registry;
mod shell;
pub mod system_clock;
pub mod table;

pub use shell::{run_cli, SCRIPT_ENV};
