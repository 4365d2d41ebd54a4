//! CLI subcommand implementations.

pub mod add;
pub mod get;
pub mod update;
