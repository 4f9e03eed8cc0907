//! Command implementations behind the `kanatool` binary.

pub mod commands;
pub mod trace_init;
