//! Command implementations behind the `hopspread` binary.

pub mod commands;
