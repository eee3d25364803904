//! Command handlers for sm64db
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod extract;
pub mod stats;
