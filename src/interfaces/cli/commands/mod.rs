//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod analytics;
mod config_gen;
mod link_management;

pub use analytics::show_analytics;
pub use config_gen::config_generate;
pub use link_management::*;
