//! LinkShort - URL shortener client
//!
//! Create short links, browse them with live Active/Expired status and
//! inspect click analytics, from the command line or an interactive TUI.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//! - **clipboard**: System clipboard via arboard
//! - **tui**: Terminal user interface
//! - **full**: All features enabled
//!
//! # Architecture
//! - `form`: Input validation and create-link request building
//! - `client`: HTTP transport and API clients
//! - `cache`: Stale-while-revalidate cache and view states
//! - `services`: Cached link / analytics services shared by CLI and TUI
//! - `analytics`: Percentages and proportional widths for display
//! - `models`: Wire types and link lifecycle status
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Startup and execution modes
//! - `system`: Logging

pub mod analytics;
pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod form;
pub mod interfaces;
pub mod models;
pub mod runtime;
pub mod services;
pub mod system;
pub mod utils;
