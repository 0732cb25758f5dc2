//! CLI interface module
//!
//! This module provides command-line interface functionality for linkshort.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::errors::LinkshortError;
use crate::services::ServiceContext;
use commands::{config_generate, create_link, list_links, show_analytics, show_link};

#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    /// 后端请求失败（获取或创建）
    ApiError(String),
    /// 输入校验失败
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ApiError(msg) => format!("API error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ApiError(msg) => format!("{} {}", "API error:".red().bold(), msg.white()),
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LinkshortError> for CliError {
    fn from(err: LinkshortError) -> Self {
        match err {
            LinkshortError::Validation(msg) => CliError::ParseError(msg),
            LinkshortError::FetchFailed(msg) | LinkshortError::CreationFailed(msg) => {
                CliError::ApiError(msg)
            }
            other => CliError::CommandError(other.format_simple()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, ctx: &ServiceContext) -> Result<(), CliError> {
    match cmd {
        Commands::Create {
            url,
            code,
            expires_in,
            copy,
        } => {
            create_link(
                &ctx.links,
                &url,
                code.as_deref().unwrap_or_default(),
                expires_in.as_deref().unwrap_or_default(),
                copy,
            )
            .await
        }

        Commands::List { json } => list_links(&ctx.links, json).await,

        Commands::Show { code, json } => show_link(&ctx.links, &code, json).await,

        Commands::Analytics { code, json } => {
            show_analytics(&ctx.analytics, code.as_deref(), json).await
        }

        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_generate(output_path, force).await
            }
        },

        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI mode is started from main, not as a CLI command".to_string(),
        )),
    }
}
