//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for linkshort using clap's derive macros.

use clap::{Parser, Subcommand};

/// LinkShort - URL shortener client
#[derive(Parser, Debug)]
#[command(name = "linkshort")]
#[command(version)]
#[command(about = "Create short links and inspect click analytics", long_about = None)]
pub struct Cli {
    /// Path to the configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start TUI mode
    #[cfg(feature = "tui")]
    Tui,

    /// Create a short link
    Create {
        /// Destination URL
        url: String,

        /// Custom short code (server generates one when omitted)
        #[arg(long)]
        code: Option<String>,

        /// Expiration: hours ("24") or relative duration ("2d", "1w", "1d12h")
        #[arg(long, value_name = "HOURS|DURATION")]
        expires_in: Option<String>,

        /// Copy the short URL to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// List all short links with their status
    List {
        /// Output raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single short link
    Show {
        /// Short code
        code: String,

        /// Output raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Show click analytics (all links, or one short code)
    Analytics {
        /// Short code (omit for global analytics)
        code: Option<String>,

        /// Output raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "linkshort",
            "create",
            "https://example.com",
            "--code",
            "promo",
            "--expires-in",
            "2d",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Create {
                url,
                code,
                expires_in,
                copy,
            }) => {
                assert_eq!(url, "https://example.com");
                assert_eq!(code.as_deref(), Some("promo"));
                assert_eq!(expires_in.as_deref(), Some("2d"));
                assert!(!copy);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_analytics_optional_code() {
        let cli = Cli::try_parse_from(["linkshort", "analytics", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Analytics {
                code: None,
                json: true
            })
        ));
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["linkshort", "list", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn test_config_generate() {
        let cli = Cli::try_parse_from(["linkshort", "config", "generate", "out.toml", "--force"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigCommands::Generate { force: true, .. }
            })
        ));
    }
}
