//! CLI mode

use tracing::debug;

use crate::cli::Commands;
use crate::interfaces::cli::CliError;
use crate::services::ServiceContext;

/// Run one CLI command
pub async fn run_cli(cmd: Commands, services: &ServiceContext) -> Result<(), CliError> {
    debug!("Running CLI command: {:?}", cmd);
    crate::interfaces::cli::run_cli_command(cmd, services).await
}
