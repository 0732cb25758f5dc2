//! TUI mode

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::services::ServiceContext;

/// Run TUI mode
///
/// 安装 color-eyre 的 panic/error hook 后进入事件循环。
pub async fn run_tui(services: ServiceContext, config: &AppConfig) -> Result<()> {
    color_eyre::install().map_err(|e| anyhow::anyhow!("Failed to install error hook: {}", e))?;
    crate::interfaces::tui::run_tui(services, config)
        .await
        .context("TUI exited with an error")
}
