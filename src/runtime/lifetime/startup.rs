//! 启动前准备：配置、日志、服务

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::{AppConfig, get_config, init_config};
use crate::services::ServiceContext;
use crate::system::logging::init_logging;

pub struct StartupContext {
    pub config: Arc<AppConfig>,
    pub services: ServiceContext,
    /// 退出前保持存活，确保日志写完
    pub log_guard: WorkerGuard,
}

/// 加载配置并初始化日志
///
/// `interactive` 为 TUI 模式，日志默认写入文件。
pub fn prepare_startup(config_path: Option<&str>, interactive: bool) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();

    init_config(config_path);
    let config = get_config();
    config.validate().context("Invalid configuration")?;

    let log_guard =
        init_logging(&config.logging, interactive).context("Failed to initialize logging")?;

    debug!("Using API at {}", config.api.base_url);
    if config.telemetry.enabled {
        debug!("Telemetry reporting enabled");
    }

    let services = ServiceContext::from_config(&config);
    debug!("Startup finished in {:?}", start_time.elapsed());

    Ok(StartupContext {
        config,
        services,
        log_guard,
    })
}
