use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::AppConfig;

static CONFIG: OnceLock<ArcSwap<AppConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to loading `config.toml` if `init_config` was never called.
pub fn get_config() -> Arc<AppConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(AppConfig::load(None)))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads `.env` first, then the TOML file at `path` (or `config.toml`) and
/// `LS__*` environment overrides. Later calls are no-ops.
///
/// # Examples
/// ```no_run
/// use linkshort::config::init_config;
/// init_config(Some("linkshort.toml"));
/// ```
pub fn init_config(path: Option<&str>) {
    dotenvy::dotenv().ok();
    CONFIG.get_or_init(|| ArcSwap::from_pointee(AppConfig::load(path)));
}

/// Replace the global configuration (used by tests and `config` reloads)
pub fn update_config(config: AppConfig) {
    match CONFIG.get() {
        Some(current) => current.store(Arc::new(config)),
        None => {
            let _ = CONFIG.set(ArcSwap::from_pointee(config));
        }
    }
}
