use foodbank_config::LoggingConfig;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::EnvFilter;

/// Filter directive in effect: `RUST_LOG` wins over the configured level.
pub fn resolve_filter(rust_log: Option<String>, cfg: &LoggingConfig) -> String {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| cfg.level.clone())
}

/// Initialize the global tracing subscriber from configuration.
pub fn install_tracing_from_config(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let directive = resolve_filter(std::env::var("RUST_LOG").ok(), cfg);
    let env_filter = EnvFilter::try_new(&directive)
        .map_err(|e| anyhow::anyhow!("invalid log filter {directive:?}: {e}"))?;

    let res = if cfg.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_timer(ChronoUtc::rfc_3339())
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .try_init()
    };

    res.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
