use anyhow::Context;
use orbital_dns_domain::{config::LoggingConfig, LogFormat};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level when it is set.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("Invalid log level '{}'", config.level))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let result = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
