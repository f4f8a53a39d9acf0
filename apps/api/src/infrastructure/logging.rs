use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info,comments_api=debug,tower_http=debug";

/// Installs the global subscriber. `RUST_LOG` takes precedence over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
