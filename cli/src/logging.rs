use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `-v` wins, then `RUST_LOG`, then the
/// configured level, then `warn`.
pub fn init_logging(config_level: Option<&str>, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config_level.unwrap_or("warn")))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
