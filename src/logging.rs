use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "movie_search=info";

/// Installs the global tracing subscriber
///
/// Diagnostics go to stderr so they never interleave with rendered results on
/// stdout. `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
