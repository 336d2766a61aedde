use time::macros::format_description;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

/// Logs go to stderr; stdout carries only the report.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second]"
        )))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
