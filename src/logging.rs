use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `WISH_LOG=trace`.
pub const LOG_ENV: &str = "WISH_LOG";

/// Installs the stderr subscriber.
///
/// Silent unless `debug` is set or [`LOG_ENV`] asks for output, since stderr
/// also carries the user-facing error line.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"))
    };

    // Already installed is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
