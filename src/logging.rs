use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Filter used when neither a log level nor RUST_LOG is set. Driver output goes to stdout, so the
/// default stays quiet.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the global tracing subscriber, writing human readable events to stderr.
///
/// # Parameters
/// - `log_level` filter directive. If `None`, RUST_LOG is consulted before falling back to `warn`
///
/// # Errors
/// If a global subscriber has already been installed for this process.
pub fn init_tracing(log_level: Option<&str>) -> Result<(), TryInitError> {
    let env_filter = match log_level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
    };

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    Registry::default()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
}
