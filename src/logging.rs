use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `budget_diet_rs=trace`).
pub const LOG_ENV: &str = "DIET_LOG";

/// Initialize stderr logging. Defaults to `warn` when `DIET_LOG` is unset.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init so repeated calls (tests, embedding) are harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
