use env_logger::{Builder, Env};

/// Initializes the process-wide logger. `RUST_LOG` wins; info otherwise.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_target(false)
        .init();
}
