//! Logger setup for binaries and tests.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install the env_logger backend with millisecond timestamps.
///
/// `RUST_LOG` overrides [`DEFAULT_FILTER`]. Calling this more than once is
/// harmless; only the first call installs a logger.
///
/// # Example
/// ```
/// voxcarve::core::logging::init();
/// log::info!("Brush chain started");
/// ```
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Like [`init`] with a different default filter, e.g. `"voxcarve=debug"`.
pub fn init_with_filter(filter: &str) {
    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp_millis()
        .try_init();
    if result.is_ok() {
        log::debug!("Logging initialized (default filter '{}')", filter);
    }
}
