use tracing_subscriber::EnvFilter;

/// Initialise logging at `info`, overridable via `RUST_LOG`
/// (e.g. `RUST_LOG=pixel_painter=trace` to see every stamp).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
