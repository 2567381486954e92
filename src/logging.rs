use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `info` for this crate and `warn` elsewhere.
/// Output goes to stderr so stdout only carries the final summary line.
/// Panics if a global subscriber is already installed; call it once from `main`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,repomirror=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
