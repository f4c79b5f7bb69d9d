use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs a JSON subscriber suitable for CloudWatch. `RUST_LOG` overrides the
/// default `info` filter. Safe to call more than once.
pub fn init_tracing(component: &'static str) {
    TRACING_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(false)
                .with_current_span(false)
                .without_time(),
        );

        if subscriber.try_init().is_err() {
            tracing::debug!("global tracing subscriber already installed");
        }

        tracing::debug!(component, "tracing initialized");
    });
}
