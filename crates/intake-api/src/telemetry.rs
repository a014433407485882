use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize tracing with a compact console format.
///
/// Honors `RUST_LOG` when set; otherwise defaults to debug for the service
/// crates and tower-http request traces.
pub fn init_telemetry() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "intake_api=debug,intake_core=debug,intake_db=debug,tower_http=debug".into()
        }))
        .with(console_fmt)
        .init();
}
