//! Tracing bootstrap shared by both service binaries

use tracing::{debug, Level};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

/// Install the global fmt subscriber.
///
/// `level` is the default directive (`info`, `debug`, ...). `RUST_LOG`
/// overrides it and `DEBUG=1` forces debug output. Returns the effective
/// default level. A second call leaves the first subscriber in place.
pub fn init(level: &str) -> Level {
    let debug_enabled = std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false);
    let log_level = if debug_enabled {
        Level::DEBUG
    } else {
        parse_level(level)
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::CLOSE)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() && debug_enabled {
        debug!("Debug logging enabled");
    }

    log_level
}

/// Parse a level name, falling back to `INFO` for anything unrecognized
pub fn parse_level(level: &str) -> Level {
    level.trim().parse::<Level>().unwrap_or(Level::INFO)
}
