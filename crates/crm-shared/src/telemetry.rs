//! Telemetry setup

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingSettings;

/// Initialize tracing for the process.
///
/// Returns the appender guard when file logging is configured; it must be
/// held for the lifetime of the process or buffered lines are dropped.
pub fn init_telemetry(settings: &LoggingSettings) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    match &settings.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "crm-console.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            if settings.json {
                registry
                    .with(fmt::layer().with_writer(std::io::stderr))
                    .with(fmt::layer().json().with_writer(writer))
                    .init();
            } else {
                registry
                    .with(fmt::layer().with_writer(std::io::stderr))
                    .with(fmt::layer().with_ansi(false).with_writer(writer))
                    .init();
            }
            Some(guard)
        }
        None => {
            if settings.json {
                registry.with(fmt::layer().json().with_writer(std::io::stderr)).init();
            } else {
                registry.with(fmt::layer().with_writer(std::io::stderr)).init();
            }
            None
        }
    }
}
