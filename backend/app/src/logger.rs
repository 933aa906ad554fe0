use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggerConfig;

fn filter_directive(log_config: &LoggerConfig) -> String {
    log_config
        .level()
        .map(str::to_string)
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string())
}

pub fn init(log_config: &LoggerConfig) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter_directive(log_config)))
        .with(tracing_subscriber::fmt::layer().with_ansi(log_config.ansi()))
        .init();
}
