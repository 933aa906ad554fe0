use std::time::Duration;

use bytesize::ByteSize;
use serde::Deserialize;

/// HTTP listener settings. Requests are read-only, so the body limit stays small.
#[derive(Debug, Deserialize, Default)]
pub struct ServerConfig {
    host: Option<String>,
    port: Option<u16>,
    timeout_seconds: Option<u64>,
    max_body_size_bytes: Option<usize>,
    cors_max_age_seconds: Option<u64>,
}

impl ServerConfig {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or("0.0.0.0")
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(8080)
    }

    /// Host names are resolved when the listener binds.
    pub fn bind_address(&self) -> (&str, u16) {
        (self.host(), self.port())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(120))
    }

    pub fn max_body_size_bytes(&self) -> usize {
        self.max_body_size_bytes
            .unwrap_or(ByteSize::mib(1).as_u64() as usize)
    }

    pub fn cors_max_age(&self) -> Duration {
        Duration::from_secs(self.cors_max_age_seconds.unwrap_or(86400))
    }
}
