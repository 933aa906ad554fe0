use std::{fmt::Display, time::Duration};

use tower_http::trace::OnResponse;

/// Logs status and latency once a response is produced; slow requests are
/// raised to `warn`.
#[derive(Clone, Copy)]
pub struct LatencyResponse {
    slow_threshold: Duration,
}

impl LatencyResponse {
    pub fn new(slow_threshold: Duration) -> Self {
        Self { slow_threshold }
    }
}

impl<T> OnResponse<T> for LatencyResponse {
    fn on_response(
        self,
        response: &axum::http::Response<T>,
        latency: Duration,
        _: &tracing::Span,
    ) {
        if latency >= self.slow_threshold {
            tracing::warn!(
                latency = %Latency(latency),
                status = %response.status(),
                "slow request"
            );
        } else {
            tracing::info!(
                latency = %Latency(latency),
                status = %response.status(),
                "finished processing request"
            );
        }
    }
}

struct Latency(Duration);

impl Display for Latency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.as_secs() > 0 {
            write!(f, "{:.2} s", self.0.as_secs_f64())
        } else if self.0.as_millis() > 0 {
            write!(f, "{} ms", self.0.as_millis())
        } else {
            write!(f, "{} µs", self.0.as_micros())
        }
    }
}
