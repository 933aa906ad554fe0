use std::{net::SocketAddr, time::Duration};

use axum::{Router, extract::Request, http::StatusCode};
use tokio::net::TcpListener;
use tower_http::{normalize_path::NormalizePathLayer, timeout::TimeoutLayer};

use crate::{app::AppState, common::latency::LatencyResponse, config::ServerConfig};

const SLOW_REQUEST: Duration = Duration::from_secs(2);

pub struct Server {
    config: &'static ServerConfig,
}

impl Server {
    pub fn new(config: &'static ServerConfig) -> Self {
        Self { config }
    }

    pub async fn start(&self, state: AppState, router: Router<AppState>) -> anyhow::Result<()> {
        let router = self.build_router(state, router);

        let listener = TcpListener::bind(self.config.bind_address()).await?;

        tracing::info!("Listening on {}", listener.local_addr()?);

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        Ok(())
    }

    fn build_router(&self, state: AppState, router: Router<AppState>) -> Router {
        let tracing_layer = tower_http::trace::TraceLayer::new_for_http()
            .make_span_with(|request: &Request| {
                let method = request.method();
                let uri = request.uri();
                let id = xid::new();

                tracing::info_span!("Http Request", id = %id, method = %method, uri = %uri)
            })
            .on_request(())
            .on_failure(())
            .on_response(LatencyResponse::new(SLOW_REQUEST));

        let timeout_layer =
            TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, self.config.timeout());

        let body_limit_layer =
            tower_http::limit::RequestBodyLimitLayer::new(self.config.max_body_size_bytes());

        let cors_layer = tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([axum::http::Method::GET])
            .allow_headers(tower_http::cors::Any)
            .max_age(self.config.cors_max_age());

        let normalize_path_layer = NormalizePathLayer::trim_trailing_slash();

        router
            .layer(timeout_layer)
            .layer(body_limit_layer)
            .layer(tracing_layer)
            .layer(cors_layer)
            .layer(normalize_path_layer)
            .with_state(state)
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }

    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use axum::{
        body::Body,
        http::{Method, header},
    };
    use sea_orm::{DatabaseBackend, MockDatabase};
    use tower::ServiceExt;

    use super::*;
    use crate::{api, service::DeviceRepository};

    static CONFIG: LazyLock<ServerConfig> = LazyLock::new(ServerConfig::default);

    fn router() -> Router {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        Server::new(&CONFIG).build_router(
            AppState::new(DeviceRepository::new(db)),
            api::create_router(),
        )
    }

    #[tokio::test]
    async fn cors_preflight_allows_reads_from_any_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/devices")
            .header(header::ORIGIN, "http://dashboard.local")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        let headers = response.headers();

        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET");
        assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
    }
}
