use axum::{Router, extract::State, routing::get};

use crate::{
    app::AppState,
    common::{ApiResponse, ApiResult},
    service::report::SoftwareReport,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/totals", get(software_totals))
}

/// Install and serial counts per catalog entry, grouped by software type.
async fn software_totals(
    State(AppState { devices }): State<AppState>,
) -> ApiResult<ApiResponse<SoftwareReport>> {
    Ok(ApiResponse::ok("software totals", devices.software_totals().await))
}
