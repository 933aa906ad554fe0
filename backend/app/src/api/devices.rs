use axum::{Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    app::AppState,
    common::{ApiError, ApiResponse, ApiResult},
    entity::{device, job},
    params::{Path, Query, QuickSearchParams, SortParams, Valid},
    service::{
        derived::{DeviceStatus, device_age, non_empty, status_label},
        filter::{DeviceFilter, DeviceSearchParams},
        repository::InstalledSoftware,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_devices))
        .route("/search", get(quick_search))
        .route("/stats", get(device_stats))
        .route("/{id}", get(get_device))
        .route("/{id}/jobs", get(list_jobs))
        .route("/{id}/software", get(list_installed_software))
}

/// Row of the device list.
#[derive(Debug, Serialize)]
pub struct DeviceSummary {
    pub id: i32,
    pub device_id: Option<String>,
    pub device_name: Option<String>,
    pub device_brand: Option<String>,
    pub device_model: Option<String>,
    pub serial_no: Option<String>,
    pub device_status: Option<String>,
    pub status_label: &'static str,
}

impl From<device::Model> for DeviceSummary {
    fn from(device: device::Model) -> Self {
        Self {
            id: device.id,
            status_label: status_label(device.device_status.as_deref()),
            device_id: non_empty(&device.device_id),
            device_name: non_empty(&device.device_name),
            device_brand: non_empty(&device.device_brand),
            device_model: non_empty(&device.device_model),
            serial_no: non_empty(&device.serial_no),
            device_status: non_empty(&device.device_status),
        }
    }
}

/// Everything the detail page shows, blanks reported as `null`.
#[derive(Debug, Serialize)]
pub struct DeviceDetail {
    pub id: i32,
    pub device_id: Option<String>,
    pub serial_no: Option<String>,
    pub device_name: Option<String>,
    pub device_brand: Option<String>,
    pub device_model: Option<String>,
    pub device_status: Option<String>,
    pub status_label: &'static str,
    pub cpu: Option<String>,
    pub memory: Option<String>,
    pub harddisk: Option<String>,
    pub monitor: Option<String>,
    pub device_ip: Option<String>,
    pub mac: Option<String>,
    pub hardware_other: Option<String>,
    pub device_type_id: Option<i32>,
    pub department_id: Option<i32>,
    pub vender: Option<String>,
    pub device_price: Option<f64>,
    pub date_use: Option<DateTime<Utc>>,
    pub date_expire: Option<DateTime<Utc>>,
    pub warranty: Option<String>,
    pub age: String,
}

impl DeviceDetail {
    pub fn new(device: device::Model, now: DateTime<Utc>) -> Self {
        Self {
            id: device.id,
            device_id: non_empty(&device.device_id),
            serial_no: non_empty(&device.serial_no),
            device_name: non_empty(&device.device_name),
            device_brand: non_empty(&device.device_brand),
            device_model: non_empty(&device.device_model),
            status_label: status_label(device.device_status.as_deref()),
            device_status: non_empty(&device.device_status),
            cpu: non_empty(&device.cpu),
            memory: non_empty(&device.memory),
            harddisk: non_empty(&device.harddisk),
            monitor: non_empty(&device.monitor),
            device_ip: non_empty(&device.device_ip),
            mac: non_empty(&device.mac),
            hardware_other: non_empty(&device.hardware_other),
            device_type_id: device.device_type_id,
            department_id: device.department_id,
            vender: non_empty(&device.vender),
            device_price: device.device_price,
            age: device_age(device.date_use, now),
            date_use: device.date_use,
            date_expire: device.date_expire,
            warranty: non_empty(&device.warranty),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeviceStats {
    pub enable: u64,
    pub disable: u64,
    pub repair: u64,
}

async fn list_devices(
    State(AppState { devices }): State<AppState>,
    Valid(Query(params)): Valid<Query<DeviceSearchParams>>,
    Query(sort): Query<SortParams>,
) -> ApiResult<ApiResponse<Vec<DeviceSummary>>> {
    let filter = DeviceFilter::build(&params);
    tracing::debug!(criteria = filter.criteria().len(), order = ?sort.order, "searching devices");

    let found = devices.search(&filter, sort.order).await;

    Ok(ApiResponse::ok(
        "device list",
        found.into_iter().map(DeviceSummary::from).collect(),
    ))
}

async fn quick_search(
    State(AppState { devices }): State<AppState>,
    Valid(Query(params)): Valid<Query<QuickSearchParams>>,
) -> ApiResult<ApiResponse<Vec<DeviceSummary>>> {
    let found = devices.quick_search(&params.query).await;

    Ok(ApiResponse::ok(
        "device search",
        found.into_iter().map(DeviceSummary::from).collect(),
    ))
}

async fn device_stats(
    State(AppState { devices }): State<AppState>,
) -> ApiResult<ApiResponse<DeviceStats>> {
    let (enable, disable, repair) = tokio::join!(
        devices.count_by_status(DeviceStatus::Enable),
        devices.count_by_status(DeviceStatus::Disable),
        devices.count_by_status(DeviceStatus::Repair),
    );

    Ok(ApiResponse::ok(
        "device stats",
        DeviceStats {
            enable,
            disable,
            repair,
        },
    ))
}

async fn get_device(
    State(AppState { devices }): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<DeviceDetail>> {
    let device = devices
        .find_by_id(&id)
        .await
        .ok_or(ApiError::DeviceNotFound(id))?;

    Ok(ApiResponse::ok(
        "device detail",
        DeviceDetail::new(device, Utc::now()),
    ))
}

async fn list_jobs(
    State(AppState { devices }): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<Vec<job::Model>>> {
    let device = devices
        .find_by_id(&id)
        .await
        .ok_or(ApiError::DeviceNotFound(id))?;

    Ok(ApiResponse::ok("device jobs", devices.jobs_for(device.id).await))
}

async fn list_installed_software(
    State(AppState { devices }): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<Vec<InstalledSoftware>>> {
    let device = devices
        .find_by_id(&id)
        .await
        .ok_or(ApiError::DeviceNotFound(id))?;

    Ok(ApiResponse::ok(
        "installed software",
        devices.installed_software(&device).await,
    ))
}
