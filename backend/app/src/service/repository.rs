use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
    sea_query::{Query, SimpleExpr},
};
use serde::Serialize;

use crate::entity::{device, job, software_detail, software_type};

use super::{
    derived::{DeviceStatus, SoftwareSerials, has_software},
    filter::{DeviceFilter, SortOrder, quick_search_condition},
    report::{DeviceSoftware, SoftwareReport, UNCATEGORIZED, software_totals},
};

/// Job statuses that close a repair ticket.
const CLOSED_JOB_STATUSES: [&str; 2] = ["success", "cancel"];

pub type CatalogEntry = (software_detail::Model, Option<software_type::Model>);

/// A catalog entry found on one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledSoftware {
    pub id: i32,
    pub software_name: String,
    pub software_type: String,
    pub serial: Option<String>,
}

/// Read-only access to devices and the software catalog.
///
/// Store failures are logged and degrade to empty results, so callers never see
/// a [`DbErr`].
#[derive(Debug, Clone)]
pub struct DeviceRepository {
    db: DatabaseConnection,
}

impl DeviceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// A non-numeric id is reported as not found without querying.
    pub async fn find_by_id(&self, raw_id: &str) -> Option<device::Model> {
        let Ok(id) = raw_id.trim().parse::<i32>() else {
            tracing::debug!(raw_id, "non-numeric device id");
            return None;
        };

        degrade(
            device::Entity::find_by_id(id).one(&self.db).await,
            "fetch device",
        )
        .flatten()
    }

    pub async fn search(&self, filter: &DeviceFilter, order: SortOrder) -> Vec<device::Model> {
        let mut select = device::Entity::find();
        if !filter.is_empty() {
            select = select.filter(filter.condition());
        }

        let result = select
            .order_by(device::Column::Id, order.into())
            .all(&self.db)
            .await;

        degrade(result, "search devices").unwrap_or_default()
    }

    pub async fn quick_search(&self, query: &str) -> Vec<device::Model> {
        let mut select = device::Entity::find();
        if let Some(condition) = quick_search_condition(query) {
            select = select.filter(condition);
        }

        let result = select
            .order_by_desc(device::Column::Id)
            .all(&self.db)
            .await;

        degrade(result, "quick search devices").unwrap_or_default()
    }

    pub async fn count_by_status(&self, status: DeviceStatus) -> u64 {
        let result = device::Entity::find()
            .filter(status_condition(status))
            .count(&self.db)
            .await;

        degrade(result, "count devices by status").unwrap_or(0)
    }

    pub async fn jobs_for(&self, device_id: i32) -> Vec<job::Model> {
        let result = job::Entity::find()
            .filter(job::Column::DeviceId.eq(device_id))
            .order_by_desc(job::Column::CreatedAt)
            .order_by_desc(job::Column::Id)
            .all(&self.db)
            .await;

        degrade(result, "list jobs").unwrap_or_default()
    }

    pub async fn devices_with_software(&self) -> Vec<DeviceSoftware> {
        let result = device::Entity::find()
            .select_only()
            .columns([
                device::Column::Id,
                device::Column::Software,
                device::Column::SoftwareSn,
            ])
            .filter(device::Column::Software.is_not_null())
            .filter(device::Column::Software.ne(""))
            .into_model::<DeviceSoftware>()
            .all(&self.db)
            .await;

        degrade(result, "list device software").unwrap_or_default()
    }

    pub async fn software_catalog(&self) -> Vec<CatalogEntry> {
        let result = software_detail::Entity::find()
            .find_also_related(software_type::Entity)
            .order_by_asc(software_detail::Column::Id)
            .all(&self.db)
            .await;

        degrade(result, "load software catalog").unwrap_or_default()
    }

    pub async fn software_totals(&self) -> SoftwareReport {
        let catalog = self.software_catalog().await;
        if catalog.is_empty() {
            return SoftwareReport::new();
        }

        let devices = self.devices_with_software().await;
        software_totals(&catalog, &devices)
    }

    pub async fn installed_software(&self, device: &device::Model) -> Vec<InstalledSoftware> {
        if device.software.as_deref().is_none_or(|s| s.trim().is_empty()) {
            return Vec::new();
        }

        let serials = SoftwareSerials::parse(device.software_sn.as_deref());

        self.software_catalog()
            .await
            .into_iter()
            .filter(|(detail, _)| has_software(device.software.as_deref(), detail.id))
            .map(|(detail, software_type)| InstalledSoftware {
                id: detail.id,
                serial: serials.get(detail.id).map(str::to_string),
                software_name: detail.software_detail,
                software_type: software_type
                    .map(|t| t.software_type)
                    .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            })
            .collect()
    }
}

/// `Repair` matches devices with at least one job that is neither successful nor cancelled.
fn status_condition(status: DeviceStatus) -> SimpleExpr {
    match status {
        DeviceStatus::Repair => device::Column::Id.in_subquery(
            Query::select()
                .column(job::Column::DeviceId)
                .from(job::Entity)
                .and_where(job::Column::JobStatus.is_not_in(CLOSED_JOB_STATUSES))
                .to_owned(),
        ),
        DeviceStatus::Enable | DeviceStatus::Disable => {
            device::Column::DeviceStatus.eq(status.as_str())
        }
    }
}

fn degrade<T>(result: Result<T, DbErr>, action: &str) -> Option<T> {
    result
        .inspect_err(|err| tracing::error!(error = %err, "failed to {action}"))
        .ok()
}
