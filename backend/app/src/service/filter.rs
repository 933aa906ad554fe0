use sea_orm::{
    ColumnTrait, Condition, Order,
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
};
use serde::Deserialize;
use validator::Validate;

use crate::entity::device;

/// Optional search criteria for the device list. Absent or empty fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct DeviceSearchParams {
    #[validate(length(max = 255))]
    pub device_id: Option<String>,
    #[validate(length(max = 255))]
    pub serial_no: Option<String>,
    #[validate(length(max = 255))]
    pub device_brand: Option<String>,
    #[validate(length(max = 255))]
    pub device_model: Option<String>,
    #[validate(length(max = 255))]
    pub device_name: Option<String>,
    #[validate(length(max = 255))]
    pub memory: Option<String>,
    #[validate(length(max = 255))]
    pub cpu: Option<String>,
    #[validate(length(max = 255))]
    pub harddisk: Option<String>,
    #[validate(length(max = 255))]
    pub monitor: Option<String>,
    #[validate(length(max = 255))]
    pub device_ip: Option<String>,
    #[validate(length(max = 255))]
    pub device_status: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_optional_number")]
    pub device_type_id: Option<i32>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_optional_number")]
    pub department_id: Option<i32>,
}

/// Direction of the id ordering. Newest first unless asked otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl From<SortOrder> for Order {
    fn from(value: SortOrder) -> Self {
        match value {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    DeviceId,
    SerialNo,
    DeviceBrand,
    DeviceModel,
    DeviceName,
    Memory,
    Cpu,
    Harddisk,
    Monitor,
    DeviceIp,
}

impl TextField {
    pub fn column(self) -> device::Column {
        match self {
            TextField::DeviceId => device::Column::DeviceId,
            TextField::SerialNo => device::Column::SerialNo,
            TextField::DeviceBrand => device::Column::DeviceBrand,
            TextField::DeviceModel => device::Column::DeviceModel,
            TextField::DeviceName => device::Column::DeviceName,
            TextField::Memory => device::Column::Memory,
            TextField::Cpu => device::Column::Cpu,
            TextField::Harddisk => device::Column::Harddisk,
            TextField::Monitor => device::Column::Monitor,
            TextField::DeviceIp => device::Column::DeviceIp,
        }
    }

    pub fn value(self, device: &device::Model) -> Option<&str> {
        let value = match self {
            TextField::DeviceId => &device.device_id,
            TextField::SerialNo => &device.serial_no,
            TextField::DeviceBrand => &device.device_brand,
            TextField::DeviceModel => &device.device_model,
            TextField::DeviceName => &device.device_name,
            TextField::Memory => &device.memory,
            TextField::Cpu => &device.cpu,
            TextField::Harddisk => &device.harddisk,
            TextField::Monitor => &device.monitor,
            TextField::DeviceIp => &device.device_ip,
        };
        value.as_deref()
    }
}

/// A single sub-predicate of a [`DeviceFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Case-insensitive substring match. The needle is kept lowercased.
    Contains(TextField, String),
    StatusIs(String),
    DeviceTypeIs(i32),
    DepartmentIs(i32),
}

impl Criterion {
    pub fn contains(field: TextField, needle: &str) -> Self {
        Criterion::Contains(field, needle.to_lowercase())
    }

    pub fn to_expr(&self) -> SimpleExpr {
        match self {
            Criterion::Contains(field, needle) => contains_insensitive(field.column(), needle),
            Criterion::StatusIs(status) => device::Column::DeviceStatus.eq(status.as_str()),
            Criterion::DeviceTypeIs(id) => device::Column::DeviceTypeId.eq(*id),
            Criterion::DepartmentIs(id) => device::Column::DepartmentId.eq(*id),
        }
    }

    pub fn matches(&self, device: &device::Model) -> bool {
        match self {
            Criterion::Contains(field, needle) => field
                .value(device)
                .is_some_and(|value| value.to_lowercase().contains(needle.as_str())),
            Criterion::StatusIs(status) => device.device_status.as_deref() == Some(status.as_str()),
            Criterion::DeviceTypeIs(id) => device.device_type_id == Some(*id),
            Criterion::DepartmentIs(id) => device.department_id == Some(*id),
        }
    }
}

/// Conjunction of the criteria that were actually provided. Empty matches every device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceFilter {
    criteria: Vec<Criterion>,
}

impl DeviceFilter {
    pub fn build(params: &DeviceSearchParams) -> Self {
        let text_fields = [
            (TextField::DeviceId, &params.device_id),
            (TextField::SerialNo, &params.serial_no),
            (TextField::DeviceBrand, &params.device_brand),
            (TextField::DeviceModel, &params.device_model),
            (TextField::DeviceName, &params.device_name),
            (TextField::Memory, &params.memory),
            (TextField::Cpu, &params.cpu),
            (TextField::Harddisk, &params.harddisk),
            (TextField::Monitor, &params.monitor),
            (TextField::DeviceIp, &params.device_ip),
        ];

        let criteria = text_fields
            .into_iter()
            .filter_map(|(field, value)| provided(value).map(|v| Criterion::contains(field, v)))
            .chain(
                provided(&params.device_status).map(|s| Criterion::StatusIs(s.to_string())),
            )
            .chain(params.device_type_id.map(Criterion::DeviceTypeIs))
            .chain(params.department_id.map(Criterion::DepartmentIs))
            .collect();

        Self { criteria }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn condition(&self) -> Condition {
        self.criteria
            .iter()
            .fold(Condition::all(), |cond, criterion| cond.add(criterion.to_expr()))
    }

    pub fn matches(&self, device: &device::Model) -> bool {
        self.criteria.iter().all(|criterion| criterion.matches(device))
    }
}

/// Dashboard free-text search: the term may appear in any of the identifying
/// columns. The term is used as typed, only an empty one does not filter.
pub fn quick_search_condition(query: &str) -> Option<Condition> {
    if query.is_empty() {
        return None;
    }

    let needle = query.to_lowercase();
    let condition = [
        TextField::DeviceName,
        TextField::SerialNo,
        TextField::DeviceId,
        TextField::DeviceBrand,
        TextField::DeviceModel,
    ]
    .into_iter()
    .fold(Condition::any(), |cond, field| {
        cond.add(contains_insensitive(field.column(), &needle))
    });

    Some(condition)
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn contains_insensitive(column: device::Column, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));

    Expr::expr(Func::lower(Expr::col((device::Entity, column))))
        .like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(raw: &str) -> String {
    raw.chars().fold(String::with_capacity(raw.len()), |mut out, c| {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
        out
    })
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    use super::*;

    fn device() -> device::Model {
        device::Model {
            id: 1,
            device_id: Some("IT-0042".to_string()),
            serial_no: Some("SN-ABC".to_string()),
            device_name: Some("Finance Laptop".to_string()),
            device_brand: Some("Lenovo".to_string()),
            device_model: Some("ThinkPad T14".to_string()),
            cpu: Some("Intel i7".to_string()),
            memory: Some("16GB".to_string()),
            harddisk: None,
            monitor: None,
            device_ip: Some("10.0.0.12".to_string()),
            mac: None,
            hardware_other: None,
            device_status: Some("enable".to_string()),
            device_type_id: Some(2),
            department_id: Some(5),
            vender: None,
            device_price: None,
            date_use: None,
            date_expire: None,
            warranty: None,
            software: None,
            software_sn: None,
        }
    }

    fn sql(condition: Condition) -> String {
        device::Entity::find()
            .filter(condition)
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn empty_params_match_everything() {
        let filter = DeviceFilter::build(&DeviceSearchParams::default());

        assert!(filter.is_empty());
        assert!(filter.condition().is_empty());
        assert!(filter.matches(&device()));
        assert!(filter.matches(&device::Model { device_name: None, ..device() }));
    }

    #[test]
    fn empty_strings_are_not_criteria() {
        let params = DeviceSearchParams {
            cpu: Some(String::new()),
            device_status: Some(String::new()),
            ..Default::default()
        };

        assert!(DeviceFilter::build(&params).is_empty());
    }

    #[test]
    fn text_fields_match_case_insensitive_substrings() {
        let params = DeviceSearchParams {
            device_brand: Some("LENO".to_string()),
            cpu: Some("i7".to_string()),
            ..Default::default()
        };
        let filter = DeviceFilter::build(&params);

        assert_eq!(filter.criteria().len(), 2);
        assert!(filter.matches(&device()));
        assert!(!filter.matches(&device::Model { cpu: Some("AMD Ryzen".to_string()), ..device() }));
        assert!(!filter.matches(&device::Model { cpu: None, ..device() }));
    }

    #[test]
    fn identifiers_match_exactly() {
        let params = DeviceSearchParams {
            device_status: Some("enable".to_string()),
            department_id: Some(5),
            ..Default::default()
        };
        let filter = DeviceFilter::build(&params);

        assert!(filter.matches(&device()));
        assert!(!filter.matches(&device::Model { department_id: Some(50), ..device() }));
        assert!(!filter.matches(&device::Model { device_status: Some("enabled".to_string()), ..device() }));

        let params = DeviceSearchParams { device_status: Some("enab".to_string()), ..Default::default() };
        assert!(!DeviceFilter::build(&params).matches(&device()));
    }

    #[test]
    fn every_provided_field_must_match() {
        let params = DeviceSearchParams {
            device_name: Some("laptop".to_string()),
            device_type_id: Some(3),
            ..Default::default()
        };

        assert!(!DeviceFilter::build(&params).matches(&device()));
    }

    #[test]
    fn condition_renders_lowered_like_and_equality() {
        let params = DeviceSearchParams {
            cpu: Some("I7".to_string()),
            department_id: Some(3),
            ..Default::default()
        };
        let rendered = sql(DeviceFilter::build(&params).condition());

        assert!(rendered.contains("LOWER"), "{rendered}");
        assert!(rendered.contains("'%i7%'"), "{rendered}");
        assert!(rendered.contains("\"department_id\" = 3"), "{rendered}");
        assert!(rendered.contains(" AND "), "{rendered}");
    }

    #[test]
    fn like_wildcards_in_input_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");

        let params = DeviceSearchParams { memory: Some("100%".to_string()), ..Default::default() };
        let filter = DeviceFilter::build(&params);
        assert!(!filter.matches(&device()));
        assert!(filter.matches(&device::Model { memory: Some("100% new".to_string()), ..device() }));
    }

    #[test]
    fn quick_search_is_a_disjunction() {
        let rendered = sql(quick_search_condition("lenovo").unwrap());
        assert!(rendered.contains(" OR "), "{rendered}");
        assert!(quick_search_condition("").is_none());
    }

    #[test]
    fn quick_search_keeps_surrounding_spaces() {
        let rendered = sql(quick_search_condition(" Pro").unwrap());
        assert!(rendered.contains("'% pro%'"), "{rendered}");
        assert!(quick_search_condition("  ").is_some());
    }

    #[test]
    fn building_twice_gives_the_same_filter() {
        let params = DeviceSearchParams { monitor: Some("Dell".to_string()), ..Default::default() };
        assert_eq!(DeviceFilter::build(&params), DeviceFilter::build(&params));
    }

    #[test]
    fn sort_order_defaults_to_newest_first() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert!(matches!(Order::from(SortOrder::Asc), Order::Asc));
    }
}
