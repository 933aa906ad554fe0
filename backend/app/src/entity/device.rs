use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// An inventoried IT asset. Created and edited elsewhere, this service only reads it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "device")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Business identifier printed on the asset tag.
    pub device_id: Option<String>,
    pub serial_no: Option<String>,
    pub device_name: Option<String>,
    pub device_brand: Option<String>,
    pub device_model: Option<String>,
    pub cpu: Option<String>,
    pub memory: Option<String>,
    pub harddisk: Option<String>,
    pub monitor: Option<String>,
    pub device_ip: Option<String>,
    pub mac: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub hardware_other: Option<String>,
    /// Raw status flag: enable/disable.
    pub device_status: Option<String>,
    pub device_type_id: Option<i32>,
    pub department_id: Option<i32>,
    pub vender: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub device_price: Option<f64>,
    /// When the device was put into use.
    pub date_use: Option<DateTime<Utc>>,
    /// Warranty expiry.
    pub date_expire: Option<DateTime<Utc>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub warranty: Option<String>,
    /// Comma separated software_detail ids, e.g. "3, 7,12". Not referentially checked.
    #[sea_orm(column_type = "Text", nullable)]
    pub software: Option<String>,
    /// JSON list of single entry objects keyed by software id, e.g. `[{"7":"SN123"}]`.
    #[sea_orm(column_type = "Text", nullable)]
    pub software_sn: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::job::Entity")]
    Job,
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
