use sea_orm::entity::prelude::*;

/// Software catalog entry. Devices reference it by id through their `software` list.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "software_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name.
    pub software_detail: String,
    pub software_type_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(belongs_to = "super::software_type::Entity", from = "Column::SoftwareTypeId", to = "super::software_type::Column::Id")]
    SoftwareType,
}

impl Related<super::software_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoftwareType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
