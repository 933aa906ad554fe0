use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "software_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Category display name.
    pub software_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::software_detail::Entity")]
    SoftwareDetail,
}

impl Related<super::software_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoftwareDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
