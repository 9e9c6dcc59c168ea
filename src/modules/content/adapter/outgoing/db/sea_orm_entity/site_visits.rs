use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "site_visits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub page_path: String,
    pub visitor_hash: String,

    pub visited_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
