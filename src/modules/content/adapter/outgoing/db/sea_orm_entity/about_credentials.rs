use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "about_credentials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub category: String,
    pub title: String,
    pub subtitle: String,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
