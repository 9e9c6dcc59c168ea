use sea_orm::entity::prelude::*;

use crate::gallery::application::domain::entities::PhotoVariant;

/// `parent_id` has no foreign key: the parent may exist only on the media host.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "photo_variants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub parent_id: String,

    pub url: String,

    pub position: i32,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_variant(self) -> PhotoVariant {
        PhotoVariant {
            id: self.id,
            url: self.url,
            position: self.position,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
