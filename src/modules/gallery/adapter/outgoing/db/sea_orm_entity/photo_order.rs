use sea_orm::entity::prelude::*;

use crate::gallery::application::domain::entities::{GalleryTag, OrderedPhoto, PhotoVariant};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "photo_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub tag: String,

    pub position: i32,

    pub url: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_ordered_photo(
        self,
        tag: GalleryTag,
        variants: Vec<PhotoVariant>,
        description: Option<String>,
    ) -> OrderedPhoto {
        OrderedPhoto {
            id: self.id,
            tag,
            position: self.position,
            url: self.url,
            variants,
            description,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
