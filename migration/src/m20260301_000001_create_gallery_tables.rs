use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // photo_order: manual ordering per gallery tag
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PhotoOrder::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PhotoOrder::Id).text().not_null().primary_key())
                    .col(ColumnDef::new(PhotoOrder::Tag).text().not_null())
                    .col(
                        ColumnDef::new(PhotoOrder::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(PhotoOrder::Url).text().not_null())
                    .col(
                        ColumnDef::new(PhotoOrder::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_photo_order_tag_position")
                    .table(PhotoOrder::Table)
                    .col(PhotoOrder::Tag)
                    .col(PhotoOrder::Position)
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // photo_variants: secondary images, parent may be remote-only
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PhotoVariants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PhotoVariants::Id)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PhotoVariants::ParentId).text().not_null())
                    .col(ColumnDef::new(PhotoVariants::Url).text().not_null())
                    .col(
                        ColumnDef::new(PhotoVariants::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PhotoVariants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_photo_variants_parent_id")
                    .table(PhotoVariants::Table)
                    .col(PhotoVariants::ParentId)
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // photo_descriptions
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PhotoDescriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PhotoDescriptions::PhotoId)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PhotoDescriptions::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PhotoDescriptions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // photo_blacklist: rows are never removed
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PhotoBlacklist::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PhotoBlacklist::PhotoId)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PhotoBlacklist::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PhotoBlacklist::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PhotoDescriptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PhotoVariants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PhotoOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PhotoOrder {
    Table,
    Id,
    Tag,
    Position,
    Url,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PhotoVariants {
    Table,
    Id,
    ParentId,
    Url,
    Position,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PhotoDescriptions {
    Table,
    PhotoId,
    Description,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PhotoBlacklist {
    Table,
    PhotoId,
    CreatedAt,
}
