use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // articles
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Articles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Articles::Slug)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Articles::Title).text().not_null())
                    .col(
                        ColumnDef::new(Articles::Publisher)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Articles::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Articles::ImageUrl).text())
                    .col(ColumnDef::new(Articles::LinkUrl).text())
                    .col(ColumnDef::new(Articles::PublishedDate).text())
                    .col(
                        ColumnDef::new(Articles::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Articles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // about_content: singleton row (id = 1)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(AboutContent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AboutContent::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AboutContent::Name).text().not_null())
                    .col(ColumnDef::new(AboutContent::BioP1).text().not_null())
                    .col(ColumnDef::new(AboutContent::BioP2).text().not_null())
                    .col(ColumnDef::new(AboutContent::Email).text().not_null())
                    .col(ColumnDef::new(AboutContent::Phone).text().not_null())
                    .col(
                        ColumnDef::new(AboutContent::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(AboutContent::Id).eq(1))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // about_credentials
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(AboutCredentials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AboutCredentials::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AboutCredentials::Category)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AboutCredentials::Title).text().not_null())
                    .col(
                        ColumnDef::new(AboutCredentials::Subtitle)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(AboutCredentials::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // wedding_packages
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(WeddingPackages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WeddingPackages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(WeddingPackages::Name).text().not_null())
                    .col(ColumnDef::new(WeddingPackages::Time).text().not_null())
                    .col(
                        ColumnDef::new(WeddingPackages::Includes)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WeddingPackages::Images).text().not_null())
                    .col(ColumnDef::new(WeddingPackages::Price).text().not_null())
                    .col(
                        ColumnDef::new(WeddingPackages::Highlight)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(WeddingPackages::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeddingPackages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AboutCredentials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AboutContent::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Articles {
    Table,
    Id,
    Slug,
    Title,
    Publisher,
    Description,
    ImageUrl,
    LinkUrl,
    PublishedDate,
    Position,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AboutContent {
    Table,
    Id,
    Name,
    BioP1,
    BioP2,
    Email,
    Phone,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AboutCredentials {
    Table,
    Id,
    Category,
    Title,
    Subtitle,
    SortOrder,
}

#[derive(DeriveIden)]
enum WeddingPackages {
    Table,
    Id,
    Name,
    Time,
    Includes,
    Images,
    Price,
    Highlight,
    SortOrder,
}
