use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteVisits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteVisits::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SiteVisits::PagePath).text().not_null())
                    .col(ColumnDef::new(SiteVisits::VisitorHash).text().not_null())
                    .col(
                        ColumnDef::new(SiteVisits::VisitedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Last-24h count filters on this column.
        manager
            .create_index(
                Index::create()
                    .name("idx_site_visits_visited_at")
                    .table(SiteVisits::Table)
                    .col(SiteVisits::VisitedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteVisits::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SiteVisits {
    Table,
    Id,
    PagePath,
    VisitorHash,
    VisitedAt,
}
