use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioViews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioViews::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_owned()),
                    )
                    .col(
                        ColumnDef::new(PortfolioViews::PortfolioId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioViews::VisitorHash)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PortfolioViews::UserAgent)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PortfolioViews::Referrer)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PortfolioViews::DeviceType)
                            .text()
                            .not_null()
                            .default("desktop"),
                    )
                    .col(
                        ColumnDef::new(PortfolioViews::ViewedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("DEFAULT now()".to_owned()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(PortfolioViews::Table)
                    .name("idx_portfolio_views_portfolio_id_viewed_at")
                    .col(PortfolioViews::PortfolioId)
                    .col(PortfolioViews::ViewedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PortfolioEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioEvents::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_owned()),
                    )
                    .col(
                        ColumnDef::new(PortfolioEvents::PortfolioId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioEvents::EventType).text().not_null())
                    .col(
                        ColumnDef::new(PortfolioEvents::EventData)
                            .json_binary()
                            .not_null()
                            .extra("DEFAULT '{}'::jsonb".to_owned()),
                    )
                    .col(
                        ColumnDef::new(PortfolioEvents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("DEFAULT now()".to_owned()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(PortfolioEvents::Table)
                    .name("idx_portfolio_events_portfolio_id_created_at")
                    .col(PortfolioEvents::PortfolioId)
                    .col(PortfolioEvents::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PortfolioStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioStats::PortfolioId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PortfolioStats::TotalViews)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PortfolioStats::TotalEvents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PortfolioStats::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("DEFAULT now()".to_owned()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioStats::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PortfolioEvents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PortfolioViews::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PortfolioViews {
    Table,
    Id,
    PortfolioId,
    VisitorHash,
    UserAgent,
    Referrer,
    DeviceType,
    ViewedAt,
}

#[derive(Iden)]
enum PortfolioEvents {
    Table,
    Id,
    PortfolioId,
    EventType,
    EventData,
    CreatedAt,
}

#[derive(Iden)]
enum PortfolioStats {
    Table,
    PortfolioId,
    TotalViews,
    TotalEvents,
    UpdatedAt,
}
