use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portfolios::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_owned()),
                    )
                    .col(ColumnDef::new(Portfolios::UserId).uuid().not_null())
                    .col(ColumnDef::new(Portfolios::Title).text().not_null())
                    .col(ColumnDef::new(Portfolios::Slug).text().not_null())
                    .col(
                        ColumnDef::new(Portfolios::Layout)
                            .text()
                            .not_null()
                            .default("minimal"),
                    )
                    .col(
                        ColumnDef::new(Portfolios::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Portfolios::CvId).uuid().null())
                    .col(ColumnDef::new(Portfolios::ThemeId).text().null())
                    .col(ColumnDef::new(Portfolios::CustomDomain).text().null())
                    .col(
                        ColumnDef::new(Portfolios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("DEFAULT now()".to_owned()),
                    )
                    .col(
                        ColumnDef::new(Portfolios::LastEditedAt)
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
                    .table(Portfolios::Table)
                    .name("idx_portfolios_user_id")
                    .col(Portfolios::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Portfolios::Table)
                    .name("uq_portfolios_user_id_slug")
                    .col(Portfolios::UserId)
                    .col(Portfolios::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FeaturedProjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeaturedProjects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_owned()),
                    )
                    .col(
                        ColumnDef::new(FeaturedProjects::PortfolioId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeaturedProjects::Title).text().not_null())
                    .col(
                        ColumnDef::new(FeaturedProjects::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(FeaturedProjects::MediaUrl).text().null())
                    .col(ColumnDef::new(FeaturedProjects::RepoUrl).text().null())
                    .col(ColumnDef::new(FeaturedProjects::LiveUrl).text().null())
                    .col(
                        ColumnDef::new(FeaturedProjects::TechStack)
                            .json_binary()
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_owned()),
                    )
                    .col(
                        ColumnDef::new(FeaturedProjects::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(FeaturedProjects::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_featured_projects_portfolio_id")
                            .from(FeaturedProjects::Table, FeaturedProjects::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(FeaturedProjects::Table)
                    .name("idx_featured_projects_portfolio_id")
                    .col(FeaturedProjects::PortfolioId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PortfolioBlocks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioBlocks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_owned()),
                    )
                    .col(
                        ColumnDef::new(PortfolioBlocks::PortfolioId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioBlocks::Kind).text().not_null())
                    .col(
                        ColumnDef::new(PortfolioBlocks::Content)
                            .json_binary()
                            .not_null()
                            .extra("DEFAULT '{}'::jsonb".to_owned()),
                    )
                    .col(
                        ColumnDef::new(PortfolioBlocks::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PortfolioBlocks::IsVisible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_blocks_portfolio_id")
                            .from(PortfolioBlocks::Table, PortfolioBlocks::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(PortfolioBlocks::Table)
                    .name("idx_portfolio_blocks_portfolio_id")
                    .col(PortfolioBlocks::PortfolioId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioBlocks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeaturedProjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Portfolios {
    Table,
    Id,
    UserId,
    Title,
    Slug,
    Layout,
    IsPublished,
    CvId,
    ThemeId,
    CustomDomain,
    CreatedAt,
    LastEditedAt,
}

#[derive(Iden)]
enum FeaturedProjects {
    Table,
    Id,
    PortfolioId,
    Title,
    Description,
    MediaUrl,
    RepoUrl,
    LiveUrl,
    TechStack,
    IsFeatured,
    SortOrder,
}

#[derive(Iden)]
enum PortfolioBlocks {
    Table,
    Id,
    PortfolioId,
    Kind,
    Content,
    SortOrder,
    IsVisible,
}
