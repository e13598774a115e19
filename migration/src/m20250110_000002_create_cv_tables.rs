use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cvs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cvs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_owned()),
                    )
                    .col(ColumnDef::new(Cvs::UserId).uuid().not_null())
                    .col(ColumnDef::new(Cvs::Title).text().not_null())
                    .col(ColumnDef::new(Cvs::Slug).text().not_null())
                    .col(
                        ColumnDef::new(Cvs::Language)
                            .text()
                            .not_null()
                            .default("en"),
                    )
                    .col(ColumnDef::new(Cvs::TemplateId).text().null())
                    .col(ColumnDef::new(Cvs::ThemeId).text().null())
                    .col(
                        ColumnDef::new(Cvs::IsPublic)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Cvs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("DEFAULT now()".to_owned()),
                    )
                    .col(
                        ColumnDef::new(Cvs::LastEditedAt)
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
                    .table(Cvs::Table)
                    .name("idx_cvs_user_id")
                    .col(Cvs::UserId)
                    .to_owned(),
            )
            .await?;

        // Slug is unique per owner, not globally
        manager
            .create_index(
                Index::create()
                    .table(Cvs::Table)
                    .name("uq_cvs_user_id_slug")
                    .col(Cvs::UserId)
                    .col(Cvs::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CvSections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CvSections::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_owned()),
                    )
                    .col(ColumnDef::new(CvSections::CvId).uuid().not_null())
                    .col(ColumnDef::new(CvSections::Kind).text().not_null())
                    .col(ColumnDef::new(CvSections::Title).text().not_null())
                    .col(
                        ColumnDef::new(CvSections::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CvSections::IsVisible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cv_sections_cv_id")
                            .from(CvSections::Table, CvSections::CvId)
                            .to(Cvs::Table, Cvs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(CvSections::Table)
                    .name("idx_cv_sections_cv_id")
                    .col(CvSections::CvId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CvItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CvItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_owned()),
                    )
                    .col(ColumnDef::new(CvItems::SectionId).uuid().not_null())
                    .col(
                        ColumnDef::new(CvItems::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(CvItems::Data).json_binary().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cv_items_section_id")
                            .from(CvItems::Table, CvItems::SectionId)
                            .to(CvSections::Table, CvSections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(CvItems::Table)
                    .name("idx_cv_items_section_id")
                    .col(CvItems::SectionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CvItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CvSections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cvs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Cvs {
    Table,
    Id,
    UserId,
    Title,
    Slug,
    Language,
    TemplateId,
    ThemeId,
    IsPublic,
    CreatedAt,
    LastEditedAt,
}

#[derive(Iden)]
enum CvSections {
    Table,
    Id,
    CvId,
    Kind,
    Title,
    SortOrder,
    IsVisible,
}

#[derive(Iden)]
enum CvItems {
    Table,
    Id,
    SectionId,
    SortOrder,
    Data,
}
