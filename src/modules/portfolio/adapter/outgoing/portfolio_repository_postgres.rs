use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    featured_projects, portfolio_blocks, portfolios,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::{
    NewBlockRow, NewPortfolioRow, NewProjectRow, PortfolioAggregateRows, PortfolioRepository,
    PortfolioRepositoryError, UpdatePortfolioData,
};
use crate::modules::portfolio::domain::assemble::{BlockRow, PortfolioRow, ProjectRow};
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn insert_portfolio(
        &self,
        data: NewPortfolioRow,
    ) -> Result<PortfolioRow, PortfolioRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = portfolios::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner_id),
            title: Set(data.title.trim().to_string()),
            slug: Set(data.slug),
            layout: Set(data.layout),
            is_published: Set(data.is_published),
            cv_id: Set(data.cv_id),
            theme_id: Set(data.theme_id),
            custom_domain: Set(data.custom_domain),
            created_at: Set(now),
            last_edited_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;
        Ok(model_to_portfolio_row(result))
    }

    async fn insert_project(
        &self,
        data: NewProjectRow,
    ) -> Result<ProjectRow, PortfolioRepositoryError> {
        let model = featured_projects::ActiveModel {
            id: Set(Uuid::new_v4()),
            portfolio_id: Set(data.portfolio_id),
            title: Set(data.title),
            description: Set(data.description),
            media_url: Set(data.media_url),
            repo_url: Set(data.repo_url),
            live_url: Set(data.live_url),
            tech_stack: Set(Value::Array(
                data.tech_stack.into_iter().map(Value::String).collect(),
            )),
            is_featured: Set(data.is_featured),
            sort_order: Set(data.sort_order),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_project_row(result))
    }

    async fn insert_block(
        &self,
        data: NewBlockRow,
    ) -> Result<BlockRow, PortfolioRepositoryError> {
        let model = portfolio_blocks::ActiveModel {
            id: Set(Uuid::new_v4()),
            portfolio_id: Set(data.portfolio_id),
            kind: Set(data.kind),
            content: Set(Value::Object(data.content)),
            sort_order: Set(data.sort_order),
            is_visible: Set(data.is_visible),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_block_row(result)
    }

    async fn slug_exists(
        &self,
        owner_id: Uuid,
        slug: &str,
    ) -> Result<bool, PortfolioRepositoryError> {
        let found = portfolios::Entity::find()
            .filter(portfolios::Column::UserId.eq(owner_id))
            .filter(portfolios::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }

    async fn list_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<PortfolioRow>, PortfolioRepositoryError> {
        let models = portfolios::Entity::find()
            .filter(portfolios::Column::UserId.eq(owner_id))
            .order_by_desc(portfolios::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_portfolio_row).collect())
    }

    async fn find_portfolio(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Option<PortfolioRow>, PortfolioRepositoryError> {
        let model = portfolios::Entity::find_by_id(portfolio_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_portfolio_row))
    }

    async fn fetch_aggregate(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Option<PortfolioAggregateRows>, PortfolioRepositoryError> {
        let Some(portfolio) = portfolios::Entity::find_by_id(portfolio_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let projects = featured_projects::Entity::find()
            .filter(featured_projects::Column::PortfolioId.eq(portfolio_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let blocks = portfolio_blocks::Entity::find()
            .filter(portfolio_blocks::Column::PortfolioId.eq(portfolio_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(PortfolioAggregateRows {
            portfolio: model_to_portfolio_row(portfolio),
            projects: projects.into_iter().map(model_to_project_row).collect(),
            blocks: blocks
                .into_iter()
                .map(model_to_block_row)
                .collect::<Result<Vec<_>, _>>()?,
        }))
    }

    async fn update_portfolio(
        &self,
        portfolio_id: Uuid,
        data: UpdatePortfolioData,
    ) -> Result<PortfolioRow, PortfolioRepositoryError> {
        let mut model = <portfolios::ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }
        if let PatchField::Value(layout) = data.layout {
            model.layout = Set(layout);
        }
        if let PatchField::Value(is_published) = data.is_published {
            model.is_published = Set(is_published);
        }
        match data.cv_id {
            PatchField::Unset => {}
            PatchField::Null => model.cv_id = Set(None),
            PatchField::Value(cv_id) => model.cv_id = Set(Some(cv_id)),
        }
        match data.theme_id {
            PatchField::Unset => {}
            PatchField::Null => model.theme_id = Set(None),
            PatchField::Value(theme) => model.theme_id = Set(Some(theme)),
        }
        match data.custom_domain {
            PatchField::Unset => {}
            PatchField::Null => model.custom_domain = Set(None),
            PatchField::Value(domain) => model.custom_domain = Set(Some(domain)),
        }

        // Every patch bumps the edit timestamp, even a pure child
        // replacement carried by the use case.
        model.last_edited_at = Set(Utc::now().fixed_offset());

        let results = portfolios::Entity::update_many()
            .set(model)
            .filter(portfolios::Column::Id.eq(portfolio_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(PortfolioRepositoryError::NotFound)?;

        Ok(model_to_portfolio_row(result))
    }

    async fn delete_projects(
        &self,
        portfolio_id: Uuid,
    ) -> Result<(), PortfolioRepositoryError> {
        featured_projects::Entity::delete_many()
            .filter(featured_projects::Column::PortfolioId.eq(portfolio_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn delete_blocks(&self, portfolio_id: Uuid) -> Result<(), PortfolioRepositoryError> {
        portfolio_blocks::Entity::delete_many()
            .filter(portfolio_blocks::Column::PortfolioId.eq(portfolio_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn delete_portfolio(
        &self,
        portfolio_id: Uuid,
    ) -> Result<(), PortfolioRepositoryError> {
        let result = portfolios::Entity::delete_by_id(portfolio_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PortfolioRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_portfolio_row(model: portfolios::Model) -> PortfolioRow {
    PortfolioRow {
        id: model.id,
        owner_id: model.user_id,
        title: model.title,
        slug: model.slug,
        layout: model.layout,
        is_published: model.is_published,
        cv_id: model.cv_id,
        theme_id: model.theme_id,
        custom_domain: model.custom_domain,
        created_at: model.created_at.into(),
        last_edited_at: model.last_edited_at.into(),
    }
}

fn model_to_project_row(model: featured_projects::Model) -> ProjectRow {
    // Non-string entries in the stack array are dropped rather than
    // failing the whole aggregate.
    let tech_stack = match model.tech_stack {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    ProjectRow {
        id: model.id,
        portfolio_id: model.portfolio_id,
        title: model.title,
        description: model.description,
        media_url: model.media_url,
        repo_url: model.repo_url,
        live_url: model.live_url,
        tech_stack,
        is_featured: model.is_featured,
        sort_order: model.sort_order,
    }
}

fn model_to_block_row(
    model: portfolio_blocks::Model,
) -> Result<BlockRow, PortfolioRepositoryError> {
    let content = match model.content {
        Value::Object(map) => map,
        other => {
            return Err(PortfolioRepositoryError::SerializationError(format!(
                "block {} content is not a JSON object: {}",
                model.id, other
            )))
        }
    };

    Ok(BlockRow {
        id: model.id,
        portfolio_id: model.portfolio_id,
        kind: model.kind,
        content,
        sort_order: model.sort_order,
        is_visible: model.is_visible,
    })
}

fn map_slug_error(e: DbErr) -> PortfolioRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        PortfolioRepositoryError::SlugAlreadyExists
    } else {
        PortfolioRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> PortfolioRepositoryError {
    PortfolioRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    fn mock_portfolio_model(id: Uuid, user_id: Uuid, slug: &str) -> portfolios::Model {
        let now = Utc::now().fixed_offset();
        portfolios::Model {
            id,
            user_id,
            title: "Test Portfolio".to_string(),
            slug: slug.to_string(),
            layout: "minimal".to_string(),
            is_published: false,
            cv_id: None,
            theme_id: None,
            custom_domain: None,
            created_at: now,
            last_edited_at: now,
        }
    }

    #[tokio::test]
    async fn test_insert_portfolio_success() {
        let user_id = Uuid::new_v4();
        let model = mock_portfolio_model(Uuid::new_v4(), user_id, "test-portfolio");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PortfolioRepositoryPostgres::new(Arc::new(db));
        let row = repo
            .insert_portfolio(NewPortfolioRow {
                owner_id: user_id,
                title: "Test Portfolio".to_string(),
                slug: "test-portfolio".to_string(),
                layout: "minimal".to_string(),
                is_published: false,
                cv_id: None,
                theme_id: None,
                custom_domain: None,
            })
            .await
            .unwrap();

        assert_eq!(row.slug, "test-portfolio");
        assert_eq!(row.owner_id, user_id);
    }

    #[tokio::test]
    async fn test_insert_portfolio_maps_slug_conflict() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"uq_portfolios_user_id_slug\""
                    .to_string(),
            )])
            .into_connection();

        let repo = PortfolioRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .insert_portfolio(NewPortfolioRow {
                owner_id: Uuid::new_v4(),
                title: "Test Portfolio".to_string(),
                slug: "test-portfolio".to_string(),
                layout: "minimal".to_string(),
                is_published: false,
                cv_id: None,
                theme_id: None,
                custom_domain: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PortfolioRepositoryError::SlugAlreadyExists));
    }

    #[tokio::test]
    async fn test_project_tech_stack_round_trips_as_strings() {
        let portfolio_id = Uuid::new_v4();
        let model = featured_projects::Model {
            id: Uuid::new_v4(),
            portfolio_id,
            title: "Side project".to_string(),
            description: String::new(),
            media_url: None,
            repo_url: None,
            live_url: None,
            tech_stack: json!(["Rust", "Postgres"]),
            is_featured: true,
            sort_order: 0,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PortfolioRepositoryPostgres::new(Arc::new(db));
        let row = repo
            .insert_project(NewProjectRow {
                portfolio_id,
                title: "Side project".to_string(),
                description: String::new(),
                media_url: None,
                repo_url: None,
                live_url: None,
                tech_stack: vec!["Rust".to_string(), "Postgres".to_string()],
                is_featured: true,
                sort_order: 0,
            })
            .await
            .unwrap();

        assert_eq!(row.tech_stack, vec!["Rust", "Postgres"]);
    }
}
