use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::cv::adapter::outgoing::sea_orm_entity::{cv_items, cv_sections, cvs};
use crate::modules::cv::application::ports::outgoing::cv_repository::{
    CvAggregateRows, CvRepository, CvRepositoryError, NewCvRow, NewItemRow, NewSectionRow,
    UpdateCvData,
};
use crate::modules::cv::domain::assemble::{CvRow, ItemRow, SectionRow};
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct CvRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CvRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CvRepository for CvRepositoryPostgres {
    async fn insert_cv(&self, data: NewCvRow) -> Result<CvRow, CvRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = cvs::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner_id),
            title: Set(data.title.trim().to_string()),
            slug: Set(data.slug),
            language: Set(data.language),
            template_id: Set(data.template_id),
            theme_id: Set(data.theme_id),
            is_public: Set(data.is_public),
            created_at: Set(now),
            last_edited_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;
        Ok(model_to_cv_row(result))
    }

    async fn insert_section(
        &self,
        data: NewSectionRow,
    ) -> Result<SectionRow, CvRepositoryError> {
        let model = cv_sections::ActiveModel {
            id: Set(Uuid::new_v4()),
            cv_id: Set(data.cv_id),
            kind: Set(data.kind),
            title: Set(data.title),
            sort_order: Set(data.sort_order),
            is_visible: Set(data.is_visible),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_section_row(result))
    }

    async fn insert_item(&self, data: NewItemRow) -> Result<ItemRow, CvRepositoryError> {
        let model = cv_items::ActiveModel {
            id: Set(Uuid::new_v4()),
            section_id: Set(data.section_id),
            sort_order: Set(data.sort_order),
            data: Set(Value::Object(data.data)),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_item_row(result)
    }

    async fn slug_exists(&self, owner_id: Uuid, slug: &str) -> Result<bool, CvRepositoryError> {
        let found = cvs::Entity::find()
            .filter(cvs::Column::UserId.eq(owner_id))
            .filter(cvs::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<CvRow>, CvRepositoryError> {
        let models = cvs::Entity::find()
            .filter(cvs::Column::UserId.eq(owner_id))
            .order_by_desc(cvs::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_cv_row).collect())
    }

    async fn find_cv(&self, cv_id: Uuid) -> Result<Option<CvRow>, CvRepositoryError> {
        let model = cvs::Entity::find_by_id(cv_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_cv_row))
    }

    async fn fetch_aggregate(
        &self,
        cv_id: Uuid,
    ) -> Result<Option<CvAggregateRows>, CvRepositoryError> {
        let Some(cv) = cvs::Entity::find_by_id(cv_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let sections = cv_sections::Entity::find()
            .filter(cv_sections::Column::CvId.eq(cv_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let section_ids: Vec<Uuid> = sections.iter().map(|s| s.id).collect();
        let items = cv_items::Entity::find()
            .filter(cv_items::Column::SectionId.is_in(section_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(CvAggregateRows {
            cv: model_to_cv_row(cv),
            sections: sections.into_iter().map(model_to_section_row).collect(),
            items: items
                .into_iter()
                .map(model_to_item_row)
                .collect::<Result<Vec<_>, _>>()?,
        }))
    }

    async fn update_cv(
        &self,
        cv_id: Uuid,
        data: UpdateCvData,
    ) -> Result<CvRow, CvRepositoryError> {
        let mut model = <cvs::ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }
        if let PatchField::Value(language) = data.language {
            model.language = Set(language);
        }
        if let PatchField::Value(template) = data.template_id {
            model.template_id = Set(Some(template));
        }
        match data.theme_id {
            PatchField::Unset => {}
            PatchField::Null => model.theme_id = Set(None),
            PatchField::Value(theme) => model.theme_id = Set(Some(theme)),
        }
        if let PatchField::Value(is_public) = data.is_public {
            model.is_public = Set(is_public);
        }

        // Every patch bumps the edit timestamp, even a pure section
        // replacement carried by the use case.
        model.last_edited_at = Set(Utc::now().fixed_offset());

        let results = cvs::Entity::update_many()
            .set(model)
            .filter(cvs::Column::Id.eq(cv_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(CvRepositoryError::NotFound)?;

        Ok(model_to_cv_row(result))
    }

    async fn delete_sections(&self, cv_id: Uuid) -> Result<(), CvRepositoryError> {
        cv_sections::Entity::delete_many()
            .filter(cv_sections::Column::CvId.eq(cv_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn delete_cv(&self, cv_id: Uuid) -> Result<(), CvRepositoryError> {
        let result = cvs::Entity::delete_by_id(cv_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CvRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_cv_row(model: cvs::Model) -> CvRow {
    CvRow {
        id: model.id,
        owner_id: model.user_id,
        title: model.title,
        slug: model.slug,
        language: model.language,
        template_id: model.template_id,
        theme_id: model.theme_id,
        is_public: model.is_public,
        created_at: model.created_at.into(),
        last_edited_at: model.last_edited_at.into(),
    }
}

fn model_to_section_row(model: cv_sections::Model) -> SectionRow {
    SectionRow {
        id: model.id,
        cv_id: model.cv_id,
        kind: model.kind,
        title: model.title,
        sort_order: model.sort_order,
        is_visible: model.is_visible,
    }
}

fn model_to_item_row(model: cv_items::Model) -> Result<ItemRow, CvRepositoryError> {
    let data = match model.data {
        Value::Object(map) => map,
        other => {
            return Err(CvRepositoryError::SerializationError(format!(
                "item {} payload is not a JSON object: {}",
                model.id, other
            )))
        }
    };

    Ok(ItemRow {
        id: model.id,
        section_id: model.section_id,
        sort_order: model.sort_order,
        data,
    })
}

fn map_slug_error(e: DbErr) -> CvRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        CvRepositoryError::SlugAlreadyExists
    } else {
        CvRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> CvRepositoryError {
    CvRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
