use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::cv::application::ports::incoming::use_cases::{
    SkippedItem, SkippedSection, UpdateCvError, UpdateCvInput, UpdateCvOutcome, UpdateCvUseCase,
};
use crate::modules::cv::application::ports::outgoing::cv_repository::{
    CvRepository, NewItemRow, NewSectionRow, UpdateCvData,
};
use crate::modules::cv::application::ports::incoming::use_cases::NewSectionInput;
use crate::modules::cv::domain::assemble::{assemble_document, sanitize_item_payload};
use crate::modules::identity::application::policy::{
    authorize, AccessDecision, DocumentAction, Principal,
};
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;
use crate::shared::patch::PatchField;
use crate::shared::revalidate::RevalidationHook;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdateCvService<R, P, H>
where
    R: CvRepository,
    P: ProfileQuery,
    H: RevalidationHook,
{
    cv_repository: R,
    profile_query: P,
    revalidator: H,
}

impl<R, P, H> UpdateCvService<R, P, H>
where
    R: CvRepository,
    P: ProfileQuery,
    H: RevalidationHook,
{
    pub fn new(cv_repository: R, profile_query: P, revalidator: H) -> Self {
        Self {
            cv_repository,
            profile_query,
            revalidator,
        }
    }

    /// Same best-effort child policy as creation: failed rows are
    /// skipped and reported, never aborting the action.
    async fn replace_section_tree(
        &self,
        cv_id: Uuid,
        sections: Vec<NewSectionInput>,
        skipped_sections: &mut Vec<SkippedSection>,
        skipped_items: &mut Vec<SkippedItem>,
    ) -> Result<(), UpdateCvError> {
        self.cv_repository
            .delete_sections(cv_id)
            .await
            .map_err(|e| UpdateCvError::UpdateFailed(e.to_string()))?;

        for (index, section) in sections.into_iter().enumerate() {
            let inserted = match self
                .cv_repository
                .insert_section(NewSectionRow {
                    cv_id,
                    kind: section.kind.as_str().to_string(),
                    title: section.title.clone(),
                    sort_order: index as i32,
                    is_visible: section.is_visible,
                })
                .await
            {
                Ok(row) => row,
                Err(e) => {
                    warn!(%cv_id, section = %section.title, error = %e, "section insert failed, skipping");
                    skipped_sections.push(SkippedSection {
                        index,
                        title: section.title,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            for (item_index, data) in section.items.into_iter().enumerate() {
                if let Err(e) = self
                    .cv_repository
                    .insert_item(NewItemRow {
                        section_id: inserted.id,
                        sort_order: item_index as i32,
                        data: sanitize_item_payload(data),
                    })
                    .await
                {
                    warn!(section_id = %inserted.id, item_index, error = %e, "item insert failed, skipping");
                    skipped_items.push(SkippedItem {
                        section_index: index,
                        item_index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Explicit null is only meaningful for nullable columns.
fn reject_null<T>(field: &PatchField<T>, name: &str) -> Result<(), UpdateCvError> {
    if field.is_null() {
        return Err(UpdateCvError::Validation(format!(
            "{} cannot be null",
            name
        )));
    }
    Ok(())
}

#[async_trait]
impl<R, P, H> UpdateCvUseCase for UpdateCvService<R, P, H>
where
    R: CvRepository + Send + Sync,
    P: ProfileQuery + Send + Sync,
    H: RevalidationHook + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        cv_id: Uuid,
        input: UpdateCvInput,
    ) -> Result<UpdateCvOutcome, UpdateCvError> {
        reject_null(&input.title, "title")?;
        reject_null(&input.language, "language")?;
        reject_null(&input.template_id, "templateId")?;
        reject_null(&input.is_public, "isPublic")?;

        let owner_id = self
            .cv_repository
            .find_cv(cv_id)
            .await
            .map_err(|e| UpdateCvError::UpdateFailed(e.to_string()))?
            .map(|cv| cv.owner_id);

        match authorize(&principal, DocumentAction::Mutate { owner_id }) {
            AccessDecision::Allowed if owner_id.is_some() => {}
            _ => return Err(UpdateCvError::Unauthorized),
        }

        // Always runs, so last_edited_at bumps even for a pure section
        // replacement.
        self.cv_repository
            .update_cv(
                cv_id,
                UpdateCvData {
                    title: input.title,
                    language: input.language,
                    template_id: input.template_id,
                    theme_id: input.theme_id,
                    is_public: input.is_public,
                },
            )
            .await
            .map_err(|e| UpdateCvError::UpdateFailed(e.to_string()))?;

        let mut skipped_sections = Vec::new();
        let mut skipped_items = Vec::new();
        if let Some(sections) = input.sections {
            self.replace_section_tree(cv_id, sections, &mut skipped_sections, &mut skipped_items)
                .await?;
        }

        let rows = self
            .cv_repository
            .fetch_aggregate(cv_id)
            .await
            .map_err(|e| UpdateCvError::UpdateFailed(e.to_string()))?
            .ok_or_else(|| UpdateCvError::UpdateFailed("CV vanished mid-update".to_string()))?;

        let personal_info = match self.profile_query.personal_info(rows.cv.owner_id).await {
            Ok(info) => info,
            Err(e) => {
                warn!(user_id = %rows.cv.owner_id, error = %e, "personal info lookup failed, using defaults");
                Default::default()
            }
        };

        self.revalidator.mark_stale("/cvs").await;

        Ok(UpdateCvOutcome {
            document: assemble_document(rows.cv, rows.sections, rows.items, personal_info),
            skipped_sections,
            skipped_items,
        })
    }
}
