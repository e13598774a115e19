use async_trait::async_trait;
use tracing::warn;

use crate::modules::cv::application::ports::incoming::use_cases::{
    CreateCvError, CreateCvInput, CreateCvOutcome, CreateCvUseCase, SkippedItem, SkippedSection,
};
use crate::modules::cv::application::ports::outgoing::cv_repository::{
    CvRepository, NewCvRow, NewItemRow, NewSectionRow,
};
use crate::modules::cv::domain::assemble::{assemble_document, sanitize_item_payload};
use crate::modules::cv::domain::slug::{derive_slug, fallback_slug, probe_candidate};
use crate::modules::identity::application::policy::{exempt_from_quota, Principal};
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;
use crate::shared::revalidate::RevalidationHook;

/// Per-user CV cap for non-privileged principals. Creation trims the
/// owner's collection down to the 2 newest before inserting, so the
/// new document becomes the 3rd.
const CV_KEEP_ON_CREATE: usize = 2;

/// Bounded slug probe before giving up on title-derived candidates.
const SLUG_PROBE_ATTEMPTS: u32 = 100;

const SLUG_FALLBACK_PREFIX: &str = "cv";

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateCvService<R, P, H>
where
    R: CvRepository,
    P: ProfileQuery,
    H: RevalidationHook,
{
    cv_repository: R,
    profile_query: P,
    revalidator: H,
}

impl<R, P, H> CreateCvService<R, P, H>
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

    /// Best-effort trim: a failed lookup or delete is logged and the
    /// create proceeds. The cap is a soft quota, not a security
    /// boundary.
    async fn trim_over_quota(&self, principal: &Principal) {
        let existing = match self.cv_repository.list_by_owner(principal.user_id).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(user_id = %principal.user_id, error = %e, "quota check failed, skipping trim");
                return;
            }
        };

        if existing.len() < CV_KEEP_ON_CREATE + 1 {
            return;
        }

        // list_by_owner is newest-first: keep the head, delete the rest.
        for stale in &existing[CV_KEEP_ON_CREATE..] {
            if let Err(e) = self.cv_repository.delete_cv(stale.id).await {
                warn!(cv_id = %stale.id, error = %e, "over-quota CV delete failed");
            }
        }
    }

    /// Probe `slug`, `slug-2`, ... within the owner's namespace; after
    /// 100 collisions fall back to a time-based slug and accept the
    /// residual race rather than fail the request.
    async fn resolve_slug(&self, owner_id: uuid::Uuid, title: &str) -> String {
        let mut base = derive_slug(title);
        if base.is_empty() {
            base = fallback_slug(SLUG_FALLBACK_PREFIX);
        }

        for attempt in 1..=SLUG_PROBE_ATTEMPTS {
            let candidate = probe_candidate(&base, attempt);
            match self.cv_repository.slug_exists(owner_id, &candidate).await {
                Ok(false) => return candidate,
                Ok(true) => continue,
                Err(e) => {
                    warn!(slug = %candidate, error = %e, "slug probe failed, falling back");
                    return fallback_slug(SLUG_FALLBACK_PREFIX);
                }
            }
        }

        fallback_slug(SLUG_FALLBACK_PREFIX)
    }
}

#[async_trait]
impl<R, P, H> CreateCvUseCase for CreateCvService<R, P, H>
where
    R: CvRepository + Send + Sync,
    P: ProfileQuery + Send + Sync,
    H: RevalidationHook + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        input: CreateCvInput,
    ) -> Result<CreateCvOutcome, CreateCvError> {
        if !exempt_from_quota(&principal) {
            self.trim_over_quota(&principal).await;
        }

        let slug = self.resolve_slug(principal.user_id, &input.title).await;

        let cv = self
            .cv_repository
            .insert_cv(NewCvRow {
                owner_id: principal.user_id,
                title: input.title,
                slug,
                language: input.language.unwrap_or_else(|| "en".to_string()),
                template_id: input.template_id,
                theme_id: input.theme_id,
                is_public: input.is_public,
            })
            .await
            .map_err(|e| CreateCvError::CreationFailed(e.to_string()))?;

        // Children are best-effort: a failed section or item is skipped
        // and reported, never aborting the create.
        let mut sections = Vec::new();
        let mut items = Vec::new();
        let mut skipped_sections = Vec::new();
        let mut skipped_items = Vec::new();

        for (index, section) in input.sections.into_iter().enumerate() {
            let inserted = match self
                .cv_repository
                .insert_section(NewSectionRow {
                    cv_id: cv.id,
                    kind: section.kind.as_str().to_string(),
                    title: section.title.clone(),
                    sort_order: index as i32,
                    is_visible: section.is_visible,
                })
                .await
            {
                Ok(row) => row,
                Err(e) => {
                    warn!(cv_id = %cv.id, section = %section.title, error = %e, "section insert failed, skipping");
                    skipped_sections.push(SkippedSection {
                        index,
                        title: section.title,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            for (item_index, data) in section.items.into_iter().enumerate() {
                match self
                    .cv_repository
                    .insert_item(NewItemRow {
                        section_id: inserted.id,
                        sort_order: item_index as i32,
                        data: sanitize_item_payload(data),
                    })
                    .await
                {
                    Ok(row) => items.push(row),
                    Err(e) => {
                        warn!(section_id = %inserted.id, item_index, error = %e, "item insert failed, skipping");
                        skipped_items.push(SkippedItem {
                            section_index: index,
                            item_index,
                            reason: e.to_string(),
                        });
                    }
                }
            }

            sections.push(inserted);
        }

        let personal_info = match self.profile_query.personal_info(cv.owner_id).await {
            Ok(info) => info,
            Err(e) => {
                warn!(user_id = %cv.owner_id, error = %e, "personal info lookup failed, using defaults");
                Default::default()
            }
        };

        self.revalidator.mark_stale("/cvs").await;

        Ok(CreateCvOutcome {
            document: assemble_document(cv, sections, items, personal_info),
            skipped_sections,
            skipped_items,
        })
    }
}
