use tracing::warn;
use uuid::Uuid;

use crate::modules::identity::application::policy::Principal;
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;

/// Resolve the privilege flag from the stored profile. A failed lookup
/// degrades to a non-privileged principal rather than failing the
/// request: privilege is an upgrade, never a requirement.
pub async fn resolve_principal<P>(profiles: &P, user_id: Uuid) -> Principal
where
    P: ProfileQuery + ?Sized,
{
    let is_admin = match profiles.is_admin(user_id).await {
        Ok(flag) => flag,
        Err(e) => {
            warn!(%user_id, error = %e, "privilege lookup failed, treating as non-admin");
            false
        }
    };

    Principal { user_id, is_admin }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQueryError;
    use crate::modules::profile::domain::entities::{PersonalInfo, Profile};

    struct FlaggedQuery(Result<bool, ProfileQueryError>);

    #[async_trait]
    impl ProfileQuery for FlaggedQuery {
        async fn fetch(&self, _user_id: Uuid) -> Result<Option<Profile>, ProfileQueryError> {
            Ok(None)
        }

        async fn personal_info(
            &self,
            _user_id: Uuid,
        ) -> Result<PersonalInfo, ProfileQueryError> {
            Ok(PersonalInfo::default())
        }

        async fn is_admin(&self, _user_id: Uuid) -> Result<bool, ProfileQueryError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn admin_flag_comes_from_the_profile() {
        let principal = resolve_principal(&FlaggedQuery(Ok(true)), Uuid::new_v4()).await;
        assert!(principal.is_admin);
    }

    #[tokio::test]
    async fn lookup_failure_degrades_to_non_admin() {
        let principal = resolve_principal(
            &FlaggedQuery(Err(ProfileQueryError::DatabaseError("down".to_string()))),
            Uuid::new_v4(),
        )
        .await;
        assert!(!principal.is_admin);
    }
}
