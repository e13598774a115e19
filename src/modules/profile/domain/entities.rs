use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Personal-info projection shared by every CV and portfolio the user
/// owns. Documents never store their own copy; absent fields project as
/// empty strings so nothing nullable reaches the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub bio: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub personal: PersonalInfo,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
