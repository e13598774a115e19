use uuid::Uuid;

use crate::modules::identity::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::identity::application::ports::outgoing::TokenProvider;

/// HS256 needs at least 32 bytes of key material, same rule as production.
pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_token_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: "Foliobuilder".to_string(),
        access_token_expiry: 3600,
    })
}

/// Mint a valid access token for `user_id`, signed with the same secret
/// the test app state verifies against.
pub fn bearer_token_for(user_id: Uuid) -> String {
    test_token_service()
        .generate_access_token(user_id)
        .expect("test token generation should not fail")
}
