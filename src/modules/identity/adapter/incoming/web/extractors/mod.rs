mod auth;

pub use auth::AuthenticatedUser;
