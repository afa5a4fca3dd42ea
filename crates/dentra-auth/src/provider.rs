use serde::{Deserialize, Serialize};

use dentra_core::models::Role;

use crate::error::AuthError;

/// A successful external sign-in. The role is not part of the session;
/// it comes from a secondary profile lookup keyed by `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user_id: String,
    pub email: String,
}

/// The external identity collaborator. Implementations live with the
/// embedding application.
pub trait IdentityProvider {
    fn sign_in(
        &self,
        identifier: &str,
        secret: &str,
    ) -> impl Future<Output = Result<AuthSession, AuthError>> + Send;

    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>> + Send;

    /// Secondary profile lookup resolving the authorization role for
    /// an authenticated user.
    fn role_for_user(&self, user_id: &str) -> impl Future<Output = Result<Role, AuthError>> + Send;
}
