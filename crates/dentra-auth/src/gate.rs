use tracing::{info, warn};

use dentra_core::models::Role;

use crate::credentials::CredentialTable;
use crate::error::AuthError;
use crate::marker::{MarkerStore, SessionMarker};
use crate::provider::IdentityProvider;

/// Which page surface the client is currently on. The unauthenticated
/// entry surface is the login/index page; everything else is the
/// authenticated app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Entry,
    App,
}

/// Decision of the page-load check. This runs before any dependent UI
/// is constructed — it is a hard precondition, not best-effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupRoute {
    /// Stay on the current surface with this role in effect.
    Proceed(Role),
    /// Not authenticated on a protected surface: go to login.
    RedirectToEntry,
    /// Already authenticated but on the entry surface: go forward into
    /// the app.
    RedirectToApp(Role),
}

/// The auth gate: establishes and clears the persisted session marker,
/// and routes page loads.
pub struct AuthGate<S: MarkerStore> {
    marker: S,
    credentials: CredentialTable,
}

impl<S: MarkerStore> AuthGate<S> {
    pub fn new(marker: S, credentials: CredentialTable) -> Self {
        Self {
            marker,
            credentials,
        }
    }

    pub fn credentials(&self) -> &CredentialTable {
        &self.credentials
    }

    /// Validates against the local credential table and persists the
    /// resolved role. The error never reveals which field was wrong.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Role, AuthError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        match self.credentials.verify(username, password) {
            Some(role) => {
                self.marker.set(SessionMarker::Role(role).as_str());
                info!(role = %role, "login succeeded");
                Ok(role)
            }
            None => {
                warn!(username = username, "login failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Signs in through the external identity provider, then resolves
    /// the role via the profile lookup. The marker is only persisted
    /// once both steps succeed.
    pub async fn authenticate_external<P: IdentityProvider>(
        &self,
        provider: &P,
        identifier: &str,
        secret: &str,
    ) -> Result<Role, AuthError> {
        let session = provider.sign_in(identifier, secret).await?;
        let role = provider.role_for_user(&session.user_id).await?;
        if !role.is_authenticated() {
            return Err(AuthError::ProfileNotFound(session.user_id));
        }
        self.marker.set(SessionMarker::Role(role).as_str());
        info!(role = %role, user_id = %session.user_id, "external login succeeded");
        Ok(role)
    }

    /// Clears the persisted marker. The caller must tear down its
    /// session state and redirect to the returned surface.
    pub fn logout(&self) -> Surface {
        self.marker.clear();
        info!("session marker cleared");
        Surface::Entry
    }

    /// The page-load check: inspects the persisted marker and decides
    /// whether the current surface may render. An unparseable marker
    /// is cleared and treated as absent, never as a crash.
    pub fn startup_route(&self, current: Surface) -> StartupRoute {
        let marker = match self.marker.get() {
            Some(raw) => match SessionMarker::parse(&raw) {
                Some(marker) => marker,
                None => {
                    warn!(value = %raw, "unrecognized session marker, clearing");
                    self.marker.clear();
                    SessionMarker::LoggedOut
                }
            },
            None => SessionMarker::LoggedOut,
        };

        match (marker, current) {
            (SessionMarker::Role(role), Surface::Entry) => StartupRoute::RedirectToApp(role),
            (SessionMarker::Role(role), Surface::App) => StartupRoute::Proceed(role),
            (SessionMarker::LoggedOut, Surface::Entry) => StartupRoute::Proceed(Role::LoggedOut),
            (SessionMarker::LoggedOut, Surface::App) => StartupRoute::RedirectToEntry,
        }
    }
}
