use dentra_auth::credentials::CredentialTable;
use dentra_auth::error::AuthError;
use dentra_auth::gate::{AuthGate, StartupRoute, Surface};
use dentra_auth::marker::{InMemoryMarkerStore, MarkerStore};
use dentra_auth::provider::{AuthSession, IdentityProvider};
use dentra_core::models::Role;

fn demo_gate() -> AuthGate<InMemoryMarkerStore> {
    AuthGate::new(InMemoryMarkerStore::new(), CredentialTable::demo())
}

#[test]
fn valid_demo_credentials_resolve_their_role() {
    let gate = demo_gate();
    assert_eq!(gate.authenticate("alan.fahmi", "123").unwrap(), Role::Admin);

    let gate = demo_gate();
    assert_eq!(
        gate.authenticate("sarah.davis", "123").unwrap(),
        Role::Receptionist
    );

    let gate = demo_gate();
    assert_eq!(gate.authenticate("jane.doe", "123").unwrap(), Role::Dentist);
}

#[test]
fn login_persists_the_session_marker() {
    let store = InMemoryMarkerStore::new();
    let gate = AuthGate::new(store, CredentialTable::demo());
    gate.authenticate("jane.doe", "123").unwrap();

    assert_eq!(gate.startup_route(Surface::App), StartupRoute::Proceed(Role::Dentist));
}

#[test]
fn wrong_password_and_unknown_user_fail_identically() {
    let gate = demo_gate();
    let wrong_password = gate.authenticate("alan.fahmi", "wrong").unwrap_err();
    let unknown_user = gate.authenticate("nobody", "123").unwrap_err();

    // The message must not reveal which field mismatched
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
}

#[test]
fn whitespace_is_trimmed_and_empty_input_rejected() {
    let gate = demo_gate();
    assert_eq!(
        gate.authenticate("  alan.fahmi  ", " 123 ").unwrap(),
        Role::Admin
    );

    assert!(matches!(
        gate.authenticate("   ", "123"),
        Err(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        gate.authenticate("alan.fahmi", ""),
        Err(AuthError::InvalidCredentials)
    ));
}

#[test]
fn failed_login_does_not_establish_a_session() {
    let gate = demo_gate();
    let _ = gate.authenticate("alan.fahmi", "wrong");
    assert_eq!(gate.startup_route(Surface::App), StartupRoute::RedirectToEntry);
}

#[test]
fn logout_clears_the_marker_and_routes_to_entry() {
    let gate = demo_gate();
    gate.authenticate("alan.fahmi", "123").unwrap();

    assert_eq!(gate.logout(), Surface::Entry);
    assert_eq!(gate.startup_route(Surface::App), StartupRoute::RedirectToEntry);
    assert_eq!(
        gate.startup_route(Surface::Entry),
        StartupRoute::Proceed(Role::LoggedOut)
    );
}

#[test]
fn startup_routing_covers_every_marker_surface_combination() {
    // No marker at all
    let gate = demo_gate();
    assert_eq!(gate.startup_route(Surface::App), StartupRoute::RedirectToEntry);
    assert_eq!(
        gate.startup_route(Surface::Entry),
        StartupRoute::Proceed(Role::LoggedOut)
    );

    // Explicit logged-out sentinel
    let store = InMemoryMarkerStore::new();
    store.set("loggedOut");
    let gate = AuthGate::new(store, CredentialTable::demo());
    assert_eq!(gate.startup_route(Surface::App), StartupRoute::RedirectToEntry);

    // Authenticated marker
    let store = InMemoryMarkerStore::new();
    store.set("receptionist");
    let gate = AuthGate::new(store, CredentialTable::demo());
    assert_eq!(
        gate.startup_route(Surface::App),
        StartupRoute::Proceed(Role::Receptionist)
    );
    assert_eq!(
        gate.startup_route(Surface::Entry),
        StartupRoute::RedirectToApp(Role::Receptionist)
    );
}

#[test]
fn corrupt_marker_is_cleared_and_treated_as_logged_out() {
    let store = InMemoryMarkerStore::new();
    store.set("garbage-value");
    let gate = AuthGate::new(store, CredentialTable::demo());

    assert_eq!(gate.startup_route(Surface::App), StartupRoute::RedirectToEntry);
    // Second check sees no marker at all
    assert_eq!(gate.startup_route(Surface::App), StartupRoute::RedirectToEntry);
}

#[test]
fn account_lookup_backs_the_header_badge() {
    let table = CredentialTable::demo();
    let account = table.account_for(Role::Admin).unwrap();
    assert_eq!(account.display_name, "Dr. ALAN FAHMI");
    assert!(table.account_for(Role::LoggedOut).is_none());
}

/// Provider double: accepts one identifier/secret pair and serves a
/// configurable profile role.
struct FakeProvider {
    role: Option<Role>,
    reject_sign_in: bool,
}

impl IdentityProvider for FakeProvider {
    async fn sign_in(&self, identifier: &str, secret: &str) -> Result<AuthSession, AuthError> {
        if self.reject_sign_in || identifier != "jane@example.com" || secret != "hunter2" {
            return Err(AuthError::Provider("sign-in rejected".to_string()));
        }
        Ok(AuthSession {
            user_id: "user-42".to_string(),
            email: identifier.to_string(),
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }

    async fn role_for_user(&self, user_id: &str) -> Result<Role, AuthError> {
        match self.role {
            Some(role) => Ok(role),
            None => Err(AuthError::ProfileNotFound(user_id.to_string())),
        }
    }
}

#[tokio::test]
async fn external_login_resolves_role_via_profile_lookup() {
    let gate = demo_gate();
    let provider = FakeProvider {
        role: Some(Role::Dentist),
        reject_sign_in: false,
    };

    let role = gate
        .authenticate_external(&provider, "jane@example.com", "hunter2")
        .await
        .unwrap();
    assert_eq!(role, Role::Dentist);
    assert_eq!(gate.startup_route(Surface::App), StartupRoute::Proceed(Role::Dentist));
}

#[tokio::test]
async fn external_login_without_a_profile_fails_before_persisting() {
    let gate = demo_gate();
    let provider = FakeProvider {
        role: None,
        reject_sign_in: false,
    };

    let result = gate
        .authenticate_external(&provider, "jane@example.com", "hunter2")
        .await;
    assert!(matches!(result, Err(AuthError::ProfileNotFound(_))));
    assert_eq!(gate.startup_route(Surface::App), StartupRoute::RedirectToEntry);
}

#[tokio::test]
async fn external_login_with_logged_out_profile_is_rejected() {
    let gate = demo_gate();
    let provider = FakeProvider {
        role: Some(Role::LoggedOut),
        reject_sign_in: false,
    };

    let result = gate
        .authenticate_external(&provider, "jane@example.com", "hunter2")
        .await;
    assert!(matches!(result, Err(AuthError::ProfileNotFound(_))));
}

#[tokio::test]
async fn rejected_external_sign_in_surfaces_the_provider_error() {
    let gate = demo_gate();
    let provider = FakeProvider {
        role: Some(Role::Dentist),
        reject_sign_in: true,
    };

    let result = gate
        .authenticate_external(&provider, "jane@example.com", "wrong")
        .await;
    assert!(matches!(result, Err(AuthError::Provider(_))));
    assert_eq!(gate.startup_route(Surface::App), StartupRoute::RedirectToEntry);
}
