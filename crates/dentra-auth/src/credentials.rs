use serde::{Deserialize, Serialize};

use dentra_core::models::Role;

/// A local login account. The role doubles as the account key: one
/// demo account per role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub role: Role,
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub avatar_url: String,
}

/// The local credential table used when the external identity provider
/// is disabled.
#[derive(Debug, Clone)]
pub struct CredentialTable {
    accounts: Vec<UserAccount>,
}

impl CredentialTable {
    pub fn new(accounts: Vec<UserAccount>) -> Self {
        Self { accounts }
    }

    /// The three demo accounts.
    pub fn demo() -> Self {
        Self::new(vec![
            UserAccount {
                role: Role::Admin,
                username: "alan.fahmi".into(),
                password: "123".into(),
                display_name: "Dr. ALAN FAHMI".into(),
                avatar_url: "https://placehold.co/40x40/7b68ee/ffffff".into(),
            },
            UserAccount {
                role: Role::Receptionist,
                username: "sarah.davis".into(),
                password: "123".into(),
                display_name: "Sarah Davis".into(),
                avatar_url: "https://placehold.co/40x40/2ecc71/ffffff".into(),
            },
            UserAccount {
                role: Role::Dentist,
                username: "jane.doe".into(),
                password: "123".into(),
                display_name: "Dr. Jane Doe".into(),
                avatar_url: "https://placehold.co/40x40/f39c12/ffffff".into(),
            },
        ])
    }

    /// Checks a username/password pair against the table. `None` on
    /// any mismatch; callers must not distinguish which field failed.
    pub fn verify(&self, username: &str, password: &str) -> Option<Role> {
        self.accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
            .map(|a| a.role)
    }

    /// The account backing a role, for header display.
    pub fn account_for(&self, role: Role) -> Option<&UserAccount> {
        self.accounts.iter().find(|a| a.role == role)
    }
}
