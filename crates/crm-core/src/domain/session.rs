//! Authentication session state

use serde::{Deserialize, Serialize};

/// The complete client-side session of a signed-in user.
///
/// Persisted as a single JSON document by the session store. Created on
/// login, updated in place when a token refresh succeeds, removed on logout
/// or irrecoverable refresh failure. This is the sole source of truth for
/// "is a user signed in".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub tenant_id: String,
    pub branch_id: String,
    pub group_id: String,
    pub position_id: String,
    pub role_ids: Vec<String>,
    pub permissions: Vec<String>,
    pub user_id: String,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthSession {
    /// Assemble a session from a fetched profile and the login token pair.
    pub fn from_login(profile: UserProfile, tokens: TokenPair) -> Self {
        Self {
            tenant_id: profile.tenant_id,
            branch_id: profile.branch_id,
            group_id: profile.group_id,
            position_id: profile.position_id,
            role_ids: profile.roles,
            permissions: profile.permissions,
            user_id: profile.user_id,
            username: profile.username,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token.unwrap_or_default(),
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// The identity view handed to UI layers; carries no tokens.
    pub fn to_user(&self) -> User {
        User {
            user_id: self.user_id.clone(),
            username: self.username.clone(),
            tenant_id: self.tenant_id.clone(),
            branch_id: self.branch_id.clone(),
            group_id: self.group_id.clone(),
            position_id: self.position_id.clone(),
            roles: self.role_ids.clone(),
            permissions: self.permissions.clone(),
        }
    }
}

/// Access/refresh token pair returned by login and refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    /// Some backends rotate the refresh token on every refresh; absent means
    /// "keep the current one".
    pub refresh_token: Option<String>,
}

/// Profile attributes of the authenticated user, as fetched after login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: String,
    pub username: String,
    pub tenant_id: String,
    pub branch_id: String,
    pub group_id: String,
    pub position_id: String,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

/// Signed-in user as seen by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub tenant_id: String,
    pub branch_id: String,
    pub group_id: String,
    pub position_id: String,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            user_id: "u-1".into(),
            username: "admin".into(),
            tenant_id: "t-1".into(),
            branch_id: "b-1".into(),
            group_id: "g-1".into(),
            position_id: "p-1".into(),
            roles: vec!["ADMIN".into()],
            permissions: vec!["MENU:DASHBOARD:READ".into()],
        }
    }

    #[test]
    fn test_from_login_keeps_refresh_token_when_absent() {
        let session = AuthSession::from_login(
            profile(),
            TokenPair {
                access_token: "acc".into(),
                refresh_token: None,
            },
        );
        assert_eq!(session.access_token, "acc");
        assert!(session.refresh_token.is_empty());
    }

    #[test]
    fn test_permission_lookup() {
        let session = AuthSession::from_login(
            profile(),
            TokenPair {
                access_token: "acc".into(),
                refresh_token: Some("ref".into()),
            },
        );
        assert!(session.has_permission("MENU:DASHBOARD:READ"));
        assert!(!session.has_permission("MENU:DASHBOARD:DELETE"));
    }
}
