// ============================================================================
// CRM Core - Authentication Service
// File: crates/crm-core/src/services/auth_service.rs
// ============================================================================
//! Session manager: login, logout, and permission queries

use std::str::FromStr;
use std::sync::Arc;

use tracing::{info, warn};

use crm_shared::constants::MENU_PERMISSION_PREFIX;

use crate::domain::{AuthSession, User};
use crate::error::DomainError;
use crate::repositories::{AuthApi, SessionStore};

/// Action half of a `MENU:<code>:<action>` permission key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuAction {
    #[default]
    Read,
    Create,
    Update,
    Delete,
}

impl MenuAction {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuAction::Read => "READ",
            MenuAction::Create => "CREATE",
            MenuAction::Update => "UPDATE",
            MenuAction::Delete => "DELETE",
        }
    }
}

impl FromStr for MenuAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "READ" => Ok(MenuAction::Read),
            "CREATE" => Ok(MenuAction::Create),
            "UPDATE" => Ok(MenuAction::Update),
            "DELETE" => Ok(MenuAction::Delete),
            other => Err(DomainError::Validation(format!(
                "Unknown menu action: {}",
                other
            ))),
        }
    }
}

/// Process-wide session manager over an injected store and auth gateway.
pub struct AuthService<A: AuthApi, S: SessionStore> {
    api: Arc<A>,
    store: Arc<S>,
}

impl<A: AuthApi, S: SessionStore> AuthService<A, S> {
    pub fn new(api: Arc<A>, store: Arc<S>) -> Self {
        Self { api, store }
    }

    /// Sign in and persist the assembled session.
    ///
    /// No session survives a partial login: if the profile fetch or the
    /// store write fails after the credential exchange, the store is
    /// cleared and the error surfaces unchanged.
    pub async fn login(&self, user_id: &str, password: &str) -> Result<User, DomainError> {
        info!("Login attempt for user: {}", user_id);

        // 1. Exchange credentials for tokens
        let tokens = self.api.login(user_id, password).await.inspect_err(|e| {
            warn!("Login failed for {}: {}", user_id, e);
        })?;

        // 2. Fetch the profile with the fresh access token
        let mut profile = match self.api.current_user(&tokens.access_token).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Login aborted: profile fetch failed for {}: {}", user_id, e);
                self.store.clear();
                return Err(e);
            }
        };
        // Older backends omit identity fields; fall back to the login id
        if profile.user_id.is_empty() {
            profile.user_id = user_id.to_string();
        }
        if profile.username.is_empty() {
            profile.username = user_id.to_string();
        }

        // 3. Assemble and persist
        let session = AuthSession::from_login(profile, tokens);
        if let Err(e) = self.store.save(&session) {
            warn!("Login aborted: session could not be stored: {}", e);
            self.store.clear();
            return Err(e);
        }

        info!("Login successful for: {}", user_id);
        Ok(session.to_user())
    }

    /// Sign out: best-effort remote invalidation, unconditional local clear.
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            warn!("Logout API failed, clearing local session anyway: {}", e);
        }
        self.store.clear();
        info!("Session cleared");
    }

    /// Signed-in user view, straight from the stored session.
    pub fn current_user(&self) -> Option<User> {
        self.store.load().map(|session| session.to_user())
    }

    /// Pure lookup against the stored permission set; signed-out is false.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.store
            .load()
            .map(|session| session.has_permission(permission))
            .unwrap_or(false)
    }

    pub fn has_menu_access(&self, menu_code: &str, action: MenuAction) -> bool {
        let key = format!(
            "{}:{}:{}",
            MENU_PERMISSION_PREFIX,
            menu_code,
            action.as_str()
        );
        self.has_permission(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TokenPair, UserProfile};
    use crate::repositories::auth_api::MockAuthApi;

    /// Stateful store for flow tests; the mockall store cannot carry the
    /// save-then-load sequencing these need.
    #[derive(Default)]
    struct InMemoryStore(std::sync::RwLock<Option<AuthSession>>);

    impl SessionStore for InMemoryStore {
        fn load(&self) -> Option<AuthSession> {
            self.0.read().unwrap().clone()
        }

        fn save(&self, session: &AuthSession) -> Result<(), DomainError> {
            *self.0.write().unwrap() = Some(session.clone());
            Ok(())
        }

        fn clear(&self) {
            *self.0.write().unwrap() = None;
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            user_id: "admin".into(),
            username: "Administrator".into(),
            tenant_id: "t-1".into(),
            branch_id: "b-1".into(),
            group_id: "g-1".into(),
            position_id: "p-1".into(),
            roles: vec!["ADMIN".into()],
            permissions: vec!["MENU:MENUS:READ".into(), "MENU:MENUS:UPDATE".into()],
        }
    }

    fn tokens() -> TokenPair {
        TokenPair {
            access_token: "access-1".into(),
            refresh_token: Some("refresh-1".into()),
        }
    }

    #[tokio::test]
    async fn test_login_persists_session_and_permissions() {
        let mut api = MockAuthApi::new();
        api.expect_login()
            .withf(|u, p| u == "admin" && p == "secret")
            .returning(|_, _| Ok(tokens()));
        api.expect_current_user()
            .withf(|token| token == "access-1")
            .returning(|_| Ok(profile()));

        let store = Arc::new(InMemoryStore::default());
        let service = AuthService::new(Arc::new(api), store.clone());

        let user = service.login("admin", "secret").await.unwrap();
        assert_eq!(user.user_id, "admin");
        assert!(service.has_permission("MENU:MENUS:READ"));
        assert!(!service.has_permission("MENU:MENUS:DELETE"));
        assert_eq!(store.load().unwrap().access_token, "access-1");
    }

    #[tokio::test]
    async fn test_login_rejected_credentials_persist_nothing() {
        let mut api = MockAuthApi::new();
        api.expect_login()
            .returning(|_, _| Err(DomainError::InvalidCredentials));

        let store = Arc::new(InMemoryStore::default());
        let service = AuthService::new(Arc::new(api), store.clone());

        let err = service.login("admin", "wrong").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_login_failed_profile_fetch_clears_store() {
        let mut api = MockAuthApi::new();
        api.expect_login().returning(|_, _| Ok(tokens()));
        api.expect_current_user().returning(|_| {
            Err(DomainError::Api {
                status: 500,
                code: None,
                message: "boom".into(),
            })
        });

        let store = Arc::new(InMemoryStore::default());
        let service = AuthService::new(Arc::new(api), store.clone());

        assert!(service.login("admin", "secret").await.is_err());
        assert!(store.load().is_none());
        assert!(!service.has_permission("MENU:MENUS:READ"));
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_remote_fails() {
        let mut api = MockAuthApi::new();
        api.expect_login().returning(|_, _| Ok(tokens()));
        api.expect_current_user().returning(|_| Ok(profile()));
        api.expect_logout()
            .returning(|| Err(DomainError::Network("connection reset".into())));

        let store = Arc::new(InMemoryStore::default());
        let service = AuthService::new(Arc::new(api), store.clone());

        service.login("admin", "secret").await.unwrap();
        service.logout().await;
        assert!(store.load().is_none());
        assert!(service.current_user().is_none());
    }

    #[tokio::test]
    async fn test_menu_access_key_derivation() {
        let mut api = MockAuthApi::new();
        api.expect_login().returning(|_, _| Ok(tokens()));
        api.expect_current_user().returning(|_| Ok(profile()));

        let service = AuthService::new(Arc::new(api), Arc::new(InMemoryStore::default()));
        service.login("admin", "secret").await.unwrap();

        // Default action is READ
        assert!(service.has_menu_access("MENUS", MenuAction::default()));
        assert!(service.has_menu_access("MENUS", MenuAction::Update));
        assert!(!service.has_menu_access("MENUS", MenuAction::Delete));
        assert!(!service.has_menu_access("TENANTS", MenuAction::Read));
    }

    #[test]
    fn test_menu_action_parse() {
        assert_eq!("read".parse::<MenuAction>().unwrap(), MenuAction::Read);
        assert!("drop".parse::<MenuAction>().is_err());
    }
}
