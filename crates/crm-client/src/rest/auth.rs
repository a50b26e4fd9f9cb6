// ============================================================================
// CRM Client - Auth Gateway
// File: crates/crm-client/src/rest/auth.rs
// ============================================================================
//! REST implementation of the authentication port

use std::sync::Arc;

use async_trait::async_trait;

use crm_core::domain::{TokenPair, UserProfile};
use crm_core::error::DomainError;
use crm_core::repositories::AuthApi;

use crate::dto::auth::{CurrentUserResponse, LoginRequest, TokenResponse};
use crate::http::ApiClient;

const LOGIN_PATH: &str = "/api/auth/login";
const ME_PATH: &str = "/api/auth/me";
const LOGOUT_PATH: &str = "/api/auth/logout";

pub struct RestAuthApi {
    client: Arc<ApiClient>,
}

impl RestAuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for RestAuthApi {
    async fn login(&self, user_id: &str, password: &str) -> Result<TokenPair, DomainError> {
        let request = LoginRequest { user_id, password };
        let tokens: TokenResponse = self
            .client
            .post_unauthenticated(LOGIN_PATH, &request)
            .await
            .map_err(|e| match e {
                // A rejected login is bad credentials, not an expired session
                DomainError::Api { status: 401, .. } => DomainError::InvalidCredentials,
                other => other,
            })?;
        Ok(tokens.into())
    }

    async fn current_user(&self, access_token: &str) -> Result<UserProfile, DomainError> {
        let profile: CurrentUserResponse = self.client.get_with_token(ME_PATH, access_token).await?;
        Ok(profile.into())
    }

    async fn logout(&self) -> Result<(), DomainError> {
        self.client.post_empty(LOGOUT_PATH).await
    }
}
