//! Authentication wire DTOs

use serde::{Deserialize, Serialize};

use crm_core::domain::{TokenPair, UserProfile};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub user_id: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl From<TokenResponse> for TokenPair {
    fn from(dto: TokenResponse) -> Self {
        TokenPair {
            access_token: dto.access_token,
            refresh_token: dto.refresh_token,
        }
    }
}

/// Profile payload of the current-user endpoint. The backend has emitted
/// both camelCase and snake_case spellings over time, so every field takes
/// the alias; identity fields default to empty and are backfilled by the
/// session manager.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    #[serde(default, alias = "user_id")]
    pub user_id: String,
    #[serde(default, alias = "user_name", alias = "username")]
    pub user_name: String,
    #[serde(default, alias = "tenant_id")]
    pub tenant_id: String,
    #[serde(default, alias = "branch_id")]
    pub branch_id: String,
    #[serde(default, alias = "group_id")]
    pub group_id: String,
    #[serde(default, alias = "position_id")]
    pub position_id: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl From<CurrentUserResponse> for UserProfile {
    fn from(dto: CurrentUserResponse) -> Self {
        UserProfile {
            user_id: dto.user_id,
            username: dto.user_name,
            tenant_id: dto.tenant_id,
            branch_id: dto.branch_id,
            group_id: dto.group_id,
            position_id: dto.position_id,
            roles: dto.roles,
            permissions: dto.permissions,
        }
    }
}
