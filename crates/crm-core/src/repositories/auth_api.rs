//! Authentication gateway port

use async_trait::async_trait;

use crate::domain::{TokenPair, UserProfile};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a token pair.
    async fn login(&self, user_id: &str, password: &str) -> Result<TokenPair, DomainError>;

    /// Fetch the profile of the bearer of `access_token`.
    async fn current_user(&self, access_token: &str) -> Result<UserProfile, DomainError>;

    /// Invalidate the session server-side.
    async fn logout(&self) -> Result<(), DomainError>;
}
