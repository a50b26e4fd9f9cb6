//! User management endpoints

use std::sync::Arc;

use validator::Validate;

use crm_core::domain::{UserAccount, UserCreate, UserUpdate};
use crm_core::error::DomainError;

use crate::http::ApiClient;

const BASE: &str = "/api/users";

pub struct UserApi {
    client: Arc<ApiClient>,
}

impl UserApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<UserAccount>, DomainError> {
        self.client.get(BASE).await
    }

    pub async fn get(&self, user_id: &str) -> Result<UserAccount, DomainError> {
        self.client.get(&format!("{}/{}", BASE, user_id)).await
    }

    pub async fn create(&self, form: &UserCreate) -> Result<UserAccount, DomainError> {
        form.validate()?;
        self.client.post(BASE, form).await
    }

    pub async fn update(&self, user_id: &str, form: &UserUpdate) -> Result<UserAccount, DomainError> {
        form.validate()?;
        self.client.put(&format!("{}/{}", BASE, user_id), form).await
    }

    pub async fn delete(&self, user_id: &str) -> Result<(), DomainError> {
        self.client.delete(&format!("{}/{}", BASE, user_id)).await
    }
}
