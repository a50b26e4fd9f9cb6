//! Group endpoints

use std::sync::Arc;

use validator::Validate;

use crm_core::domain::{Group, GroupForm};
use crm_core::error::DomainError;

use crate::http::ApiClient;

const BASE: &str = "/api/groups";

pub struct GroupApi {
    client: Arc<ApiClient>,
}

impl GroupApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Group>, DomainError> {
        self.client.get(BASE).await
    }

    pub async fn get(&self, group_id: &str) -> Result<Group, DomainError> {
        self.client.get(&format!("{}/{}", BASE, group_id)).await
    }

    pub async fn create(&self, form: &GroupForm) -> Result<Group, DomainError> {
        form.validate()?;
        self.client.post(BASE, form).await
    }

    pub async fn update(&self, group_id: &str, form: &GroupForm) -> Result<Group, DomainError> {
        form.validate()?;
        self.client.put(&format!("{}/{}", BASE, group_id), form).await
    }

    pub async fn delete(&self, group_id: &str) -> Result<(), DomainError> {
        self.client.delete(&format!("{}/{}", BASE, group_id)).await
    }
}
