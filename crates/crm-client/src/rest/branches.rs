//! Branch endpoints

use std::sync::Arc;

use validator::Validate;

use crm_core::domain::{Branch, BranchCreate, BranchUpdate};
use crm_core::error::DomainError;

use crate::http::ApiClient;

const BASE: &str = "/api/branches";

pub struct BranchApi {
    client: Arc<ApiClient>,
}

impl BranchApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Branch>, DomainError> {
        self.client.get(BASE).await
    }

    pub async fn get(&self, branch_id: &str) -> Result<Branch, DomainError> {
        self.client.get(&format!("{}/{}", BASE, branch_id)).await
    }

    pub async fn create(&self, form: &BranchCreate) -> Result<Branch, DomainError> {
        form.validate()?;
        self.client.post(BASE, form).await
    }

    pub async fn update(&self, branch_id: &str, form: &BranchUpdate) -> Result<Branch, DomainError> {
        form.validate()?;
        self.client.put(&format!("{}/{}", BASE, branch_id), form).await
    }

    pub async fn delete(&self, branch_id: &str) -> Result<(), DomainError> {
        self.client.delete(&format!("{}/{}", BASE, branch_id)).await
    }
}
