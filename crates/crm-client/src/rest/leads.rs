//! Lead endpoints

use std::sync::Arc;

use validator::Validate;

use crm_core::domain::{Lead, LeadForm};
use crm_core::error::DomainError;

use crate::http::ApiClient;

const BASE: &str = "/api/leads";

pub struct LeadApi {
    client: Arc<ApiClient>,
}

impl LeadApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Lead>, DomainError> {
        self.client.get(BASE).await
    }

    pub async fn get(&self, lead_id: &str) -> Result<Lead, DomainError> {
        self.client.get(&format!("{}/{}", BASE, lead_id)).await
    }

    pub async fn create(&self, form: &LeadForm) -> Result<Lead, DomainError> {
        form.validate()?;
        self.client.post(BASE, form).await
    }

    pub async fn update(&self, lead_id: &str, form: &LeadForm) -> Result<Lead, DomainError> {
        form.validate()?;
        self.client.put(&format!("{}/{}", BASE, lead_id), form).await
    }

    pub async fn delete(&self, lead_id: &str) -> Result<(), DomainError> {
        self.client.delete(&format!("{}/{}", BASE, lead_id)).await
    }
}
