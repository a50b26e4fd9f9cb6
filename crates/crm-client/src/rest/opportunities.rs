//! Opportunity endpoints

use std::sync::Arc;

use validator::Validate;

use crm_core::domain::{Opportunity, OpportunityCreate, OpportunityUpdate};
use crm_core::error::DomainError;

use crate::http::ApiClient;

const BASE: &str = "/api/opportunities";

pub struct OpportunityApi {
    client: Arc<ApiClient>,
}

impl OpportunityApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Opportunity>, DomainError> {
        self.client.get(BASE).await
    }

    pub async fn get(&self, opportunity_id: &str) -> Result<Opportunity, DomainError> {
        self.client.get(&format!("{}/{}", BASE, opportunity_id)).await
    }

    pub async fn create(&self, form: &OpportunityCreate) -> Result<Opportunity, DomainError> {
        form.validate()?;
        self.client.post(BASE, form).await
    }

    pub async fn update(
        &self,
        opportunity_id: &str,
        form: &OpportunityUpdate,
    ) -> Result<Opportunity, DomainError> {
        form.validate()?;
        self.client
            .put(&format!("{}/{}", BASE, opportunity_id), form)
            .await
    }

    pub async fn delete(&self, opportunity_id: &str) -> Result<(), DomainError> {
        self.client
            .delete(&format!("{}/{}", BASE, opportunity_id))
            .await
    }
}
