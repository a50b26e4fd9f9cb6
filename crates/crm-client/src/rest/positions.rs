//! Position endpoints

use std::sync::Arc;

use validator::Validate;

use crm_core::domain::{Position, PositionForm};
use crm_core::error::DomainError;

use crate::http::ApiClient;

const BASE: &str = "/api/positions";

pub struct PositionApi {
    client: Arc<ApiClient>,
}

impl PositionApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Position>, DomainError> {
        self.client.get(BASE).await
    }

    pub async fn get(&self, position_id: &str) -> Result<Position, DomainError> {
        self.client.get(&format!("{}/{}", BASE, position_id)).await
    }

    pub async fn create(&self, form: &PositionForm) -> Result<Position, DomainError> {
        form.validate()?;
        self.client.post(BASE, form).await
    }

    pub async fn update(&self, position_id: &str, form: &PositionForm) -> Result<Position, DomainError> {
        form.validate()?;
        self.client.put(&format!("{}/{}", BASE, position_id), form).await
    }

    pub async fn delete(&self, position_id: &str) -> Result<(), DomainError> {
        self.client.delete(&format!("{}/{}", BASE, position_id)).await
    }
}
