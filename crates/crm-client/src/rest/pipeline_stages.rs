//! Pipeline stage endpoints

use std::sync::Arc;

use validator::Validate;

use crm_core::domain::{PipelineStage, PipelineStageForm};
use crm_core::error::DomainError;

use crate::http::ApiClient;

const BASE: &str = "/api/pipeline-stages";

pub struct PipelineStageApi {
    client: Arc<ApiClient>,
}

impl PipelineStageApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<PipelineStage>, DomainError> {
        self.client.get(BASE).await
    }

    pub async fn get(&self, stage_id: &str) -> Result<PipelineStage, DomainError> {
        self.client.get(&format!("{}/{}", BASE, stage_id)).await
    }

    pub async fn create(&self, form: &PipelineStageForm) -> Result<PipelineStage, DomainError> {
        form.validate()?;
        self.client.post(BASE, form).await
    }

    pub async fn update(&self, stage_id: &str, form: &PipelineStageForm) -> Result<PipelineStage, DomainError> {
        form.validate()?;
        self.client.put(&format!("{}/{}", BASE, stage_id), form).await
    }

    pub async fn delete(&self, stage_id: &str) -> Result<(), DomainError> {
        self.client.delete(&format!("{}/{}", BASE, stage_id)).await
    }
}
