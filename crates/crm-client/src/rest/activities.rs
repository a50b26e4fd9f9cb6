//! Activity endpoints

use std::sync::Arc;

use validator::Validate;

use crm_core::domain::{Activity, ActivityForm};
use crm_core::error::DomainError;

use crate::http::ApiClient;

const BASE: &str = "/api/activities";

pub struct ActivityApi {
    client: Arc<ApiClient>,
}

impl ActivityApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Activity>, DomainError> {
        self.client.get(BASE).await
    }

    pub async fn get(&self, activity_id: &str) -> Result<Activity, DomainError> {
        self.client.get(&format!("{}/{}", BASE, activity_id)).await
    }

    pub async fn create(&self, form: &ActivityForm) -> Result<Activity, DomainError> {
        form.validate()?;
        self.client.post(BASE, form).await
    }

    pub async fn update(&self, activity_id: &str, form: &ActivityForm) -> Result<Activity, DomainError> {
        form.validate()?;
        self.client.put(&format!("{}/{}", BASE, activity_id), form).await
    }

    pub async fn delete(&self, activity_id: &str) -> Result<(), DomainError> {
        self.client.delete(&format!("{}/{}", BASE, activity_id)).await
    }
}
