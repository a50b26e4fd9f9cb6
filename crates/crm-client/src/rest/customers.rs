//! Customer endpoints

use std::sync::Arc;

use validator::Validate;

use crm_core::domain::{Customer, CustomerForm};
use crm_core::error::DomainError;

use crate::http::ApiClient;

const BASE: &str = "/api/customers";

pub struct CustomerApi {
    client: Arc<ApiClient>,
}

impl CustomerApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Customer>, DomainError> {
        self.client.get(BASE).await
    }

    pub async fn get(&self, customer_id: &str) -> Result<Customer, DomainError> {
        self.client.get(&format!("{}/{}", BASE, customer_id)).await
    }

    pub async fn create(&self, form: &CustomerForm) -> Result<Customer, DomainError> {
        form.validate()?;
        self.client.post(BASE, form).await
    }

    pub async fn update(&self, customer_id: &str, form: &CustomerForm) -> Result<Customer, DomainError> {
        form.validate()?;
        self.client.put(&format!("{}/{}", BASE, customer_id), form).await
    }

    pub async fn delete(&self, customer_id: &str) -> Result<(), DomainError> {
        self.client.delete(&format!("{}/{}", BASE, customer_id)).await
    }
}
