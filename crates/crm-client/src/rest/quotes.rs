//! Quote endpoints

use std::sync::Arc;

use validator::Validate;

use crm_core::domain::{Quote, QuoteForm};
use crm_core::error::DomainError;

use crate::http::ApiClient;

const BASE: &str = "/api/quotes";

pub struct QuoteApi {
    client: Arc<ApiClient>,
}

impl QuoteApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Quote>, DomainError> {
        self.client.get(BASE).await
    }

    pub async fn get(&self, quote_id: &str) -> Result<Quote, DomainError> {
        self.client.get(&format!("{}/{}", BASE, quote_id)).await
    }

    pub async fn create(&self, form: &QuoteForm) -> Result<Quote, DomainError> {
        form.validate()?;
        self.client.post(BASE, form).await
    }

    /// Full-document update; the backend replaces line items wholesale.
    pub async fn update(&self, quote_id: &str, form: &QuoteForm) -> Result<Quote, DomainError> {
        form.validate()?;
        self.client.put(&format!("{}/{}", BASE, quote_id), form).await
    }

    pub async fn delete(&self, quote_id: &str) -> Result<(), DomainError> {
        self.client.delete(&format!("{}/{}", BASE, quote_id)).await
    }
}
