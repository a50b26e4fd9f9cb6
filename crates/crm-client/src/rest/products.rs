//! Product endpoints

use std::sync::Arc;

use validator::Validate;

use crm_core::domain::{Product, ProductForm};
use crm_core::error::DomainError;

use crate::http::ApiClient;

const BASE: &str = "/api/products";

pub struct ProductApi {
    client: Arc<ApiClient>,
}

impl ProductApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.client.get(BASE).await
    }

    pub async fn get(&self, product_id: &str) -> Result<Product, DomainError> {
        self.client.get(&format!("{}/{}", BASE, product_id)).await
    }

    pub async fn create(&self, form: &ProductForm) -> Result<Product, DomainError> {
        form.validate()?;
        self.client.post(BASE, form).await
    }

    pub async fn update(&self, product_id: &str, form: &ProductForm) -> Result<Product, DomainError> {
        form.validate()?;
        self.client.put(&format!("{}/{}", BASE, product_id), form).await
    }

    pub async fn delete(&self, product_id: &str) -> Result<(), DomainError> {
        self.client.delete(&format!("{}/{}", BASE, product_id)).await
    }
}
