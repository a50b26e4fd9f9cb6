//! Tenant endpoints

use std::sync::Arc;

use validator::Validate;

use crm_core::domain::{Tenant, TenantCreate, TenantUpdate};
use crm_core::error::DomainError;

use crate::http::ApiClient;

const BASE: &str = "/api/tenants";

pub struct TenantApi {
    client: Arc<ApiClient>,
}

impl TenantApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Tenant>, DomainError> {
        self.client.get(BASE).await
    }

    pub async fn get(&self, tenant_id: &str) -> Result<Tenant, DomainError> {
        self.client.get(&format!("{}/{}", BASE, tenant_id)).await
    }

    pub async fn create(&self, form: &TenantCreate) -> Result<Tenant, DomainError> {
        form.validate()?;
        self.client.post(BASE, form).await
    }

    pub async fn update(&self, tenant_id: &str, form: &TenantUpdate) -> Result<Tenant, DomainError> {
        form.validate()?;
        self.client.put(&format!("{}/{}", BASE, tenant_id), form).await
    }

    pub async fn delete(&self, tenant_id: &str) -> Result<(), DomainError> {
        self.client.delete(&format!("{}/{}", BASE, tenant_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use crm_shared::config::ApiSettings;
    use crm_shared::YnFlag;
    use wiremock::MockServer;

    #[tokio::test]
    async fn test_invalid_form_never_reaches_the_wire() {
        let server = MockServer::start().await;
        let settings = ApiSettings {
            base_url: server.uri(),
            timeout_seconds: 5,
        };
        let api = TenantApi::new(Arc::new(
            ApiClient::new(&settings, Arc::new(MemorySessionStore::new())).unwrap(),
        ));

        let form = TenantCreate {
            tenant_id: String::new(),
            tenant_name: "Acme".into(),
            tenant_description: None,
            use_at: YnFlag::Y,
        };
        let err = api.create(&form).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
