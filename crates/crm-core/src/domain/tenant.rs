//! Tenant entity and forms

use serde::{Deserialize, Serialize};
use validator::Validate;

use crm_shared::YnFlag;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub tenant_id: String,
    pub tenant_name: String,
    #[serde(default)]
    pub tenant_description: Option<String>,
    #[serde(default)]
    pub use_at: YnFlag,
}

/// Create form; the tenant id is operator-chosen and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TenantCreate {
    #[validate(length(min = 1, message = "Tenant ID is required"))]
    pub tenant_id: String,
    #[validate(length(min = 1, message = "Tenant Name is required"))]
    pub tenant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_description: Option<String>,
    #[serde(default)]
    pub use_at: YnFlag,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TenantUpdate {
    #[validate(length(min = 1, message = "Tenant Name is required"))]
    pub tenant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_description: Option<String>,
    #[serde(default)]
    pub use_at: YnFlag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_id_and_name() {
        let form = TenantCreate {
            tenant_id: String::new(),
            tenant_name: "Acme".into(),
            tenant_description: None,
            use_at: YnFlag::Y,
        };
        assert!(form.validate().is_err());
    }
}
