//! Lead entity and form

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crm_shared::YnFlag;

use super::validation::non_negative;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub lead_id: String,
    pub lead_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub lead_source: Option<String>,
    #[serde(default)]
    pub lead_status: Option<String>,
    #[serde(default)]
    pub lead_score: Option<i32>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub estimated_revenue: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assigned_user_id: Option<String>,
    #[serde(default)]
    pub use_at: YnFlag,
}

/// Shared create/update form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    #[validate(length(min = 1, message = "Lead Name is required"))]
    pub lead_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_status: Option<String>,
    #[validate(range(min = 0, message = "Score must be 0 or greater"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[validate(custom(function = non_negative, message = "Revenue must be positive"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_revenue: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<String>,
    #[serde(default)]
    pub use_at: YnFlag,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn minimal() -> LeadForm {
        serde_json::from_str(r#"{"leadName": "New lead"}"#).unwrap()
    }

    #[test]
    fn test_minimal_form_is_valid() {
        let form = minimal();
        assert!(form.validate().is_ok());
        assert_eq!(form.use_at, YnFlag::Y);
    }

    #[test]
    fn test_negative_revenue_is_rejected() {
        let mut form = minimal();
        form.estimated_revenue = Some(Decimal::from(-5));
        assert!(form.validate().is_err());
    }
}
