//! Activity entity and form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crm_shared::YnFlag;

/// Activity: a call, email, meeting, or task attached to another record
/// through `related_type`/`related_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub activity_id: String,
    pub activity_subject: String,
    pub activity_type: String,
    #[serde(default)]
    pub activity_description: Option<String>,
    pub activity_status: String,
    pub priority: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub related_type: Option<String>,
    #[serde(default)]
    pub related_id: Option<String>,
    #[serde(default)]
    pub assigned_user_id: Option<String>,
    #[serde(default)]
    pub use_at: YnFlag,
}

/// Shared create/update form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityForm {
    #[validate(length(min = 1, message = "Subject is required"))]
    pub activity_subject: String,
    #[validate(length(min = 1, message = "Type is required"))]
    pub activity_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_description: Option<String>,
    #[serde(default = "default_status")]
    pub activity_status: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<String>,
    #[serde(default)]
    pub use_at: YnFlag,
}

fn default_status() -> String {
    "PENDING".to_string()
}

fn default_priority() -> String {
    "MEDIUM".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_status_and_priority() {
        let form: ActivityForm =
            serde_json::from_str(r#"{"activitySubject": "Kickoff call", "activityType": "CALL"}"#)
                .unwrap();
        assert!(form.validate().is_ok());
        assert_eq!(form.activity_status, "PENDING");
        assert_eq!(form.priority, "MEDIUM");
    }
}
