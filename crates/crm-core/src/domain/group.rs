//! Group entity and form

use serde::{Deserialize, Serialize};
use validator::Validate;

use crm_shared::YnFlag;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub group_id: String,
    pub group_code: String,
    pub group_name: String,
    #[serde(default)]
    pub group_description: Option<String>,
    pub branch_id: String,
    #[serde(default)]
    pub use_at: YnFlag,
}

/// Shared create/update form; groups always belong to a branch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GroupForm {
    #[validate(length(min = 2, message = "Group Name must be at least 2 characters"))]
    pub group_name: String,
    #[validate(length(min = 2, message = "Group Code must be at least 2 characters"))]
    pub group_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_description: Option<String>,
    #[validate(length(min = 1, message = "Branch is required"))]
    pub branch_id: String,
    #[serde(default)]
    pub use_at: YnFlag,
}
