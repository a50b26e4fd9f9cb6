//! Branch entity and forms

use serde::{Deserialize, Serialize};
use validator::Validate;

use crm_shared::YnFlag;

/// Branch (office/location). Branches form their own hierarchy through
/// `parent_branch_id`, managed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub branch_id: String,
    pub branch_code: String,
    pub branch_name: String,
    #[serde(default)]
    pub branch_address: Option<String>,
    #[serde(default)]
    pub branch_phone: Option<String>,
    #[serde(default)]
    pub parent_branch_id: Option<String>,
    #[serde(default)]
    pub use_at: YnFlag,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BranchCreate {
    #[validate(length(min = 2, message = "Branch Name must be at least 2 characters"))]
    pub branch_name: String,
    #[validate(length(min = 2, message = "Branch Code must be at least 2 characters"))]
    pub branch_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_branch_id: Option<String>,
    #[serde(default)]
    pub use_at: YnFlag,
}

/// Update form; the branch code is read-only after creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BranchUpdate {
    #[validate(length(min = 2, message = "Branch Name must be at least 2 characters"))]
    pub branch_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_branch_id: Option<String>,
    pub use_at: YnFlag,
}
