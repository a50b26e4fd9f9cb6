//! Position entity and form

use serde::{Deserialize, Serialize};
use validator::Validate;

use crm_shared::YnFlag;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub position_id: String,
    pub position_code: String,
    pub position_name: String,
    pub position_level: i32,
    #[serde(default)]
    pub position_description: Option<String>,
    #[serde(default)]
    pub use_at: YnFlag,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PositionForm {
    #[validate(length(min = 1, message = "Position Name is required"))]
    pub position_name: String,
    #[validate(length(min = 1, message = "Position Code is required"))]
    pub position_code: String,
    #[validate(range(min = 0, message = "Level must be 0 or greater"))]
    pub position_level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_description: Option<String>,
    #[serde(default)]
    pub use_at: YnFlag,
}
