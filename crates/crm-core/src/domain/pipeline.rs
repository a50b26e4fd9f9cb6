//! Pipeline stage entity and form

use serde::{Deserialize, Serialize};
use validator::Validate;

use crm_shared::YnFlag;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStage {
    pub stage_id: String,
    pub stage_code: String,
    pub stage_name: String,
    #[serde(default)]
    pub stage_order: Option<i32>,
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default)]
    pub stage_color: Option<String>,
    #[serde(default = "YnFlag::default_no")]
    pub is_won: YnFlag,
    #[serde(default = "YnFlag::default_no")]
    pub is_lost: YnFlag,
    #[serde(default)]
    pub use_at: YnFlag,
}

/// Shared create/update form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStageForm {
    #[validate(length(min = 1, message = "Stage Name is required"))]
    pub stage_name: String,
    #[validate(length(min = 1, message = "Stage Code is required"))]
    pub stage_code: String,
    #[validate(range(min = 0, message = "Order must be a positive number"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_order: Option<i32>,
    #[validate(range(min = 0.0, max = 100.0, message = "Probability must be between 0 and 100"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_color: Option<String>,
    #[serde(default = "YnFlag::default_no")]
    pub is_won: YnFlag,
    #[serde(default = "YnFlag::default_no")]
    pub is_lost: YnFlag,
    #[serde(default)]
    pub use_at: YnFlag,
}
