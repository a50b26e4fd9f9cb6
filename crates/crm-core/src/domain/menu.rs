//! Menu entity and forms

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One navigation entry, flat as persisted by the backend.
///
/// `upper_menu_no` points at the parent entry; `menu_order` positions the
/// entry among its siblings. The hierarchy itself is derived, see
/// [`super::menu_tree::MenuTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub menu_no: i64,
    pub upper_menu_no: Option<i64>,
    pub menu_code: String,
    pub menu_name: String,
    pub menu_path: Option<String>,
    pub icon_name: Option<String>,
    pub menu_order: i32,
    pub menu_description: Option<String>,
    pub is_visible: bool,
    pub is_active: bool,
}

/// Create form. The parent reference is fixed at creation time; moving a
/// menu under a different parent is not supported.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreate {
    #[validate(length(min = 1, message = "Menu name is required"))]
    pub menu_name: String,
    #[validate(length(min = 1, message = "Menu code is required"))]
    pub menu_code: String,
    #[serde(default)]
    pub menu_path: Option<String>,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub menu_order: i32,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub menu_description: Option<String>,
    #[serde(default)]
    pub upper_menu_no: Option<i64>,
}

/// Update form. The menu code is read-only after creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuUpdate {
    #[validate(length(min = 1, message = "Menu name is required"))]
    pub menu_name: String,
    #[serde(default)]
    pub menu_path: Option<String>,
    #[serde(default)]
    pub icon_name: Option<String>,
    pub menu_order: i32,
    pub is_visible: bool,
    pub is_active: bool,
    #[serde(default)]
    pub menu_description: Option<String>,
}

fn default_true() -> bool {
    true
}
