//! Menu wire DTOs

use serde::{Deserialize, Serialize};

use crm_core::domain::{MenuCreate, MenuRecord, MenuUpdate};
use crm_shared::YnFlag;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub menu_no: i64,
    #[serde(default)]
    pub upper_menu_no: Option<i64>,
    pub menu_code: String,
    pub menu_name: String,
    #[serde(default)]
    pub menu_path: Option<String>,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub menu_order: i32,
    #[serde(default)]
    pub menu_description: Option<String>,
    #[serde(default)]
    pub is_visible: YnFlag,
    #[serde(default)]
    pub is_active: YnFlag,
}

impl From<MenuResponse> for MenuRecord {
    fn from(dto: MenuResponse) -> Self {
        MenuRecord {
            menu_no: dto.menu_no,
            upper_menu_no: dto.upper_menu_no,
            menu_code: dto.menu_code,
            menu_name: dto.menu_name,
            menu_path: dto.menu_path,
            icon_name: dto.icon_name,
            menu_order: dto.menu_order,
            menu_description: dto.menu_description,
            is_visible: dto.is_visible.is_yes(),
            is_active: dto.is_active.is_yes(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreateRequest<'a> {
    pub menu_name: &'a str,
    pub menu_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<&'a str>,
    pub menu_order: i32,
    pub is_visible: YnFlag,
    pub is_active: YnFlag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_menu_no: Option<i64>,
}

impl<'a> From<&'a MenuCreate> for MenuCreateRequest<'a> {
    fn from(form: &'a MenuCreate) -> Self {
        Self {
            menu_name: &form.menu_name,
            menu_code: &form.menu_code,
            menu_path: form.menu_path.as_deref(),
            icon_name: form.icon_name.as_deref(),
            menu_order: form.menu_order,
            is_visible: form.is_visible.into(),
            is_active: form.is_active.into(),
            menu_description: form.menu_description.as_deref(),
            upper_menu_no: form.upper_menu_no,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuUpdateRequest<'a> {
    pub menu_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<&'a str>,
    pub menu_order: i32,
    pub is_visible: YnFlag,
    pub is_active: YnFlag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_description: Option<&'a str>,
}

impl<'a> From<&'a MenuUpdate> for MenuUpdateRequest<'a> {
    fn from(form: &'a MenuUpdate) -> Self {
        Self {
            menu_name: &form.menu_name,
            menu_path: form.menu_path.as_deref(),
            icon_name: form.icon_name.as_deref(),
            menu_order: form.menu_order,
            is_visible: form.is_visible.into(),
            is_active: form.is_active.into(),
            menu_description: form.menu_description.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_flags_parse_into_bools() {
        let dto: MenuResponse = serde_json::from_str(
            r#"{
                "menuNo": 7,
                "upperMenuNo": 1,
                "menuCode": "REPORTS",
                "menuName": "Reports",
                "menuOrder": 20,
                "isVisible": "N",
                "isActive": "Y"
            }"#,
        )
        .unwrap();
        let record: MenuRecord = dto.into();
        assert!(!record.is_visible);
        assert!(record.is_active);
        assert_eq!(record.upper_menu_no, Some(1));
    }

    #[test]
    fn test_create_request_serializes_flags_as_letters() {
        let form = MenuCreate {
            menu_name: "Reports".into(),
            menu_code: "REPORTS".into(),
            menu_path: None,
            icon_name: None,
            menu_order: 10,
            is_visible: true,
            is_active: false,
            menu_description: None,
            upper_menu_no: None,
        };
        let json = serde_json::to_value(MenuCreateRequest::from(&form)).unwrap();
        assert_eq!(json["isVisible"], "Y");
        assert_eq!(json["isActive"], "N");
        assert!(json.get("upperMenuNo").is_none());
    }
}
