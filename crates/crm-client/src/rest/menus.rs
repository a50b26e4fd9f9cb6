// ============================================================================
// CRM Client - Menu Gateway
// File: crates/crm-client/src/rest/menus.rs
// ============================================================================
//! REST implementation of the menu port

use std::sync::Arc;

use async_trait::async_trait;

use crm_core::domain::{MenuCreate, MenuOrderChange, MenuRecord, MenuUpdate};
use crm_core::error::DomainError;
use crm_core::repositories::MenuApi;

use crate::dto::menu::{MenuCreateRequest, MenuResponse, MenuUpdateRequest};
use crate::http::ApiClient;

const BASE: &str = "/api/menus";

pub struct RestMenuApi {
    client: Arc<ApiClient>,
}

impl RestMenuApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MenuApi for RestMenuApi {
    async fn list_all(&self) -> Result<Vec<MenuRecord>, DomainError> {
        let menus: Vec<MenuResponse> = self.client.get(BASE).await?;
        Ok(menus.into_iter().map(Into::into).collect())
    }

    async fn list_visible(&self) -> Result<Vec<MenuRecord>, DomainError> {
        let menus: Vec<MenuResponse> = self.client.get(&format!("{}/visible", BASE)).await?;
        Ok(menus.into_iter().map(Into::into).collect())
    }

    async fn get(&self, menu_no: i64) -> Result<MenuRecord, DomainError> {
        let menu: MenuResponse = self.client.get(&format!("{}/{}", BASE, menu_no)).await?;
        Ok(menu.into())
    }

    async fn create(&self, form: &MenuCreate) -> Result<MenuRecord, DomainError> {
        let menu: MenuResponse = self
            .client
            .post(BASE, &MenuCreateRequest::from(form))
            .await?;
        Ok(menu.into())
    }

    async fn update(&self, menu_no: i64, form: &MenuUpdate) -> Result<MenuRecord, DomainError> {
        let menu: MenuResponse = self
            .client
            .put(&format!("{}/{}", BASE, menu_no), &MenuUpdateRequest::from(form))
            .await?;
        Ok(menu.into())
    }

    async fn delete(&self, menu_no: i64) -> Result<(), DomainError> {
        self.client.delete(&format!("{}/{}", BASE, menu_no)).await
    }

    async fn reorder(&self, changes: &[MenuOrderChange]) -> Result<(), DomainError> {
        self.client
            .put_no_content(&format!("{}/reorder", BASE), &changes)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use crm_core::domain::AuthSession;
    use crm_core::repositories::SessionStore;
    use crm_shared::config::ApiSettings;
    use wiremock::matchers::{body_json, method as http_method, path as url_path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn signed_in_api(server: &MockServer) -> RestMenuApi {
        let store = Arc::new(MemorySessionStore::new());
        store
            .save(&AuthSession {
                tenant_id: "t-1".into(),
                branch_id: "b-1".into(),
                group_id: "g-1".into(),
                position_id: "p-1".into(),
                role_ids: vec![],
                permissions: vec![],
                user_id: "admin".into(),
                username: "Administrator".into(),
                access_token: "acc".into(),
                refresh_token: "ref".into(),
            })
            .unwrap();
        let settings = ApiSettings {
            base_url: server.uri(),
            timeout_seconds: 5,
        };
        RestMenuApi::new(Arc::new(ApiClient::new(&settings, store).unwrap()))
    }

    #[tokio::test]
    async fn test_list_parses_flags_into_records() {
        let server = MockServer::start().await;
        Mock::given(http_method("GET"))
            .and(url_path("/api/menus"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": [
                    {"menuNo": 1, "menuCode": "HOME", "menuName": "Home",
                     "menuOrder": 10, "isVisible": "Y", "isActive": "Y"},
                    {"menuNo": 2, "upperMenuNo": 1, "menuCode": "SUB", "menuName": "Sub",
                     "menuOrder": 20, "isVisible": "N", "isActive": "Y"}
                ]
            })))
            .mount(&server)
            .await;

        let api = signed_in_api(&server).await;
        let menus = api.list_all().await.unwrap();
        assert_eq!(menus.len(), 2);
        assert!(menus[0].is_visible);
        assert!(!menus[1].is_visible);
        assert_eq!(menus[1].upper_menu_no, Some(1));
    }

    #[tokio::test]
    async fn test_reorder_sends_the_contract_payload() {
        let server = MockServer::start().await;
        Mock::given(http_method("PUT"))
            .and(url_path("/api/menus/reorder"))
            .and(body_json(serde_json::json!([
                {"menuNo": 12, "menuOrder": 10, "upperMenuNo": 1},
                {"menuNo": 10, "menuOrder": 20, "upperMenuNo": 1}
            ])))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = signed_in_api(&server).await;
        let changes = vec![
            MenuOrderChange {
                menu_no: 12,
                menu_order: 10,
                upper_menu_no: Some(1),
            },
            MenuOrderChange {
                menu_no: 10,
                menu_order: 20,
                upper_menu_no: Some(1),
            },
        ];
        api.reorder(&changes).await.unwrap();
    }
}
