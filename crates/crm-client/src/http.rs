//! Authorized HTTP client with token-refresh middleware
//!
//! Every authorized request runs through [`ApiClient::send`], which owns the
//! single recovery path the backend contract allows: one 401 may trigger one
//! token refresh and one retry of the original request. Concurrent 401s
//! coalesce behind a single in-flight refresh.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crm_core::domain::AuthSession;
use crm_core::error::DomainError;
use crm_core::repositories::SessionStore;
use crm_shared::config::ApiSettings;

use crate::dto::auth::{RefreshRequest, TokenResponse};
use crate::dto::{ApiEnvelope, ApiErrorBody};

const REFRESH_PATH: &str = "/api/auth/refresh";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    /// Single-flight gate for token refresh; holders re-check the stored
    /// token before refreshing so waiters reuse an already-rotated token.
    refresh_gate: Mutex<()>,
}

impl ApiClient {
    pub fn new(
        settings: &ApiSettings,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| DomainError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            store,
            refresh_gate: Mutex::new(()),
        })
    }

    // --- Public surface -----------------------------------------------------

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, DomainError> {
        let response = self.send(Method::GET, path, None).await?;
        parse_data(response).await
    }

    /// GET with an explicit bearer token, bypassing the stored session and
    /// the refresh middleware. Used during login, before a session exists.
    pub async fn get_with_token<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: &str,
    ) -> Result<T, DomainError> {
        let response = self
            .dispatch(&Method::GET, path, None, Some(access_token))
            .await?;
        parse_data(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, DomainError> {
        let body = to_value(body)?;
        let response = self.send(Method::POST, path, Some(body)).await?;
        parse_data(response).await
    }

    /// Authorized POST without a payload, for fire-and-forget endpoints.
    pub async fn post_empty(&self, path: &str) -> Result<(), DomainError> {
        let response = self.send(Method::POST, path, None).await?;
        expect_success(response).await
    }

    /// Unauthenticated POST, bypassing the refresh middleware. Used for the
    /// login exchange itself.
    pub async fn post_unauthenticated<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, DomainError> {
        let body = to_value(body)?;
        let response = self
            .dispatch(&Method::POST, path, Some(&body), None)
            .await?;
        parse_data(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, DomainError> {
        let body = to_value(body)?;
        let response = self.send(Method::PUT, path, Some(body)).await?;
        parse_data(response).await
    }

    /// Authorized PUT whose response carries no payload (bulk operations).
    pub async fn put_no_content<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), DomainError> {
        let body = to_value(body)?;
        let response = self.send(Method::PUT, path, Some(body)).await?;
        expect_success(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), DomainError> {
        let response = self.send(Method::DELETE, path, None).await?;
        expect_success(response).await
    }

    // --- Refresh middleware -------------------------------------------------

    /// Send an authorized request, recovering at most once from a 401 by
    /// refreshing the access token and re-issuing the identical request
    /// with the new bearer. A failed refresh clears the session.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Response, DomainError> {
        let token = self
            .store
            .load()
            .map(|session| session.access_token)
            .ok_or(DomainError::NotAuthenticated)?;

        let response = self
            .dispatch(&method, path, body.as_ref(), Some(&token))
            .await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        warn!("Access token rejected, attempting refresh");
        match self.refresh_access_token(&token).await {
            Ok(fresh) => {
                info!("Token refresh successful, retrying request");
                // Same method, path, and body; only the bearer changes.
                self.dispatch(&method, path, body.as_ref(), Some(&fresh))
                    .await
            }
            Err(e) => {
                warn!("Token refresh failed, clearing session: {}", e);
                self.store.clear();
                Err(DomainError::SessionExpired)
            }
        }
    }

    /// Rotate the access token using the stored refresh token.
    ///
    /// Callers that lose the single-flight race return the token their
    /// competitor stored instead of refreshing again. Transport errors are
    /// indistinguishable from rejection to the caller, by contract.
    async fn refresh_access_token(&self, stale_token: &str) -> Result<String, DomainError> {
        let _gate = self.refresh_gate.lock().await;

        let session = self.store.load().ok_or(DomainError::NotAuthenticated)?;
        if session.access_token != stale_token {
            debug!("Token already rotated by a concurrent request");
            return Ok(session.access_token);
        }
        if session.refresh_token.is_empty() {
            return Err(DomainError::SessionExpired);
        }

        let request = RefreshRequest {
            refresh_token: &session.refresh_token,
        };
        let body = to_value(&request)?;
        // The expired access token still identifies the session server-side.
        let response = self
            .dispatch(&Method::POST, REFRESH_PATH, Some(&body), Some(stale_token))
            .await?;
        let tokens: TokenResponse = parse_data(response).await?;

        let updated = AuthSession {
            access_token: tokens.access_token,
            refresh_token: tokens
                .refresh_token
                .unwrap_or_else(|| session.refresh_token.clone()),
            ..session
        };
        self.store.save(&updated)?;
        Ok(updated.access_token)
    }

    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Response, DomainError> {
        let mut request = self
            .http
            .request(method.clone(), format!("{}{}", self.base_url, path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))
    }
}

fn to_value<B: Serialize>(body: &B) -> Result<Value, DomainError> {
    serde_json::to_value(body).map_err(|e| DomainError::InvalidResponse(e.to_string()))
}

/// Unwrap `data` from a successful envelope; surface backend errors as-is.
async fn parse_data<T: DeserializeOwned>(response: Response) -> Result<T, DomainError> {
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(response).await);
    }
    let envelope: ApiEnvelope<T> = response
        .json()
        .await
        .map_err(|e| DomainError::InvalidResponse(e.to_string()))?;
    envelope
        .data
        .ok_or_else(|| DomainError::InvalidResponse(format!("response {} carried no data", status)))
}

/// Like [`parse_data`] for endpoints whose success payload is meaningless.
async fn expect_success(response: Response) -> Result<(), DomainError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}

/// Read the backend's error envelope out of a failed response.
async fn api_error(response: Response) -> DomainError {
    let status = response.status().as_u16();
    let fallback = response
        .status()
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string();
    let body: Option<ApiEnvelope<Value>> = response.json().await.ok();
    let (code, message) = match body.and_then(|envelope| envelope.error) {
        Some(ApiErrorBody { code, message }) => (code, message),
        None => (None, None),
    };
    DomainError::Api {
        status,
        code,
        message: message.unwrap_or(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use serde::Deserialize;
    use wiremock::matchers::{body_json, header, method as http_method, path as url_path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Widget {
        name: String,
    }

    fn session(access: &str, refresh: &str) -> AuthSession {
        AuthSession {
            tenant_id: "t-1".into(),
            branch_id: "b-1".into(),
            group_id: "g-1".into(),
            position_id: "p-1".into(),
            role_ids: vec![],
            permissions: vec!["MENU:MENUS:READ".into()],
            user_id: "admin".into(),
            username: "Administrator".into(),
            access_token: access.into(),
            refresh_token: refresh.into(),
        }
    }

    fn client_for(server: &MockServer, store: Arc<MemorySessionStore>) -> ApiClient {
        let settings = ApiSettings {
            base_url: server.uri(),
            timeout_seconds: 5,
        };
        ApiClient::new(&settings, store).unwrap()
    }

    fn widget_body() -> serde_json::Value {
        serde_json::json!({"success": true, "data": {"name": "w"}})
    }

    fn token_body(access: &str, refresh: &str) -> serde_json::Value {
        serde_json::json!({
            "success": true,
            "data": {"accessToken": access, "refreshToken": refresh}
        })
    }

    #[tokio::test]
    async fn test_authorized_get_carries_bearer() {
        let server = MockServer::start().await;
        Mock::given(http_method("GET"))
            .and(url_path("/api/widgets"))
            .and(header("authorization", "Bearer acc-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(widget_body()))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(MemorySessionStore::new());
        store.save(&session("acc-1", "ref-1")).unwrap();
        let client = client_for(&server, store);

        let widget: Widget = client.get("/api/widgets").await.unwrap();
        assert_eq!(widget.name, "w");
    }

    #[tokio::test]
    async fn test_request_without_session_never_hits_the_wire() {
        let server = MockServer::start().await;
        let client = client_for(&server, Arc::new(MemorySessionStore::new()));

        let err = client.get::<Widget>("/api/widgets").await.unwrap_err();
        assert!(matches!(err, DomainError::NotAuthenticated));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_one_401_refreshes_and_retries_once() {
        let server = MockServer::start().await;
        Mock::given(http_method("GET"))
            .and(url_path("/api/widgets"))
            .and(header("authorization", "Bearer stale"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(http_method("POST"))
            .and(url_path("/api/auth/refresh"))
            .and(header("authorization", "Bearer stale"))
            .and(body_json(serde_json::json!({"refreshToken": "ref-1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("acc-2", "ref-2")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(http_method("GET"))
            .and(url_path("/api/widgets"))
            .and(header("authorization", "Bearer acc-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(widget_body()))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(MemorySessionStore::new());
        store.save(&session("stale", "ref-1")).unwrap();
        let client = client_for(&server, store.clone());

        let widget: Widget = client.get("/api/widgets").await.unwrap();
        assert_eq!(widget.name, "w");

        // Both tokens rotated in place
        let stored = store.load().unwrap();
        assert_eq!(stored.access_token, "acc-2");
        assert_eq!(stored.refresh_token, "ref-2");
    }

    #[tokio::test]
    async fn test_failed_refresh_clears_session() {
        let server = MockServer::start().await;
        Mock::given(http_method("GET"))
            .and(url_path("/api/widgets"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(http_method("POST"))
            .and(url_path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(MemorySessionStore::new());
        store.save(&session("stale", "ref-1")).unwrap();
        let client = client_for(&server, store.clone());

        let err = client.get::<Widget>("/api/widgets").await.unwrap_err();
        assert!(matches!(err, DomainError::SessionExpired));
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_second_401_surfaces_without_another_refresh() {
        let server = MockServer::start().await;
        Mock::given(http_method("GET"))
            .and(url_path("/api/widgets"))
            .respond_with(ResponseTemplate::new(401))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(http_method("POST"))
            .and(url_path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("acc-2", "ref-2")))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(MemorySessionStore::new());
        store.save(&session("stale", "ref-1")).unwrap();
        let client = client_for(&server, store.clone());

        let err = client.get::<Widget>("/api/widgets").await.unwrap_err();
        assert!(matches!(err, DomainError::Api { status: 401, .. }));
        // The refreshed session survives; only refresh failures clear it
        assert_eq!(store.load().unwrap().access_token, "acc-2");
    }

    #[tokio::test]
    async fn test_concurrent_401s_coalesce_into_one_refresh() {
        let server = MockServer::start().await;
        Mock::given(http_method("GET"))
            .and(url_path("/api/widgets"))
            .and(header("authorization", "Bearer stale"))
            .respond_with(ResponseTemplate::new(401))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(http_method("POST"))
            .and(url_path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("acc-2", "ref-2")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(http_method("GET"))
            .and(url_path("/api/widgets"))
            .and(header("authorization", "Bearer acc-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(widget_body()))
            .expect(2)
            .mount(&server)
            .await;

        let store = Arc::new(MemorySessionStore::new());
        store.save(&session("stale", "ref-1")).unwrap();
        let client = client_for(&server, store);

        let (a, b) = tokio::join!(
            client.get::<Widget>("/api/widgets"),
            client.get::<Widget>("/api/widgets")
        );
        assert!(a.is_ok());
        assert!(b.is_ok());
    }

    #[tokio::test]
    async fn test_backend_error_envelope_is_surfaced_as_is() {
        let server = MockServer::start().await;
        Mock::given(http_method("POST"))
            .and(url_path("/api/widgets"))
            .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "success": false,
                "error": {"code": "DUPLICATE", "message": "Widget already exists"}
            })))
            .mount(&server)
            .await;

        let store = Arc::new(MemorySessionStore::new());
        store.save(&session("acc-1", "ref-1")).unwrap();
        let client = client_for(&server, store);

        let err = client
            .post::<_, Widget>("/api/widgets", &serde_json::json!({"name": "w"}))
            .await
            .unwrap_err();
        match err {
            DomainError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 409);
                assert_eq!(code.as_deref(), Some("DUPLICATE"));
                assert_eq!(message, "Widget already exists");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unauthenticated_post_skips_refresh_flow() {
        let server = MockServer::start().await;
        Mock::given(http_method("POST"))
            .and(url_path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Arc::new(MemorySessionStore::new()));
        let err = client
            .post_unauthenticated::<_, Widget>(
                "/api/auth/login",
                &serde_json::json!({"userId": "u", "password": "p"}),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Api { status: 401, .. }));
    }
}
