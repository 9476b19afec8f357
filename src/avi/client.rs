//! HTTP client for the Avi controller session API

use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::api;
use crate::error::{AviError, Result};

use super::models::{CollectionPage, LoginResponse};
use super::pager::ObjectPager;
use super::query::ObjectQuery;

/// Session against one Avi controller
///
/// Authentication is cookie-based: `login` establishes the session cookie in
/// the client's store and captures the csrftoken needed for non-GET requests.
pub struct AviClient {
    client: Client,
    controller: String,
    tenant: String,
    /// API version pinned on every request once known
    version: Option<String>,
    /// csrftoken cookie captured at login
    csrf_token: Option<String>,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl AviClient {
    /// Create a new client for the given controller
    ///
    /// Controllers ship self-signed certificates, so certificate validation
    /// is disabled, matching the behavior of the other Avi tooling.
    pub fn new(controller: &str, tenant: &str) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(true)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            controller: controller.to_string(),
            tenant: tenant.to_string(),
            version: None,
            csrf_token: None,
            base_url_override: None,
        })
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn test_client(base_url: &str) -> Self {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("client builder");

        Self {
            client,
            controller: "test-controller".to_string(),
            tenant: "admin".to_string(),
            version: None,
            csrf_token: None,
            base_url_override: Some(base_url.trim_end_matches('/').to_string()),
        }
    }

    /// Build the base URL for requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!("https://{}", self.controller)
    }

    /// API version this session is pinned to, or the one the server reported
    pub fn remote_version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Open a session, optionally pinned to an API version
    pub async fn login(&mut self, user: &str, password: &str, version: Option<&str>) -> Result<()> {
        let url = format!("{}{}", self.base_url(), api::LOGIN_PATH);
        debug!("Logging in to {} as {}", url, user);

        let mut request = self.client.post(&url).json(&serde_json::json!({
            "username": user,
            "password": password,
        }));
        if let Some(v) = version {
            request = request.header("X-Avi-Version", v);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(AviError::Auth(format!(
                "login rejected for {}@{} (status {})",
                user,
                self.controller,
                response.status().as_u16()
            )));
        }

        self.csrf_token = response
            .cookies()
            .find(|c| c.name() == "csrftoken")
            .map(|c| c.value().to_string());

        let body: LoginResponse = response.json().await?;
        // An explicitly pinned version wins over the server-reported one
        self.version = version
            .map(str::to_string)
            .or(body.version.map(|v| v.version));

        Ok(())
    }

    /// Close the session
    ///
    /// The controller requires the csrftoken and a Referer on the logout POST.
    pub async fn logout(&self) -> Result<()> {
        let url = format!("{}{}", self.base_url(), api::LOGOUT_PATH);
        let mut request = self.client.post(&url).header("Referer", self.base_url());
        if let Some(token) = &self.csrf_token {
            request = request.header("X-CSRFToken", token);
        }

        let response = request.send().await?;
        debug!("Logout returned status {}", response.status().as_u16());
        Ok(())
    }

    /// Open an unpinned session, read the controller's version, close the session
    pub async fn probe_version(&mut self, user: &str, password: &str) -> Result<String> {
        self.login(user, password, None).await?;
        let version = self
            .remote_version()
            .map(str::to_string)
            .ok_or_else(|| AviError::Api {
                status: 200,
                message: "login response did not report a controller version".to_string(),
            })?;
        self.logout().await?;
        Ok(version)
    }

    /// Start a lazy listing of objects matching the query
    ///
    /// The returned pager is single-pass; issue a fresh query to re-iterate.
    pub fn list_objects<'a>(&'a self, query: &ObjectQuery<'_>) -> ObjectPager<'a> {
        let first_url = format!("{}{}", self.base_url(), query.to_path());
        ObjectPager::new(self, first_url)
    }

    /// Fetch one collection page from an absolute URL
    pub(crate) async fn get_collection_page(&self, url: &str) -> Result<CollectionPage> {
        debug!("Fetching {}", url);

        let mut request = self.client.get(url).header("X-Avi-Tenant", &self.tenant);
        if let Some(v) = &self.version {
            request = request.header("X-Avi-Version", v);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(AviError::Api {
                status: response.status().as_u16(),
                message: format!("failed to list objects from {}", url),
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_reads_server_version_and_csrf_cookie() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(serde_json::json!({
                "username": "admin",
                "password": "secret"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "csrftoken=tok123; Path=/")
                    .set_body_json(serde_json::json!({
                        "version": {"Version": "22.1.1"}
                    })),
            )
            .mount(&mock_server)
            .await;

        let mut client = AviClient::test_client(&mock_server.uri());
        client.login("admin", "secret", None).await.unwrap();

        assert_eq!(client.remote_version(), Some("22.1.1"));
        assert_eq!(client.csrf_token.as_deref(), Some("tok123"));
    }

    #[tokio::test]
    async fn test_login_pinned_version_wins() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .and(header("X-Avi-Version", "21.1.4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "version": {"Version": "22.1.1"}
            })))
            .mount(&mock_server)
            .await;

        let mut client = AviClient::test_client(&mock_server.uri());
        client.login("admin", "secret", Some("21.1.4")).await.unwrap();

        assert_eq!(client.remote_version(), Some("21.1.4"));
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let mut client = AviClient::test_client(&mock_server.uri());
        let err = client.login("admin", "wrong", None).await.unwrap_err();

        match err {
            AviError::Auth(msg) => {
                assert!(msg.contains("admin@"));
                assert!(msg.contains("401"));
            }
            _ => panic!("Expected AviError::Auth"),
        }
    }

    #[tokio::test]
    async fn test_probe_version_logs_out_after_discovery() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "csrftoken=tok123; Path=/")
                    .set_body_json(serde_json::json!({
                        "version": {"Version": "30.2.1"}
                    })),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/logout"))
            .and(header("X-CSRFToken", "tok123"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut client = AviClient::test_client(&mock_server.uri());
        let version = client.probe_version("admin", "secret").await.unwrap();
        assert_eq!(version, "30.2.1");
    }

    #[tokio::test]
    async fn test_probe_version_without_reported_version() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let mut client = AviClient::test_client(&mock_server.uri());
        let err = client.probe_version("admin", "secret").await.unwrap_err();

        match err {
            AviError::Api { message, .. } => assert!(message.contains("version")),
            _ => panic!("Expected AviError::Api"),
        }
    }

    #[tokio::test]
    async fn test_get_collection_page_sends_session_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/pool"))
            .and(header("X-Avi-Tenant", "admin"))
            .and(header("X-Avi-Version", "22.1.1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 1,
                "results": [{"uuid": "u1", "name": "p1"}]
            })))
            .mount(&mock_server)
            .await;

        let mut client = AviClient::test_client(&mock_server.uri());
        client.version = Some("22.1.1".to_string());

        let url = format!("{}/api/pool", mock_server.uri());
        let page = client.get_collection_page(&url).await.unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].uuid, "u1");
    }

    #[tokio::test]
    async fn test_get_collection_page_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/pool"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let client = AviClient::test_client(&mock_server.uri());
        let url = format!("{}/api/pool", mock_server.uri());
        let err = client.get_collection_page(&url).await.unwrap_err();

        match err {
            AviError::Api { status, .. } => assert_eq!(status, 403),
            _ => panic!("Expected AviError::Api"),
        }
    }
}
