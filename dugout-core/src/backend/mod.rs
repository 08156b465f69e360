//! HTTP client for the hosted backend service.
//!
//! The backend exposes three surfaces we consume: auth (sign-up/sign-in),
//! PostgREST-style tables, and object storage. The client is constructed
//! explicitly from config and passed to whoever needs it; there is no
//! process-wide singleton.

mod auth;
mod storage;
mod tables;

pub use auth::{AuthUser, SignInResponse};
pub use storage::StorageObject;
pub use tables::PlayerFilter;

use crate::config::GlobalConfig;
use crate::error::{DugoutError, DugoutResult};
use crate::session::Session;

/// Client for one backend deployment.
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    /// Bearer token of the signed-in user. Without it, requests run with
    /// the anonymous key and only reach public rows.
    access_token: Option<String>,
}

impl BackendClient {
    pub fn new(config: &GlobalConfig) -> Self {
        BackendClient {
            http: reqwest::Client::new(),
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            api_key: config.backend_key.clone(),
            access_token: None,
        }
    }

    /// Client authenticated as the signed-in user.
    pub fn with_session(config: &GlobalConfig, session: &Session) -> Self {
        let mut client = Self::new(config);
        client.access_token = Some(session.access_token.clone());
        client
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bearer value for the Authorization header: the user token when
    /// signed in, the anonymous key otherwise.
    fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.api_key)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("apikey", &self.api_key)
            .bearer_auth(self.bearer())
    }

    /// Turn a non-success response into an Api error with the backend's
    /// message when it sent one.
    async fn check(response: reqwest::Response) -> DugoutResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // The auth, table and storage surfaces each use a different key
        // for their error message.
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                ["error_description", "msg", "message", "error"]
                    .iter()
                    .find_map(|key| body.get(key).and_then(|v| v.as_str()).map(str::to_string))
            })
            .unwrap_or_else(|| status.to_string());

        Err(DugoutError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GlobalConfig {
        toml::from_str(
            r#"
backend_url = "https://abc.example.co/"
backend_key = "anon-key"
calendar_url = "https://calendar.example.com/team.ics"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = BackendClient::new(&test_config());
        assert_eq!(
            client.url("/rest/v1/players"),
            "https://abc.example.co/rest/v1/players"
        );
    }

    #[test]
    fn test_anonymous_client_uses_api_key_as_bearer() {
        let client = BackendClient::new(&test_config());
        assert!(!client.is_authenticated());
        assert_eq!(client.bearer(), "anon-key");
    }
}
