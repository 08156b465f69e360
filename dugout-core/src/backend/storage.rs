//! Object storage: gallery listing and URL construction.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::BackendClient;
use crate::error::DugoutResult;

/// One object in a storage bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageObject {
    pub name: String,
}

#[derive(Serialize)]
struct ListRequest<'a> {
    prefix: &'a str,
    limit: usize,
    offset: usize,
}

#[derive(Deserialize)]
struct SignedUrlResponse {
    #[serde(rename = "signedURL")]
    signed_url: String,
}

/// Default page size when listing the gallery.
const LIST_LIMIT: usize = 100;

impl BackendClient {
    /// List objects in a bucket (first page, up to 100 entries).
    pub async fn list_objects(&self, bucket: &str) -> DugoutResult<Vec<StorageObject>> {
        let response = self
            .request(Method::POST, &format!("/storage/v1/object/list/{}", bucket))
            .json(&ListRequest {
                prefix: "",
                limit: LIST_LIMIT,
                offset: 0,
            })
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Public URL for an object in a public bucket. No request needed;
    /// the URL shape is deterministic.
    pub fn public_url(&self, bucket: &str, name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, bucket, name
        )
    }

    /// Ask the backend to sign a download URL valid for `expires_in` seconds.
    pub async fn signed_url(
        &self,
        bucket: &str,
        name: &str,
        expires_in: u64,
    ) -> DugoutResult<String> {
        let response = self
            .request(
                Method::POST,
                &format!("/storage/v1/object/sign/{}/{}", bucket, name),
            )
            .json(&serde_json::json!({ "expiresIn": expires_in }))
            .send()
            .await?;

        let body: SignedUrlResponse = Self::check(response).await?.json().await?;

        // The backend returns a path relative to the storage root.
        Ok(format!(
            "{}/storage/v1{}",
            self.base_url,
            body.signed_url.trim_start_matches("/storage/v1")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalConfig;

    #[test]
    fn test_public_url_shape() {
        let config: GlobalConfig = toml::from_str(
            r#"
backend_url = "https://abc.example.co"
backend_key = "anon-key"
calendar_url = "https://calendar.example.com/team.ics"
"#,
        )
        .unwrap();

        let client = BackendClient::new(&config);
        assert_eq!(
            client.public_url("photos", "team-2025.jpg"),
            "https://abc.example.co/storage/v1/object/public/photos/team-2025.jpg"
        );
    }
}
