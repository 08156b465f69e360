//! Sign-up, sign-in and sign-out against the backend's auth surface.

use chrono::{Duration, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BackendClient;
use crate::error::{DugoutError, DugoutResult};
use crate::session::Session;
use crate::team::Role;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: i64,
    pub user: AuthUser,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SignUpResponse {
    // Sign-up may or may not return a session depending on whether email
    // confirmation is enabled; only the user part is guaranteed.
    user: Option<AuthUser>,
    id: Option<Uuid>,
    email: Option<String>,
}

impl BackendClient {
    /// Register a new account and create its `users` row with the
    /// default `parent` role and no linked player.
    pub async fn sign_up(&self, email: &str, password: &str) -> DugoutResult<AuthUser> {
        let response = self
            .request(Method::POST, "/auth/v1/signup")
            .json(&Credentials { email, password })
            .send()
            .await?;

        let body: SignUpResponse = Self::check(response).await?.json().await?;

        // Some deployments nest the user, some return it flat.
        let user = match (body.user, body.id, body.email) {
            (Some(user), _, _) => user,
            (None, Some(id), Some(email)) => AuthUser { id, email },
            _ => {
                return Err(DugoutError::Auth(
                    "Sign-up response did not include a user".into(),
                ));
            }
        };

        self.insert_user_profile(user.id, &user.email, Role::Parent)
            .await?;

        Ok(user)
    }

    /// Sign in with the password grant and return a persistable session.
    pub async fn sign_in(&self, email: &str, password: &str) -> DugoutResult<Session> {
        let response = self
            .request(Method::POST, "/auth/v1/token?grant_type=password")
            .json(&Credentials { email, password })
            .send()
            .await?;

        let body: SignInResponse = Self::check(response).await?.json().await?;

        Ok(Session {
            access_token: body.access_token,
            refresh_token: body.refresh_token,
            user_id: body.user.id,
            email: body.user.email,
            expires_at: Utc::now() + Duration::seconds(body.expires_in),
        })
    }

    /// Revoke the current token. Requires an authenticated client.
    pub async fn sign_out(&self) -> DugoutResult<()> {
        if !self.is_authenticated() {
            return Err(DugoutError::NotSignedIn);
        }

        let response = self.request(Method::POST, "/auth/v1/logout").send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
