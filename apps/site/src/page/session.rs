use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::preferences::cookie_value;

/// Cookie holding the viewer's access token when no `Authorization` header is sent.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Answers "does this token belong to an active session?".
///
/// Only consulted for resumes whose visibility is `authenticated`.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn has_session(&self, access_token: &str) -> Result<bool, AppError>;
}

/// Verifies tokens against the auth service's `/auth/v1/user` endpoint.
pub struct HttpSessionVerifier {
    client: Client,
    auth_url: String,
    api_key: Option<String>,
}

impl HttpSessionVerifier {
    pub fn new(auth_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            auth_url: auth_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl SessionVerifier for HttpSessionVerifier {
    async fn has_session(&self, access_token: &str) -> Result<bool, AppError> {
        let mut request = self
            .client
            .get(format!("{}/auth/v1/user", self.auth_url))
            .bearer_auth(access_token);
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        match response.status().as_u16() {
            200..=299 => Ok(true),
            401 | 403 => {
                debug!("Access token rejected by auth service");
                Ok(false)
            }
            status => {
                warn!(status, "Unexpected status from auth service");
                Err(AppError::Auth(format!("unexpected status {status}")))
            }
        }
    }
}

/// Used when no auth service is configured: nobody has a session.
pub struct NoSessions;

#[async_trait]
impl SessionVerifier for NoSessions {
    async fn has_session(&self, _access_token: &str) -> Result<bool, AppError> {
        Ok(false)
    }
}

/// Bearer token from `Authorization`, falling back to the access-token cookie.
pub fn access_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string());

    bearer
        .or_else(|| cookie_value(headers, ACCESS_TOKEN_COOKIE))
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;

    /// Accepts exactly one token.
    pub struct StaticSessions(pub &'static str);

    #[async_trait]
    impl SessionVerifier for StaticSessions {
        async fn has_session(&self, access_token: &str) -> Result<bool, AppError> {
            Ok(access_token == self.0)
        }
    }
}
