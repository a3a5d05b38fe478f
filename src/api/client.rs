//! HTTP client for the admin portal's notification API
//!
//! Wraps the three JSON endpoints the widget consumes. Authentication follows
//! the portal's session model: a `sessionid` cookie on every request and the
//! CSRF double-submit (header + cookie + Referer) on the mark-all-read POST.

use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::{Client, Url, header};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{LatestNotifications, MarkAllRead, Notification, UnreadCount};
use crate::config::Config;
use crate::error::BellhopError;

const UNREAD_COUNT_PATH: &str = "notifications/api/unread-count/";
const LATEST_PATH: &str = "notifications/api/latest/";
const MARK_ALL_READ_PATH: &str = "notifications/api/mark-all-read/";

/// Django's CSRF header name for AJAX posts
const CSRF_HEADER: &str = "X-CSRFToken";

/// Hung connections count as failures after this long
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur when talking to the notification API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing credentials, or the server bounced us to the login page
    #[error("Not signed in: {0}")]
    NotConfigured(String),

    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// Server returned an error response
    #[error("Server error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client for the portal's notification endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
    session_id: Option<String>,
    csrf_token: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration
    ///
    /// Redirects are not followed: the portal answers unauthenticated API
    /// calls with a redirect to its login page, which we want to surface as
    /// an error instead of parsing login-page HTML.
    pub fn from_config(config: &Config) -> Result<Self, BellhopError> {
        let base = parse_base_url(&config.server.url)?;

        let http = Client::builder()
            .redirect(Policy::none())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BellhopError::Http(e.to_string()))?;

        Ok(Self {
            http,
            base,
            session_id: config.server.session_id.clone(),
            csrf_token: config.server.csrf_token.clone(),
        })
    }

    /// Server base URL (for the startup banner)
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Fetch the unread counter
    pub async fn unread_count(&self) -> Result<UnreadCount, ApiError> {
        self.get_json(UNREAD_COUNT_PATH).await
    }

    /// Fetch the latest notifications, most recent first
    pub async fn latest(&self) -> Result<Vec<Notification>, ApiError> {
        let response: LatestNotifications = self.get_json(LATEST_PATH).await?;
        Ok(response.notifications)
    }

    /// Mark every notification of the signed-in user as read
    pub async fn mark_all_read(&self) -> Result<MarkAllRead, ApiError> {
        let Some(csrf_token) = self.csrf_token.as_deref() else {
            return Err(ApiError::NotConfigured(
                "no CSRF token configured, cannot POST".to_string(),
            ));
        };

        let url = self.endpoint(MARK_ALL_READ_PATH)?;
        let mut request = self
            .http
            .post(url)
            .header(CSRF_HEADER, csrf_token)
            .header(header::REFERER, self.base.as_str());
        if let Some(cookies) = self.cookie_header() {
            request = request.header(header::COOKIE, cookies);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let mut request = self.http.get(url);
        if let Some(cookies) = self.cookie_header() {
            request = request.header(header::COOKIE, cookies);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Cookies are attached by hand rather than through a cookie store, so
    /// config stays in control of exactly what is sent. Returns `None` when
    /// no credentials are configured.
    fn cookie_header(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(session_id) = &self.session_id {
            parts.push(format!("sessionid={session_id}"));
        }
        if let Some(csrf_token) = &self.csrf_token {
            parts.push(format!("csrftoken={csrf_token}"));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

/// Normalize the configured server URL into a joinable base
///
/// The path must end in a slash, otherwise `Url::join` would drop the last
/// segment when appending the endpoint paths.
fn parse_base_url(server: &str) -> Result<Url, BellhopError> {
    let mut base = Url::parse(server).map_err(|e| BellhopError::InvalidServerUrl {
        url: server.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(BellhopError::InvalidServerUrl {
            url: server.to_string(),
            reason: format!("unsupported scheme '{}'", base.scheme()),
        });
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    Ok(base)
}

/// Map a response to the decoded body or the matching `ApiError`
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();

    if status.is_redirection() {
        return Err(ApiError::NotConfigured(format!(
            "redirected to login page ({}), session cookie missing or expired",
            status.as_u16()
        )));
    }

    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ApiError::Api {
            code: status.as_u16(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
