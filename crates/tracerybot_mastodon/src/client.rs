use crate::json_models::{AccountJson, StatusJson, StatusRequest, parse_notifications};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracerybot_core::{PostedStatus, StatusPost};
use tracerybot_error::{ConfigError, HttpError, JsonError, TracerybotResult};
use tracerybot_interface::{NotificationFetch, PlatformClient};
use tracing::{debug, error, instrument};

const NOTIFICATIONS_PATH: &str = "/api/v1/notifications";
const STATUSES_PATH: &str = "/api/v1/statuses";
const VERIFY_CREDENTIALS_PATH: &str = "/api/v1/accounts/verify_credentials";

/// Upper bound on a single API request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Mastodon API client authenticated with an access token.
#[derive(Debug, Clone)]
pub struct MastodonClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl MastodonClient {
    /// Creates a new Mastodon client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Instance URL (e.g., "https://botsin.space")
    /// * `access_token` - OAuth access token with read and write scopes
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> TracerybotResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("tracerybot/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, "Creating new Mastodon client");

        Ok(Self {
            client,
            base_url,
            access_token: access_token.into(),
        })
    }

    /// Instance URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PlatformClient for MastodonClient {
    #[instrument(skip(self))]
    async fn list_notifications(&self) -> NotificationFetch {
        debug!("Fetching notifications");

        let response = match self
            .client
            .get(self.endpoint(NOTIFICATIONS_PATH))
            .bearer_auth(&self.access_token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return HttpError::new(format!("Request failed: {}", e)).into();
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return HttpError::with_status(
                    status.as_u16(),
                    format!("Failed to read response body: {}", e),
                )
                .into();
            }
        };

        if !status.is_success() {
            return HttpError::with_status(status.as_u16(), body).into();
        }

        let fetch = parse_notifications(status.as_u16(), &body);
        debug!(outcome = fetch.outcome(), "Fetched notifications");
        fetch
    }

    #[instrument(skip(self, post), fields(reply = post.in_reply_to().is_some(), visibility = %post.visibility()))]
    async fn post_status(&self, post: &StatusPost) -> TracerybotResult<PostedStatus> {
        debug!(chars = post.text().chars().count(), "Posting status");

        let response = self
            .client
            .post(self.endpoint(STATUSES_PATH))
            .bearer_auth(&self.access_token)
            .json(&StatusRequest::from(post))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send status");
                HttpError::new(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Mastodon rejected status");
            return Err(HttpError::with_status(status.as_u16(), body).into());
        }

        let posted: StatusJson = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse posted status");
            JsonError::new(format!("Failed to parse status response: {}", e))
        })?;

        debug!(status_id = %posted.id, "Status posted");
        Ok(posted.into())
    }

    #[instrument(skip(self))]
    async fn verify_credentials(&self) -> TracerybotResult<String> {
        let response = self
            .client
            .get(self.endpoint(VERIFY_CREDENTIALS_PATH))
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::with_status(status.as_u16(), body).into());
        }

        let account: AccountJson = response
            .json()
            .await
            .map_err(|e| JsonError::new(format!("Failed to parse account: {}", e)))?;

        debug!(acct = %account.acct, "Credentials verified");
        Ok(account.acct)
    }

    fn platform_name(&self) -> &str {
        "mastodon"
    }
}
