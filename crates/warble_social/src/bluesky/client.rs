//! HTTP client for the Bluesky XRPC API.

use crate::bluesky::BlueskyCredentials;
use crate::bluesky::json_models::{
    CreateRecordRequest, CreateRecordResponse, CreateSessionRequest, FeedPost, ImagesEmbed,
    Session, UploadBlobResponse,
};
use chrono::Utc;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, error, info, instrument};
use warble_error::{PublishError, PublishErrorKind, PublishResult};

const BLUESKY_SERVICE_URL: &str = "https://bsky.social";

/// Client for the Bluesky XRPC endpoints.
///
/// Sessions are short-lived; callers open a fresh one per posting run with
/// [`BlueskyClient::create_session`] and thread it through the other calls.
#[derive(Debug, Clone)]
pub struct BlueskyClient {
    client: Client,
    credentials: BlueskyCredentials,
}

impl BlueskyClient {
    /// Creates a client for one account.
    pub fn new(credentials: BlueskyCredentials) -> Self {
        debug!(handle = %credentials.handle(), "Creating Bluesky client");
        Self {
            client: Client::new(),
            credentials,
        }
    }

    /// Logs in with the configured handle and app password.
    #[instrument(skip(self), fields(handle = %self.credentials.handle()))]
    pub async fn create_session(&self) -> PublishResult<Session> {
        let body = CreateSessionRequest {
            identifier: self.credentials.handle(),
            password: self.credentials.app_password(),
        };

        let response = self
            .client
            .post(format!(
                "{}/xrpc/com.atproto.server.createSession",
                BLUESKY_SERVICE_URL
            ))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to reach the Bluesky API");
                PublishError::new(PublishErrorKind::Other(format!("Request failed: {}", e)))
            })?;

        let response = Self::check_status(response, "createSession").await?;
        let session: Session = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse session response");
            PublishError::new(PublishErrorKind::Other(format!(
                "Failed to parse session: {}",
                e
            )))
        })?;

        debug!(did = %session.did(), "Opened Bluesky session");
        Ok(session)
    }

    /// Uploads raw image bytes and returns the opaque blob reference.
    #[instrument(skip(self, session, bytes), fields(size = bytes.len()))]
    pub async fn upload_blob(
        &self,
        session: &Session,
        bytes: &[u8],
    ) -> PublishResult<serde_json::Value> {
        let response = self
            .client
            .post(format!(
                "{}/xrpc/com.atproto.repo.uploadBlob",
                BLUESKY_SERVICE_URL
            ))
            .bearer_auth(session.access_jwt())
            .header("Content-Type", "application/octet-stream")
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to reach the Bluesky API");
                PublishError::new(PublishErrorKind::Other(format!("Request failed: {}", e)))
            })?;

        let response = Self::check_status(response, "uploadBlob").await?;
        let uploaded: UploadBlobResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse blob response");
            PublishError::new(PublishErrorKind::Other(format!(
                "Failed to parse blob: {}",
                e
            )))
        })?;

        Ok(uploaded.blob)
    }

    /// Creates a feed post, optionally carrying an images embed.
    #[instrument(skip(self, session, text, embed), fields(handle = %session.handle()))]
    pub async fn create_post(
        &self,
        session: &Session,
        text: &str,
        embed: Option<ImagesEmbed>,
    ) -> PublishResult<String> {
        let record = FeedPost::new(text, Utc::now().to_rfc3339(), embed);
        let body = CreateRecordRequest {
            repo: session.did(),
            collection: "app.bsky.feed.post",
            record,
        };

        let response = self
            .client
            .post(format!(
                "{}/xrpc/com.atproto.repo.createRecord",
                BLUESKY_SERVICE_URL
            ))
            .bearer_auth(session.access_jwt())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to reach the Bluesky API");
                PublishError::new(PublishErrorKind::Other(format!("Request failed: {}", e)))
            })?;

        let response = Self::check_status(response, "createRecord").await?;
        let created: CreateRecordResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse record response");
            PublishError::new(PublishErrorKind::Other(format!(
                "Failed to parse record: {}",
                e
            )))
        })?;

        info!(uri = %created.uri, "Created Bluesky record");
        Ok(created.uri)
    }

    async fn check_status(response: Response, operation: &str) -> PublishResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, operation, "Bluesky API returned an error");

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(PublishError::new(PublishErrorKind::RateLimited(body)));
        }
        Err(PublishError::new(PublishErrorKind::Other(format!(
            "{} failed with status {}: {}",
            operation, status, body
        ))))
    }
}
