//! HTTP client for the Twitter v2 tweet endpoint.

use crate::twitter::{oauth, TwitterCredentials};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};
use warble_error::{PublishError, PublishErrorKind, PublishResult};

const TWEET_URL: &str = "https://api.twitter.com/2/tweets";

#[derive(Debug, Serialize)]
struct TweetRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TweetResponse {
    data: TweetData,
}

#[derive(Debug, Deserialize)]
struct TweetData {
    id: String,
}

/// Client for posting tweets with OAuth 1.0a user context.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    client: Client,
    credentials: TwitterCredentials,
}

impl TwitterClient {
    /// Creates a client for one account.
    pub fn new(credentials: TwitterCredentials) -> Self {
        debug!("Creating Twitter client");
        Self {
            client: Client::new(),
            credentials,
        }
    }

    /// Posts one tweet and returns its id.
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn create_tweet(&self, text: &str) -> PublishResult<String> {
        let authorization = oauth::authorization_header(&self.credentials, "POST", TWEET_URL);

        let response = self
            .client
            .post(TWEET_URL)
            .header("Authorization", authorization)
            .json(&TweetRequest { text })
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to reach the Twitter API");
                PublishError::new(PublishErrorKind::Other(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Twitter API returned an error");
            return Err(Self::map_rejection(status, body));
        }

        let created: TweetResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse tweet response");
            PublishError::new(PublishErrorKind::Other(format!(
                "Failed to parse tweet: {}",
                e
            )))
        })?;

        info!(tweet_id = %created.data.id, "Created tweet");
        Ok(created.data.id)
    }

    /// Maps a rejection to the kind the orchestrator can advise on.
    ///
    /// A 403 whose body mentions duplicate content is the duplicate-post
    /// rejection; 429 is the posting quota.
    fn map_rejection(status: StatusCode, body: String) -> PublishError {
        if status == StatusCode::FORBIDDEN && body.to_lowercase().contains("duplicate content") {
            return PublishError::new(PublishErrorKind::DuplicateContent(body));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return PublishError::new(PublishErrorKind::RateLimited(body));
        }
        PublishError::new(PublishErrorKind::Other(format!(
            "Twitter returned status {}: {}",
            status, body
        )))
    }
}
