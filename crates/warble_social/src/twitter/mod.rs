//! Twitter adapter built on the v2 tweet endpoint.

use derive_getters::Getters;
use serde::Deserialize;

mod client;
mod oauth;
mod platform;

pub use client::TwitterClient;
pub use platform::Twitter;

/// OAuth 1.0a user-context credentials for one Twitter account.
///
/// All four values come from the developer portal, with the access token
/// pair generated for the posting account.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct TwitterCredentials {
    /// Application consumer key (API key).
    consumer_key: String,
    /// Application consumer secret (API key secret).
    consumer_secret: String,
    /// Access token for the posting account.
    access_token: String,
    /// Access token secret for the posting account.
    access_token_secret: String,
}

impl TwitterCredentials {
    /// Creates credentials from the four OAuth 1.0a values.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }
}
