//! Bluesky adapter built on the AT Protocol XRPC API.

use derive_getters::Getters;
use serde::Deserialize;

mod client;
pub mod directive;
pub mod json_models;
mod platform;

pub use client::BlueskyClient;
pub use platform::{Bluesky, BLUESKY_CHARACTER_LIMIT, MAX_IMAGES_PER_POST};

/// Login material for one Bluesky account.
///
/// App passwords are issued under Settings > App Passwords and are distinct
/// from the account password.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct BlueskyCredentials {
    /// Account handle, e.g. `example.bsky.social`.
    handle: String,
    /// App password for the account.
    app_password: String,
}

impl BlueskyCredentials {
    /// Creates credentials from a handle and app password.
    pub fn new(handle: impl Into<String>, app_password: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            app_password: app_password.into(),
        }
    }
}
