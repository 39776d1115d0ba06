//! Bot identity type.

use serde::{Deserialize, Serialize};

/// One configured (name, platform) pairing.
///
/// A `BotIdentity` names a recency partition: every row the bot writes to the
/// post log is keyed by this pair, and only rows with the same pair count as
/// "recent" for it. Immutable for the process lifetime.
///
/// # Examples
///
/// ```
/// use warble_core::BotIdentity;
///
/// let identity = BotIdentity::new("daily-garden-bot", "Bluesky");
/// assert_eq!(identity.name(), "daily-garden-bot");
/// assert_eq!(identity.schema(), "Bluesky");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_more::Display,
)]
#[display("{} ({})", name, schema)]
pub struct BotIdentity {
    /// Configured bot name, unique within its platform
    name: String,
    /// Platform schema name, e.g. "Bluesky" or "Twitter"
    schema: String,
}

impl BotIdentity {
    /// Create a new identity from a bot name and a platform schema name.
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
        }
    }
}
