//! JSON bodies for the Bluesky XRPC endpoints.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request body for `com.atproto.server.createSession`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionRequest<'a> {
    /// Handle or DID to log in as.
    pub identifier: &'a str,
    /// App password for the account.
    pub password: &'a str,
}

/// An authenticated session returned by `createSession`.
#[derive(Debug, Clone, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Bearer token for subsequent calls.
    access_jwt: String,
    /// Stable DID of the account, used as the record repository.
    did: String,
    /// Handle the session was opened for.
    handle: String,
}

/// Response body for `com.atproto.repo.uploadBlob`.
///
/// The blob reference is kept opaque and echoed back verbatim inside the
/// post embed, as the server expects.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadBlobResponse {
    /// Opaque blob reference.
    pub blob: serde_json::Value,
}

/// One image inside an `app.bsky.embed.images` block.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddedImage {
    /// Blob reference from [`UploadBlobResponse`].
    pub image: serde_json::Value,
    /// Alt text for the image.
    pub alt: String,
}

/// An `app.bsky.embed.images` block.
#[derive(Debug, Clone, Serialize)]
pub struct ImagesEmbed {
    #[serde(rename = "$type")]
    pub embed_type: &'static str,
    pub images: Vec<EmbeddedImage>,
}

impl ImagesEmbed {
    /// Wraps uploaded blobs in an images embed.
    pub fn new(images: Vec<EmbeddedImage>) -> Self {
        Self {
            embed_type: "app.bsky.embed.images",
            images,
        }
    }
}

/// An `app.bsky.feed.post` record.
#[derive(Debug, Clone, Serialize)]
pub struct FeedPost<'a> {
    #[serde(rename = "$type")]
    pub record_type: &'static str,
    pub text: &'a str,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<ImagesEmbed>,
}

impl<'a> FeedPost<'a> {
    /// Creates a post record stamped with the given creation time.
    pub fn new(text: &'a str, created_at: String, embed: Option<ImagesEmbed>) -> Self {
        Self {
            record_type: "app.bsky.feed.post",
            text,
            created_at,
            embed,
        }
    }
}

/// Request body for `com.atproto.repo.createRecord`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRecordRequest<'a> {
    /// Repository to write into, the account DID.
    pub repo: &'a str,
    /// Record collection, always the feed post collection here.
    pub collection: &'static str,
    /// The record itself.
    pub record: FeedPost<'a>,
}

/// Response body for `com.atproto.repo.createRecord`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordResponse {
    /// AT URI of the new record.
    pub uri: String,
    /// Content hash of the new record.
    pub cid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_post_serializes_expected_shape() {
        let post = FeedPost::new("hello", "2026-01-01T12:00:00+00:00".to_string(), None);
        let json = serde_json::to_value(&post).expect("Serializable post");
        assert_eq!(json["$type"], "app.bsky.feed.post");
        assert_eq!(json["text"], "hello");
        assert_eq!(json["createdAt"], "2026-01-01T12:00:00+00:00");
        assert!(json.get("embed").is_none());
    }

    #[test]
    fn test_images_embed_serializes_expected_shape() {
        let blob = serde_json::json!({"$type": "blob", "ref": {"$link": "bafy"}});
        let embed = ImagesEmbed::new(vec![EmbeddedImage {
            image: blob.clone(),
            alt: String::new(),
        }]);
        let post = FeedPost::new(
            "with image",
            "2026-01-01T12:00:00+00:00".to_string(),
            Some(embed),
        );
        let json = serde_json::to_value(&post).expect("Serializable post");
        assert_eq!(json["embed"]["$type"], "app.bsky.embed.images");
        assert_eq!(json["embed"]["images"][0]["image"], blob);
        assert_eq!(json["embed"]["images"][0]["alt"], "");
    }

    #[test]
    fn test_session_deserializes_camel_case() {
        let raw = r#"{"accessJwt": "jwt-token", "did": "did:plc:abc", "handle": "bot.bsky.social"}"#;
        let session: Session = serde_json::from_str(raw).expect("Valid session JSON");
        assert_eq!(session.access_jwt(), "jwt-token");
        assert_eq!(session.did(), "did:plc:abc");
        assert_eq!(session.handle(), "bot.bsky.social");
    }
}
