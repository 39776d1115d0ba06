//! Platform adapters for the Warble posting bot.
//!
//! Each adapter implements [`warble_interface::Platform`] against a real
//! social network API:
//!
//! * [`Bluesky`] posts over the AT Protocol XRPC endpoints at
//!   `bsky.social`, including image attachments declared inline with
//!   `getImage[url]` directives.
//! * [`Twitter`] posts over the v2 tweet endpoint with OAuth 1.0a user
//!   context signing.
//!
//! [`ReqwestImageFetcher`] backs the image pipeline and can be swapped for a
//! test double through [`Bluesky::with_fetcher`].

mod fetcher;

pub mod bluesky;
pub mod twitter;

pub use fetcher::ReqwestImageFetcher;

pub use bluesky::{Bluesky, BlueskyClient, BlueskyCredentials};
pub use twitter::{Twitter, TwitterClient, TwitterCredentials};
