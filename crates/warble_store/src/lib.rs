//! Persistent recency store for the Warble posting bot.
//!
//! Published posts are logged to a SQLite file, partitioned by bot identity,
//! so successive scheduled runs can keep recently used posts out of the
//! selection pool. The store survives restarts, retains at most
//! `log_threshold` rows per identity, and commits insert + eviction as one
//! transaction.

mod models;
mod post_log;
pub mod schema;

pub use models::{NewPostRecord, PostRecord};
pub use post_log::PostLog;
