//! Core domain types and selection logic for the Warble posting bot.
//!
//! This crate provides the pieces of the posting pipeline that have no I/O of
//! their own beyond the post-source file: parsing candidate posts, validating
//! them against platform rules, and picking one at random.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod candidate;
mod identity;
pub mod select;
pub mod source;
pub mod validate;

pub use candidate::Candidate;
pub use identity::BotIdentity;
