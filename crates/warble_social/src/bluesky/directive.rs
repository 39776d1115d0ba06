//! Inline image directives.
//!
//! A post may request attachments with `getImage[url]` markers anywhere in
//! its text. A marker only counts when it sits at the start of the post or
//! after whitespace, so surrounding prose cannot trigger one by accident.

use regex::Regex;
use std::sync::OnceLock;

static IMAGE_DIRECTIVE: OnceLock<Regex> = OnceLock::new();

fn image_directive() -> &'static Regex {
    IMAGE_DIRECTIVE.get_or_init(|| {
        Regex::new(r"(?:^|\s)getImage\[(.+?)]").expect("Valid image directive regex")
    })
}

/// Extracts every directive URL in order of appearance.
pub fn urls(text: &str) -> Vec<String> {
    image_directive()
        .captures_iter(text)
        .filter_map(|captures| captures.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Counts the directives in a post.
pub fn count(text: &str) -> usize {
    image_directive().find_iter(text).count()
}

/// Removes every directive, leaving the prose that should be published.
pub fn strip(text: &str) -> String {
    image_directive().replace_all(text, "").into_owned()
}
