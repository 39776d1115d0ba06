//! Candidate validation rules shared by platform adapters.
//!
//! Each rule checks one class of violation over the whole candidate pool and
//! reports every offender in that class at once, so the author sees the full
//! list of posts to fix rather than one per run. Adapters compose the rules
//! that apply to their platform with platform-specific parameters.

use crate::Candidate;
use warble_error::{ValidationError, ValidationErrorKind, ValidationResult};

/// Require a non-empty candidate pool.
///
/// The pool is checked after recency filtering, which can exclude up to
/// `log_threshold` posts; the failure message therefore asks the author for
/// at least `log_threshold + 1` posts so at least one always survives.
pub fn check_pool(candidates: &[Candidate], log_threshold: u32) -> ValidationResult<()> {
    if candidates.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyPool {
            needed: log_threshold as usize + 1,
        }));
    }
    Ok(())
}

/// Require every candidate to fit the platform character limit.
///
/// Counts Unicode scalar values, not bytes. Reports every offending
/// candidate in one pass.
pub fn check_length(candidates: &[Candidate], limit: usize) -> ValidationResult<()> {
    let offenders: Vec<String> = candidates
        .iter()
        .filter(|c| c.char_count() > limit)
        .map(|c| c.as_str().to_string())
        .collect();
    if offenders.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(ValidationErrorKind::CharacterLimit {
            limit,
            offenders,
        }))
    }
}

/// Require every candidate to carry at most `max` image directives.
///
/// Directive syntax belongs to the platform adapter, so the adapter supplies
/// the counting function. Reports every offending candidate in one pass.
pub fn check_image_count(
    candidates: &[Candidate],
    max: usize,
    count: impl Fn(&Candidate) -> usize,
) -> ValidationResult<()> {
    let offenders: Vec<String> = candidates
        .iter()
        .filter(|c| count(c) > max)
        .map(|c| c.as_str().to_string())
        .collect();
    if offenders.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(ValidationErrorKind::ImageLimit {
            max,
            offenders,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(texts: &[&str]) -> Vec<Candidate> {
        texts.iter().map(|text| Candidate::new(*text)).collect()
    }

    #[test]
    fn test_check_pool_rejects_empty() {
        let err = check_pool(&[], 11).expect_err("empty pool should fail");
        assert!(format!("{}", err).contains("at least 12 posts"));
    }

    #[test]
    fn test_check_pool_accepts_single_candidate() {
        assert!(check_pool(&pool(&["one"]), 0).is_ok());
    }

    #[test]
    fn test_check_length_lists_every_offender() {
        let candidates = pool(&["ok", "this one is far too long", "also much too long here"]);
        let err = check_length(&candidates, 10).expect_err("two offenders expected");
        let message = format!("{}", err);
        assert!(message.contains("2 post(s)"));
        assert!(message.contains("this one is far too long"));
        assert!(message.contains("also much too long here"));
    }

    #[test]
    fn test_check_length_counts_chars_not_bytes() {
        // Five four-byte glyphs fit a five-character limit.
        let candidates = pool(&["🦀🦀🦀🦀🦀"]);
        assert!(check_length(&candidates, 5).is_ok());
        assert!(check_length(&candidates, 4).is_err());
    }

    #[test]
    fn test_check_image_count_uses_supplied_counter() {
        let candidates = pool(&["a b", "a b c d e f"]);
        let count_words = |c: &Candidate| c.as_str().split_whitespace().count();
        let err = check_image_count(&candidates, 4, count_words).expect_err("one offender");
        assert!(format!("{}", err).contains("a b c d e f"));
        assert!(check_image_count(&candidates, 6, count_words).is_ok());
    }
}
