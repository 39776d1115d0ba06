//! The per-identity posting run.
//!
//! One run drives a single identity through the whole pipeline: load the
//! source file, subtract recently-posted texts, validate the surviving pool,
//! pick one candidate, publish it, and commit the text to the post log. The
//! commit happens here, after the platform confirmed the publish, so a
//! failed publish can never leave a recency record behind.

use rand::Rng;
use std::path::Path;
use tracing::{debug, info, instrument, warn};
use warble_core::{select, source, Candidate};
use warble_error::{PublishError, SourceError, ValidationError, ValidationErrorKind, WarbleResult};
use warble_interface::{Platform, PublishReceipt};
use warble_store::PostLog;

/// Outcome of one identity's posting run.
#[derive(Debug)]
pub enum RunOutcome {
    /// A post went out and its text was committed to the post log.
    Published {
        /// Receipt returned by the platform.
        receipt: PublishReceipt,
    },
    /// Nothing was published this run.
    Skipped(SkipReason),
}

/// Why a run published nothing.
#[derive(Debug)]
pub enum SkipReason {
    /// The source file was missing; a template was written in its place.
    MissingSource,
    /// The source file could not be read or bootstrapped.
    Source(SourceError),
    /// The candidate pool failed platform validation.
    Validation(ValidationError),
    /// The platform rejected the selected candidate.
    Publish(PublishError),
}

/// Outcome of a dry-run check for one identity.
#[derive(Debug)]
pub enum CheckOutcome {
    /// The filtered pool passed validation; a run would publish.
    Ready {
        /// Number of candidates eligible for selection.
        pool_size: usize,
    },
    /// The source file is missing; a run would write a template.
    MissingSource,
    /// The source file exists but could not be read.
    Unreadable(SourceError),
    /// The filtered pool failed platform validation.
    Invalid(ValidationError),
}

/// Run one identity end to end.
///
/// Source, validation, and publish failures are outcomes, not errors: the
/// identity is skipped with a diagnostic and the caller moves on. Store
/// errors propagate and halt the whole run.
#[instrument(skip(platform, log, source_file, rng), fields(identity = %log.identity()))]
pub async fn run_bot<R: Rng + ?Sized>(
    platform: &dyn Platform,
    log: &PostLog,
    source_file: &Path,
    rng: &mut R,
) -> WarbleResult<RunOutcome> {
    let candidates = match source::read(source_file) {
        Ok(candidates) => candidates,
        Err(e) if e.is_not_found() => {
            if let Err(e) = source::write_template(source_file, platform.default_template_text()) {
                warn!(error = %e, "Could not write a post-source template");
                return Ok(RunOutcome::Skipped(SkipReason::Source(e)));
            }
            info!(
                path = %source_file.display(),
                "Wrote a post-source template; add posts before the next run"
            );
            return Ok(RunOutcome::Skipped(SkipReason::MissingSource));
        }
        Err(e) => {
            warn!(error = %e, "Could not read the post source; skipping this run");
            return Ok(RunOutcome::Skipped(SkipReason::Source(e)));
        }
    };

    let recent = log.recent_texts().await?;
    let pool = eligible(candidates, &recent);
    debug!(
        pool = pool.len(),
        excluded = recent.len(),
        "Filtered candidate pool"
    );

    if let Err(e) = platform.validate(&pool) {
        warn!(error = %e, "Validation failed; skipping this run");
        return Ok(RunOutcome::Skipped(SkipReason::Validation(e)));
    }

    let choice = match select::pick(&pool, rng) {
        Some(candidate) => candidate,
        // validate() has already rejected an empty pool.
        None => {
            return Ok(RunOutcome::Skipped(SkipReason::Validation(
                ValidationError::new(ValidationErrorKind::EmptyPool {
                    needed: log.log_threshold() as usize + 1,
                }),
            )));
        }
    };
    info!(chars = choice.char_count(), "Selected a candidate");

    match platform.publish(choice).await {
        Ok(receipt) => {
            log.commit(choice.as_str()).await?;
            info!(post_id = ?receipt.post_id(), "Published and committed");
            Ok(RunOutcome::Published { receipt })
        }
        Err(e) => {
            warn!(error = %e, "Publish failed; nothing was committed");
            if let Some(hint) = e.kind.remediation() {
                warn!(hint, "Remediation");
            }
            Ok(RunOutcome::Skipped(SkipReason::Publish(e)))
        }
    }
}

/// Dry-run one identity: load, filter, and validate without publishing.
///
/// Writes nothing, neither a template nor post log rows.
#[instrument(skip(platform, log, source_file), fields(identity = %log.identity()))]
pub async fn check_bot(
    platform: &dyn Platform,
    log: &PostLog,
    source_file: &Path,
) -> WarbleResult<CheckOutcome> {
    let candidates = match source::read(source_file) {
        Ok(candidates) => candidates,
        Err(e) if e.is_not_found() => return Ok(CheckOutcome::MissingSource),
        Err(e) => return Ok(CheckOutcome::Unreadable(e)),
    };

    let recent = log.recent_texts().await?;
    let pool = eligible(candidates, &recent);

    match platform.validate(&pool) {
        Ok(()) => Ok(CheckOutcome::Ready {
            pool_size: pool.len(),
        }),
        Err(e) => Ok(CheckOutcome::Invalid(e)),
    }
}

/// Candidates that have not been posted within the retention window.
///
/// Exclusion is exact string equality against the stored text; the stored
/// text was committed post-unescaping, so multi-line posts compare equal to
/// their expanded form.
fn eligible(candidates: Vec<Candidate>, recent: &[String]) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|candidate| !recent.iter().any(|text| text.as_str() == candidate.as_str()))
        .collect()
}
