//! End-to-end posting runs against a mock platform and a real SQLite log.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;
use warble_bot::posting::{check_bot, run_bot, CheckOutcome, RunOutcome, SkipReason};
use warble_core::{validate, BotIdentity, Candidate};
use warble_error::{
    PublishError, PublishErrorKind, PublishResult, ValidationErrorKind, ValidationResult,
};
use warble_interface::{Platform, PublishReceipt};
use warble_store::PostLog;

const TEMPLATE: &str = "# add posts here, one per line\n";

/// Platform double that records every published text and can be told to
/// reject publishes with a fixed error kind.
struct MockPlatform {
    published: Mutex<Vec<String>>,
    fail_with: Option<PublishErrorKind>,
    log_threshold: u32,
}

impl MockPlatform {
    fn new(log_threshold: u32) -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail_with: None,
            log_threshold,
        }
    }

    fn failing(log_threshold: u32, kind: PublishErrorKind) -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail_with: Some(kind),
            log_threshold,
        }
    }

    fn published(&self) -> Vec<String> {
        self.published.lock().expect("published lock").clone()
    }
}

#[async_trait]
impl Platform for MockPlatform {
    fn schema_name(&self) -> &'static str {
        "Mock"
    }

    fn default_template_text(&self) -> &'static str {
        TEMPLATE
    }

    fn validate(&self, candidates: &[Candidate]) -> ValidationResult<()> {
        validate::check_pool(candidates, self.log_threshold)
    }

    async fn publish(&self, candidate: &Candidate) -> PublishResult<PublishReceipt> {
        if let Some(kind) = &self.fail_with {
            return Err(PublishError::new(kind.clone()));
        }
        self.published
            .lock()
            .expect("published lock")
            .push(candidate.as_str().to_string());
        Ok(PublishReceipt::new(Some("mock-post-1".to_string())))
    }
}

fn write_posts(path: &Path, lines: &[&str]) {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    std::fs::write(path, content).expect("write post source");
}

fn source_path(dir: &TempDir) -> PathBuf {
    dir.path().join("posts.txt")
}

fn open_log(dir: &TempDir, log_threshold: u32) -> PostLog {
    PostLog::open(
        dir.path().join("warble.db"),
        BotIdentity::new("test-bot", "Mock"),
        log_threshold,
    )
    .expect("open post log")
}

#[tokio::test]
async fn test_run_publishes_and_commits() {
    let dir = TempDir::new().expect("temp dir");
    let source = source_path(&dir);
    write_posts(&source, &["alpha", "beta", "gamma"]);
    let platform = MockPlatform::new(1);
    let log = open_log(&dir, 1);
    let mut rng = StdRng::seed_from_u64(7);

    let outcome = run_bot(&platform, &log, &source, &mut rng)
        .await
        .expect("run succeeds");

    match outcome {
        RunOutcome::Published { receipt } => {
            assert_eq!(receipt.post_id().as_deref(), Some("mock-post-1"));
        }
        other => panic!("expected a publish, got {:?}", other),
    }
    let published = platform.published();
    assert_eq!(published.len(), 1);
    assert_eq!(log.logged_count().await.expect("count"), 1);
    assert_eq!(log.recent_texts().await.expect("recent"), published);
}

#[tokio::test]
async fn test_publish_failure_commits_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let source = source_path(&dir);
    write_posts(&source, &["alpha", "beta"]);
    let platform = MockPlatform::failing(1, PublishErrorKind::Other("boom".to_string()));
    let log = open_log(&dir, 1);
    let mut rng = StdRng::seed_from_u64(7);

    let outcome = run_bot(&platform, &log, &source, &mut rng)
        .await
        .expect("run succeeds");

    assert!(matches!(
        outcome,
        RunOutcome::Skipped(SkipReason::Publish(_))
    ));
    assert!(platform.published().is_empty());
    assert_eq!(log.logged_count().await.expect("count"), 0);
    assert!(log.recent_texts().await.expect("recent").is_empty());
}

#[tokio::test]
async fn test_missing_source_writes_template_and_skips() {
    let dir = TempDir::new().expect("temp dir");
    let source = source_path(&dir);
    let platform = MockPlatform::new(0);
    let log = open_log(&dir, 0);
    let mut rng = StdRng::seed_from_u64(7);

    let outcome = run_bot(&platform, &log, &source, &mut rng)
        .await
        .expect("run succeeds");

    assert!(matches!(
        outcome,
        RunOutcome::Skipped(SkipReason::MissingSource)
    ));
    let written = std::fs::read_to_string(&source).expect("template exists");
    assert_eq!(written, TEMPLATE);
    assert!(platform.published().is_empty());
    assert_eq!(log.logged_count().await.expect("count"), 0);
}

#[tokio::test]
async fn test_template_pool_fails_validation_on_next_run() {
    let dir = TempDir::new().expect("temp dir");
    let source = source_path(&dir);
    let platform = MockPlatform::new(0);
    let log = open_log(&dir, 0);
    let mut rng = StdRng::seed_from_u64(7);

    let first = run_bot(&platform, &log, &source, &mut rng)
        .await
        .expect("first run succeeds");
    assert!(matches!(
        first,
        RunOutcome::Skipped(SkipReason::MissingSource)
    ));

    // The template is all comments, so the second run has no candidates.
    let second = run_bot(&platform, &log, &source, &mut rng)
        .await
        .expect("second run succeeds");
    match second {
        RunOutcome::Skipped(SkipReason::Validation(error)) => {
            assert_eq!(error.kind, ValidationErrorKind::EmptyPool { needed: 1 });
        }
        other => panic!("expected a validation skip, got {:?}", other),
    }
    assert!(platform.published().is_empty());
}

#[tokio::test]
async fn test_recency_filter_excludes_recent_posts() {
    let dir = TempDir::new().expect("temp dir");
    let source = source_path(&dir);
    write_posts(&source, &["alpha", "beta", "gamma"]);
    let platform = MockPlatform::new(2);
    let log = open_log(&dir, 2);
    log.commit("alpha").await.expect("commit alpha");
    log.commit("beta").await.expect("commit beta");
    let mut rng = StdRng::seed_from_u64(7);

    let outcome = run_bot(&platform, &log, &source, &mut rng)
        .await
        .expect("run succeeds");

    // Only "gamma" survives the filter, so any RNG must pick it.
    assert!(matches!(outcome, RunOutcome::Published { .. }));
    assert_eq!(platform.published(), vec!["gamma".to_string()]);
}

#[tokio::test]
async fn test_fully_filtered_pool_skips_without_publishing() {
    let dir = TempDir::new().expect("temp dir");
    let source = source_path(&dir);
    write_posts(&source, &["alpha", "beta"]);
    let platform = MockPlatform::new(2);
    let log = open_log(&dir, 2);
    log.commit("alpha").await.expect("commit alpha");
    log.commit("beta").await.expect("commit beta");
    let mut rng = StdRng::seed_from_u64(7);

    let outcome = run_bot(&platform, &log, &source, &mut rng)
        .await
        .expect("run succeeds");

    match outcome {
        RunOutcome::Skipped(SkipReason::Validation(error)) => {
            assert_eq!(error.kind, ValidationErrorKind::EmptyPool { needed: 3 });
        }
        other => panic!("expected a validation skip, got {:?}", other),
    }
    assert!(platform.published().is_empty());
    assert_eq!(log.logged_count().await.expect("count"), 2);
}

#[tokio::test]
async fn test_duplicate_rejection_skips_with_remediation() {
    let dir = TempDir::new().expect("temp dir");
    let source = source_path(&dir);
    write_posts(&source, &["alpha"]);
    let platform = MockPlatform::failing(
        0,
        PublishErrorKind::DuplicateContent("duplicate content".to_string()),
    );
    let log = open_log(&dir, 0);
    let mut rng = StdRng::seed_from_u64(7);

    let outcome = run_bot(&platform, &log, &source, &mut rng)
        .await
        .expect("run succeeds");

    match outcome {
        RunOutcome::Skipped(SkipReason::Publish(error)) => {
            let hint = error.kind.remediation().expect("duplicate carries a hint");
            assert!(hint.contains("log_threshold"));
        }
        other => panic!("expected a publish skip, got {:?}", other),
    }
    assert_eq!(log.logged_count().await.expect("count"), 0);
}

#[tokio::test]
async fn test_check_reports_ready_pool() {
    let dir = TempDir::new().expect("temp dir");
    let source = source_path(&dir);
    write_posts(&source, &["alpha", "beta", "gamma"]);
    let platform = MockPlatform::new(1);
    let log = open_log(&dir, 1);
    log.commit("beta").await.expect("commit beta");

    let outcome = check_bot(&platform, &log, &source)
        .await
        .expect("check succeeds");

    match outcome {
        CheckOutcome::Ready { pool_size } => assert_eq!(pool_size, 2),
        other => panic!("expected ready, got {:?}", other),
    }
    // A dry run publishes and commits nothing.
    assert!(platform.published().is_empty());
    assert_eq!(log.logged_count().await.expect("count"), 1);
}

#[tokio::test]
async fn test_check_missing_source_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let source = source_path(&dir);
    let platform = MockPlatform::new(0);
    let log = open_log(&dir, 0);

    let outcome = check_bot(&platform, &log, &source)
        .await
        .expect("check succeeds");

    assert!(matches!(outcome, CheckOutcome::MissingSource));
    assert!(!source.exists());
}

#[tokio::test]
async fn test_check_reports_validation_failure() {
    let dir = TempDir::new().expect("temp dir");
    let source = source_path(&dir);
    write_posts(&source, &["alpha"]);
    let platform = MockPlatform::new(1);
    let log = open_log(&dir, 1);
    log.commit("alpha").await.expect("commit alpha");

    let outcome = check_bot(&platform, &log, &source)
        .await
        .expect("check succeeds");

    match outcome {
        CheckOutcome::Invalid(error) => {
            assert_eq!(error.kind, ValidationErrorKind::EmptyPool { needed: 2 });
        }
        other => panic!("expected invalid, got {:?}", other),
    }
}
