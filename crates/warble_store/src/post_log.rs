//! The post log: a durable, per-identity record of recently published posts.

use crate::models::{NewPostRecord, PostRecord};
use crate::schema::post_log;
use chrono::Utc;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};
use warble_core::BotIdentity;
use warble_error::{StoreError, StoreErrorKind, StoreResult};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Recency store handle for one bot identity.
///
/// Rows are partitioned by the identity's (name, schema) pair; at most
/// `log_threshold` rows are ever retained per partition, evicting the oldest
/// timestamps first (insertion id breaks ties). A threshold of 0 disables
/// recency tracking: queries return nothing and commits write nothing.
///
/// Opened per run per identity and dropped when the identity's run ends. The
/// underlying SQLite file is shared between scheduled invocations, so a
/// `busy_timeout` pragma makes overlapping processes queue instead of
/// failing.
///
/// # Example
/// ```no_run
/// use warble_core::BotIdentity;
/// use warble_store::PostLog;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let identity = BotIdentity::new("garden-bot", "Twitter");
///     let log = PostLog::open("warble.db", identity, 11)?;
///     let recent = log.recent_texts().await?;
///     println!("{} recent posts", recent.len());
///     Ok(())
/// }
/// ```
pub struct PostLog {
    /// Database connection wrapped in Arc<Mutex> for async safety.
    ///
    /// Note: This is a simple implementation. Orchestration is sequential, so
    /// one connection per identity run is all the concurrency we need.
    conn: Arc<Mutex<SqliteConnection>>,
    identity: BotIdentity,
    log_threshold: u32,
}

impl PostLog {
    /// Open (creating if necessary) the post log database for one identity.
    ///
    /// Runs pending migrations, so a fresh path becomes a usable store.
    ///
    /// # Errors
    ///
    /// Returns a connection error when the file cannot be opened and a
    /// migration error when the schema cannot be brought up to date.
    pub fn open(
        database_path: impl AsRef<Path>,
        identity: BotIdentity,
        log_threshold: u32,
    ) -> StoreResult<Self> {
        let database_url = database_path.as_ref().display().to_string();
        let mut conn = SqliteConnection::establish(&database_url)?;
        conn.batch_execute("PRAGMA busy_timeout = 5000;")?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(StoreErrorKind::Migration(e.to_string())))?;
        debug!(
            database = %database_url,
            identity = %identity,
            log_threshold,
            "Opened post log"
        );
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            identity,
            log_threshold,
        })
    }

    /// The identity this handle is scoped to.
    pub fn identity(&self) -> &BotIdentity {
        &self.identity
    }

    /// The retention window for this identity.
    pub fn log_threshold(&self) -> u32 {
        self.log_threshold
    }

    /// Texts of the most recently published posts, newest first.
    ///
    /// Returns at most `log_threshold` texts; an empty vec immediately (no
    /// I/O) when the threshold is 0.
    #[instrument(skip(self), fields(identity = %self.identity))]
    pub async fn recent_texts(&self) -> StoreResult<Vec<String>> {
        if self.log_threshold == 0 {
            return Ok(Vec::new());
        }
        let mut conn = self.conn.lock().await;
        let texts: Vec<String> = post_log::table
            .filter(post_log::name.eq(self.identity.name()))
            .filter(post_log::schema.eq(self.identity.schema()))
            .order(post_log::posted_at.desc())
            .then_order_by(post_log::id.desc())
            .limit(i64::from(self.log_threshold))
            .select(post_log::text)
            .load(&mut *conn)?;
        Ok(texts)
    }

    /// Record a confirmed publish, evicting beyond the retention window.
    ///
    /// Insert and eviction run in one transaction: an interrupted run can
    /// neither lose the committed row nor leave the partition over capacity.
    /// Callers invoke this only after the platform confirmed the publish.
    #[instrument(skip(self, text), fields(identity = %self.identity))]
    pub async fn commit(&self, text: &str) -> StoreResult<()> {
        if self.log_threshold == 0 {
            debug!("Recency tracking disabled, nothing to record");
            return Ok(());
        }
        let record = NewPostRecord {
            schema: self.identity.schema(),
            name: self.identity.name(),
            posted_at: Utc::now().naive_utc(),
            text,
        };
        let mut conn = self.conn.lock().await;
        conn.transaction::<_, StoreError, _>(|conn| {
            diesel::insert_into(post_log::table)
                .values(&record)
                .execute(conn)?;
            let keep: Vec<i32> = post_log::table
                .filter(post_log::name.eq(self.identity.name()))
                .filter(post_log::schema.eq(self.identity.schema()))
                .order(post_log::posted_at.desc())
                .then_order_by(post_log::id.desc())
                .limit(i64::from(self.log_threshold))
                .select(post_log::id)
                .load(conn)?;
            diesel::delete(
                post_log::table
                    .filter(post_log::name.eq(self.identity.name()))
                    .filter(post_log::schema.eq(self.identity.schema()))
                    .filter(post_log::id.ne_all(keep)),
            )
            .execute(conn)?;
            Ok(())
        })?;
        debug!("Committed published post to log");
        Ok(())
    }

    /// Number of rows currently retained for this identity.
    #[instrument(skip(self), fields(identity = %self.identity))]
    pub async fn logged_count(&self) -> StoreResult<i64> {
        let mut conn = self.conn.lock().await;
        let count = post_log::table
            .filter(post_log::name.eq(self.identity.name()))
            .filter(post_log::schema.eq(self.identity.schema()))
            .count()
            .get_result(&mut *conn)?;
        Ok(count)
    }

    /// Retained rows for this identity, newest first, capped at `limit`.
    #[instrument(skip(self), fields(identity = %self.identity))]
    pub async fn recent_records(&self, limit: i64) -> StoreResult<Vec<PostRecord>> {
        let mut conn = self.conn.lock().await;
        let rows = post_log::table
            .filter(post_log::name.eq(self.identity.name()))
            .filter(post_log::schema.eq(self.identity.schema()))
            .order(post_log::posted_at.desc())
            .then_order_by(post_log::id.desc())
            .limit(limit)
            .select(PostRecord::as_select())
            .load(&mut *conn)?;
        Ok(rows)
    }
}
