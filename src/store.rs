//! Durable key-value store backing the two entity collections.
//!
//! Each collection (workouts, log entries) is one text entry under a stable
//! key, overwritten in full on every successful mutation. Loading is
//! forgiving: an absent or unparseable entry falls back to a documented
//! default instead of failing startup.

use std::path::Path;

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::error::{CoreError, CoreResult};
use crate::models::{Exercise, LogEntry, Workout, WorkoutType};

/// Storage keys for the two independently-versioned collections.
pub const WORKOUTS_KEY: &str = "treinofit_workouts_v1";
pub const LOGS_KEY: &str = "treinofit_logs_v1";

pub struct Store {
  pool: SqlitePool,
}

impl Store {
  /// Open (or create) the store at the given file path and run migrations.
  pub async fn open(db_path: &Path) -> CoreResult<Self> {
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    info!("Opening store at {}", db_path.display());

    let pool = SqlitePoolOptions::new()
      .max_connections(5)
      .connect(&db_url)
      .await
      .map_err(|e| CoreError::Storage(format!("Failed to open store: {e}")))?;

    Self::migrate(&pool).await?;
    Ok(Self { pool })
  }

  /// An in-memory store, used by tests and previews.
  ///
  /// Uses max_connections(1) to prevent multiple pool connections from
  /// creating isolated in-memory databases.
  pub async fn in_memory() -> CoreResult<Self> {
    let pool = SqlitePoolOptions::new()
      .max_connections(1)
      .connect("sqlite::memory:")
      .await
      .map_err(|e| CoreError::Storage(format!("Failed to open in-memory store: {e}")))?;

    Self::migrate(&pool).await?;
    Ok(Self { pool })
  }

  async fn migrate(pool: &SqlitePool) -> CoreResult<()> {
    sqlx::migrate!("./migrations")
      .run(pool)
      .await
      .map_err(|e| CoreError::Storage(format!("Migration failed: {e}")))
  }

  pub async fn close(self) {
    self.pool.close().await;
  }

  /// ---------------------------------------------------------------------------
  /// Raw key-value access
  /// ---------------------------------------------------------------------------

  pub async fn read(&self, key: &str) -> CoreResult<Option<String>> {
    sqlx::query_scalar::<_, String>("SELECT value FROM store WHERE key = ?1")
      .bind(key)
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| CoreError::Storage(format!("Failed to read {key}: {e}")))
  }

  pub async fn write(&self, key: &str, value: &str) -> CoreResult<()> {
    sqlx::query(
      r#"
      INSERT INTO store (key, value, updated_at)
      VALUES (?1, ?2, datetime('now'))
      ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = excluded.updated_at
      "#,
    )
    .bind(key)
    .bind(value)
    .execute(&self.pool)
    .await
    .map_err(|e| CoreError::Storage(format!("Failed to write {key}: {e}")))?;

    Ok(())
  }

  /// ---------------------------------------------------------------------------
  /// Collection load/save
  /// ---------------------------------------------------------------------------

  /// Load the workout collection, falling back to the starter workout when the
  /// entry is absent, unreadable, or fails to parse.
  pub async fn load_workouts(&self) -> Vec<Workout> {
    self.load_or(WORKOUTS_KEY, starter_workouts).await
  }

  /// Load the log collection; the default is simply empty.
  pub async fn load_logs(&self) -> Vec<LogEntry> {
    self.load_or(LOGS_KEY, Vec::new).await
  }

  pub async fn save_workouts(&self, workouts: &[Workout]) -> CoreResult<()> {
    self.save(WORKOUTS_KEY, workouts).await
  }

  pub async fn save_logs(&self, logs: &[LogEntry]) -> CoreResult<()> {
    self.save(LOGS_KEY, logs).await
  }

  async fn load_or<T, F>(&self, key: &str, default: F) -> Vec<T>
  where
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
  {
    match self.read(key).await {
      Ok(Some(raw)) => match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(e) => {
          warn!("Stored entry {key} failed to parse, using default: {e}");
          default()
        }
      },
      Ok(None) => {
        info!("No entry under {key}, bootstrapping default");
        default()
      }
      Err(e) => {
        warn!("Failed to read {key}, using default: {e}");
        default()
      }
    }
  }

  async fn save<T: Serialize>(&self, key: &str, collection: &[T]) -> CoreResult<()> {
    let raw = serde_json::to_string(collection)
      .map_err(|e| CoreError::Storage(format!("Failed to serialize {key}: {e}")))?;
    self.write(key, &raw).await
  }
}

/// The out-of-the-box workout collection: a single full-body template with one
/// bench press at 3x8 @ 60 kg.
fn starter_workouts() -> Vec<Workout> {
  let mut starter = Workout::new("Full Body - A", WorkoutType::Strength);
  starter.exercises.push(Exercise::new("Bench Press", 3, 8, 60.0));
  vec![starter]
}
