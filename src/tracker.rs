//! Domain operations over the two collections.
//!
//! The [`Tracker`] owns the in-memory collections and the store that mirrors
//! them. Every mutation validates first, then replaces the affected collection
//! with a new value (readers never observe a half-updated list), then awaits
//! the durable write. A failed write is surfaced to the caller but the
//! in-memory state is kept: for the current session, memory is the source of
//! truth.

use log::info;

use crate::analysis::{self, WeeklyVolume};
use crate::codec::OpenableDocument;
use crate::error::{CoreError, CoreResult};
use crate::models::{Exercise, ImportedAsset, LogEntry, Workout, WorkoutType};
use crate::store::Store;

pub struct Tracker {
  store: Store,
  workouts: Vec<Workout>,
  logs: Vec<LogEntry>,
}

impl Tracker {
  /// Load both collections from the store, bootstrapping defaults for absent
  /// or corrupt entries.
  pub async fn load(store: Store) -> Self {
    let workouts = store.load_workouts().await;
    let logs = store.load_logs().await;
    info!(
      "Tracker loaded: {} workouts, {} log entries",
      workouts.len(),
      logs.len()
    );
    Self {
      store,
      workouts,
      logs,
    }
  }

  /// ---------------------------------------------------------------------------
  /// Read accessors (presentation boundary)
  /// ---------------------------------------------------------------------------

  /// All workouts, newest first.
  pub fn workouts(&self) -> &[Workout] {
    &self.workouts
  }

  /// All log entries, newest first.
  pub fn logs(&self) -> &[LogEntry] {
    &self.logs
  }

  /// Log entries recorded against one workout, newest first. Deleted workouts
  /// keep their history, so the id need not resolve to a live workout.
  pub fn logs_for(&self, workout_id: &str) -> Vec<&LogEntry> {
    self
      .logs
      .iter()
      .filter(|entry| entry.workout_id == workout_id)
      .collect()
  }

  /// Weekly training-volume series, recomputed over the full log collection.
  pub fn weekly_volume(&self) -> Vec<WeeklyVolume> {
    analysis::weekly_volume(&self.logs)
  }

  /// Produce an ephemeral openable handle for a workout's imported document.
  /// Nothing is written anywhere; the handle is valid for this session only.
  pub fn open_asset(&self, workout_id: &str) -> CoreResult<OpenableDocument> {
    let workout = self.find_workout(workout_id)?;
    let asset = workout
      .imported
      .as_ref()
      .ok_or_else(|| CoreError::NotFound(format!("workout {workout_id} has no imported asset")))?;
    OpenableDocument::from_asset(asset)
  }

  /// ---------------------------------------------------------------------------
  /// Mutations
  /// ---------------------------------------------------------------------------

  /// Create an empty workout and prepend it to the collection.
  pub async fn create_workout(&mut self, name: &str, kind: WorkoutType) -> CoreResult<Workout> {
    if name.trim().is_empty() {
      return Err(CoreError::Validation("workout name must not be empty".to_string()));
    }

    let workout = Workout::new(name, kind);
    self.workouts = prepend(workout.clone(), &self.workouts);
    self.store.save_workouts(&self.workouts).await?;
    Ok(workout)
  }

  /// Remove a workout by id. Absent ids are a no-op, not an error. Log entries
  /// referencing the workout are kept and become orphaned.
  pub async fn delete_workout(&mut self, id: &str) -> CoreResult<()> {
    if !self.workouts.iter().any(|w| w.id == id) {
      return Ok(());
    }

    self.workouts = self
      .workouts
      .iter()
      .filter(|w| w.id != id)
      .cloned()
      .collect();
    self.store.save_workouts(&self.workouts).await
  }

  /// Append an exercise to a workout. Imported workouts wrap a document and
  /// never carry exercises of their own.
  pub async fn add_exercise(
    &mut self,
    workout_id: &str,
    name: &str,
    sets: u32,
    reps: u32,
    weight: f64,
  ) -> CoreResult<Exercise> {
    if name.trim().is_empty() {
      return Err(CoreError::Validation("exercise name must not be empty".to_string()));
    }
    if !weight.is_finite() || weight < 0.0 {
      return Err(CoreError::Validation(format!(
        "weight must be a non-negative number, got {weight}"
      )));
    }
    let workout = self.find_workout(workout_id)?;
    if workout.kind == WorkoutType::Imported {
      return Err(CoreError::Validation(
        "imported workouts cannot hold exercises".to_string(),
      ));
    }

    let exercise = Exercise::new(name, sets, reps, weight);
    self.workouts = self
      .workouts
      .iter()
      .cloned()
      .map(|mut w| {
        if w.id == workout_id {
          w.exercises.push(exercise.clone());
        }
        w
      })
      .collect();
    self.store.save_workouts(&self.workouts).await?;
    Ok(exercise)
  }

  /// Replace one exercise's weight by id, leaving every other exercise (value
  /// and id) untouched.
  pub async fn update_exercise_weight(
    &mut self,
    workout_id: &str,
    exercise_id: &str,
    new_weight: f64,
  ) -> CoreResult<()> {
    if !new_weight.is_finite() || new_weight < 0.0 {
      return Err(CoreError::Validation(format!(
        "weight must be a non-negative number, got {new_weight}"
      )));
    }

    let workout = self.find_workout(workout_id)?;
    if workout.exercise(exercise_id).is_none() {
      return Err(CoreError::NotFound(format!(
        "exercise {exercise_id} in workout {workout_id}"
      )));
    }

    self.workouts = self
      .workouts
      .iter()
      .cloned()
      .map(|mut w| {
        if w.id == workout_id {
          for exercise in &mut w.exercises {
            if exercise.id == exercise_id {
              exercise.weight = new_weight;
            }
          }
        }
        w
      })
      .collect();
    self.store.save_workouts(&self.workouts).await
  }

  /// Record a completed session against a workout. The exercises are a deep
  /// copy at log time; the workout id must resolve to a live workout.
  pub async fn log_workout(
    &mut self,
    workout_id: &str,
    note: &str,
    snapshot: Vec<Exercise>,
  ) -> CoreResult<LogEntry> {
    self.find_workout(workout_id)?;

    let entry = LogEntry::new(workout_id, note, snapshot);
    self.logs = prepend(entry.clone(), &self.logs);
    self.store.save_logs(&self.logs).await?;
    Ok(entry)
  }

  /// Encode a file's bytes, wrap them in an imported workout, and prepend it.
  pub async fn import_asset(&mut self, file_name: &str, raw: &[u8]) -> CoreResult<Workout> {
    let asset = ImportedAsset::new(file_name, raw);
    info!(
      "Imported {} ({} bytes, {})",
      file_name,
      asset.size,
      asset.content_type.mime()
    );

    let workout = Workout::from_asset(asset);
    self.workouts = prepend(workout.clone(), &self.workouts);
    self.store.save_workouts(&self.workouts).await?;
    Ok(workout)
  }

  fn find_workout(&self, id: &str) -> CoreResult<&Workout> {
    self
      .workouts
      .iter()
      .find(|w| w.id == id)
      .ok_or_else(|| CoreError::NotFound(format!("workout {id}")))
  }
}

/// New collection value with `item` at the front; the old value is untouched
/// until the replacement is assigned.
fn prepend<T: Clone>(item: T, rest: &[T]) -> Vec<T> {
  let mut next = Vec::with_capacity(rest.len() + 1);
  next.push(item);
  next.extend_from_slice(rest);
  next
}
