//! Test utilities and helpers shared across unit tests.
//!
//! Provides in-memory store setup, pre-populated trackers, and mock data
//! factories.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Exercise, LogDetails, LogEntry, Workout, WorkoutType};
use crate::store::Store;
use crate::tracker::Tracker;

/// ---------------------------------------------------------------------------
/// Store / Tracker Setup
/// ---------------------------------------------------------------------------

/// An in-memory store, migrated and ready to use.
pub async fn setup_test_store() -> Store {
  Store::in_memory()
    .await
    .expect("Failed to create in-memory store")
}

/// A tracker bootstrapped from an empty in-memory store (one starter workout,
/// no log entries).
pub async fn seeded_tracker() -> Tracker {
  Tracker::load(setup_test_store().await).await
}

/// A tracker plus a freshly created workout holding two exercises.
pub async fn tracker_with_workout() -> (Tracker, Workout) {
  let mut tracker = seeded_tracker().await;
  let created = tracker
    .create_workout("Push Day", WorkoutType::Strength)
    .await
    .expect("Failed to create workout");

  tracker
    .add_exercise(&created.id, "Bench Press", 3, 8, 60.0)
    .await
    .expect("Failed to add exercise");
  tracker
    .add_exercise(&created.id, "Incline Dumbbell Press", 3, 10, 22.5)
    .await
    .expect("Failed to add exercise");

  let workout = tracker
    .workouts()
    .iter()
    .find(|w| w.id == created.id)
    .expect("created workout present")
    .clone();

  (tracker, workout)
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

pub fn mock_exercise(name: &str, sets: u32, reps: u32, weight: f64) -> Exercise {
  Exercise::new(name, sets, reps, weight)
}

/// A log entry recorded `days_ago` days before now.
pub fn mock_log_entry(workout_id: &str, days_ago: i64, exercises: Vec<Exercise>) -> LogEntry {
  LogEntry {
    id: crate::models::uid("log"),
    workout_id: workout_id.to_string(),
    date: datetime_days_ago(days_ago),
    details: LogDetails {
      note: String::new(),
      exercises,
    },
  }
}

/// ---------------------------------------------------------------------------
/// Time Helpers
/// ---------------------------------------------------------------------------

pub fn datetime_days_ago(days: i64) -> DateTime<Utc> {
  Utc::now() - Duration::days(days)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn seeded_tracker_starts_from_defaults() {
    let tracker = seeded_tracker().await;
    assert_eq!(tracker.workouts().len(), 1);
    assert!(tracker.logs().is_empty());
  }

  #[tokio::test]
  async fn tracker_with_workout_exposes_its_exercises() {
    let (tracker, workout) = tracker_with_workout().await;
    assert_eq!(workout.exercises.len(), 2);

    let live = tracker
      .workouts()
      .iter()
      .find(|w| w.id == workout.id)
      .expect("created workout present");
    assert_eq!(live.exercises, workout.exercises);
  }

  #[test]
  fn mock_log_entry_lands_in_the_past() {
    let entry = mock_log_entry("w_aaaaaaa", 7, vec![]);
    let age = Utc::now() - entry.date;
    assert!(age.num_days() >= 6 && age.num_days() <= 8);
  }
}
