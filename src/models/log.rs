use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::uid;
use super::workout::Exercise;

/// Free-text note plus the exercises performed, snapshotted at log time.
/// The snapshot is a value copy: later edits to the source workout never
/// change what was recorded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogDetails {
  #[serde(default)]
  pub note: String,
  #[serde(default)]
  pub exercises: Vec<Exercise>,
}

/// An immutable record of a completed session. `workout_id` is an advisory
/// back-reference: the workout it names may since have been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
  pub id: String,
  #[serde(rename = "workoutId")]
  pub workout_id: String,
  pub date: DateTime<Utc>,
  pub details: LogDetails,
}

impl LogEntry {
  pub fn new(workout_id: &str, note: &str, exercises: Vec<Exercise>) -> Self {
    Self {
      id: uid("log"),
      workout_id: workout_id.to_string(),
      date: Utc::now(),
      details: LogDetails {
        note: note.to_string(),
        exercises,
      },
    }
  }

  /// Total volume recorded by this entry: sum of sets x reps x weight over
  /// the snapshot.
  pub fn volume(&self) -> f64 {
    self.details.exercises.iter().map(Exercise::volume).sum()
  }
}
