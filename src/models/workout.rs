use serde::{Deserialize, Serialize};

use super::asset::ImportedAsset;
use super::uid;

/// Workout category. `Imported` is reserved for workouts that wrap an
/// [`ImportedAsset`]; those carry no exercises of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
  Strength,
  Cardio,
  Imported,
}

/// One movement definition inside a workout: sets x reps at a weight in kg.
///
/// Numeric fields default to zero on deserialization so that dirty historical
/// data (missing sets/reps/weight) loads cleanly and contributes zero volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub sets: u32,
  #[serde(default)]
  pub reps: u32,
  #[serde(default)]
  pub weight: f64,
}

impl Exercise {
  pub fn new(name: &str, sets: u32, reps: u32, weight: f64) -> Self {
    Self {
      id: uid("ex"),
      name: name.to_string(),
      sets,
      reps,
      weight,
    }
  }

  /// Training volume of this exercise: sets x reps x weight.
  pub fn volume(&self) -> f64 {
    self.sets as f64 * self.reps as f64 * self.weight
  }
}

/// A named template of exercises, or a wrapper around an imported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
  pub id: String,
  pub name: String,
  #[serde(rename = "type")]
  pub kind: WorkoutType,
  #[serde(default)]
  pub exercises: Vec<Exercise>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub imported: Option<ImportedAsset>,
}

impl Workout {
  /// A regular (strength/cardio) workout with a fresh id and no exercises.
  pub fn new(name: &str, kind: WorkoutType) -> Self {
    Self {
      id: uid("w"),
      name: name.to_string(),
      kind,
      exercises: Vec::new(),
      imported: None,
    }
  }

  /// Wrap an imported asset. The workout shares the asset's id and file name
  /// and never carries exercises, keeping the `imported` type and the asset
  /// presence in lockstep.
  pub fn from_asset(asset: ImportedAsset) -> Self {
    Self {
      id: asset.id.clone(),
      name: asset.name.clone(),
      kind: WorkoutType::Imported,
      exercises: Vec::new(),
      imported: Some(asset),
    }
  }

  pub fn exercise(&self, exercise_id: &str) -> Option<&Exercise> {
    self.exercises.iter().find(|e| e.id == exercise_id)
  }
}
