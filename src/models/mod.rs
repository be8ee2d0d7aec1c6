pub mod asset;
pub mod log;
pub mod workout;

pub use asset::{ContentType, ImportedAsset};
pub use log::{LogDetails, LogEntry};
pub use workout::{Exercise, Workout, WorkoutType};

use rand::Rng;

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const ID_LEN: usize = 7;

/// Generate an entity id: a kind prefix plus seven random base-36 characters,
/// e.g. `w_k29dh3a`. Stable for the entity's lifetime, unique in practice for
/// a single-user data set.
pub fn uid(prefix: &str) -> String {
  let mut rng = rand::rng();
  let suffix: String = (0..ID_LEN)
    .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
    .collect();
  format!("{prefix}_{suffix}")
}
