//! Failure taxonomy shared across the core.

use serde::Serialize;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
  /// Bad input shape or range (empty name, negative weight)
  #[error("Validation failed: {0}")]
  Validation(String),

  /// An id did not resolve to an existing entity
  #[error("Not found: {0}")]
  NotFound(String),

  /// Payload is not valid codec output, or cannot be decoded
  #[error("Encoding error: {0}")]
  Encoding(String),

  /// Durable read/write failure (the in-memory state is kept)
  #[error("Storage error: {0}")]
  Storage(String),
}

impl Serialize for CoreError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

pub type CoreResult<T> = Result<T, CoreError>;
