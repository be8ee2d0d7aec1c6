use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::uid;
use crate::codec;

/// ---------------------------------------------------------------------------
/// Content Classification
/// ---------------------------------------------------------------------------

/// MIME-equivalent classification of an imported document, derived from the
/// file extension. Unrecognized extensions fall back to a generic binary type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
  #[serde(rename = "application/pdf")]
  Pdf,
  #[serde(rename = "application/msword")]
  Doc,
  #[serde(rename = "application/vnd.openxmlformats-officedocument.wordprocessingml.document")]
  Docx,
  #[serde(rename = "application/octet-stream")]
  Binary,
}

impl ContentType {
  /// Classify by file extension, case-insensitively.
  pub fn from_file_name(name: &str) -> Self {
    let lower = name.to_lowercase();
    if lower.ends_with(".pdf") {
      ContentType::Pdf
    } else if lower.ends_with(".docx") {
      ContentType::Docx
    } else if lower.ends_with(".doc") {
      ContentType::Doc
    } else {
      ContentType::Binary
    }
  }

  pub fn mime(&self) -> &'static str {
    match self {
      ContentType::Pdf => "application/pdf",
      ContentType::Doc => "application/msword",
      ContentType::Docx => {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
      }
      ContentType::Binary => "application/octet-stream",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Imported Asset
/// ---------------------------------------------------------------------------

/// An opaque binary document attached to a workout. Immutable once created;
/// the payload is stored codec-encoded so it survives the text-based store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedAsset {
  pub id: String,
  pub name: String,
  #[serde(rename = "type")]
  pub content_type: ContentType,
  pub data: String,
  pub size: u64,
  pub date: DateTime<Utc>,
}

impl ImportedAsset {
  /// Encode raw file content into a storable asset, classifying the content
  /// type from the file name.
  pub fn new(file_name: &str, raw: &[u8]) -> Self {
    Self {
      id: uid("imp"),
      name: file_name.to_string(),
      content_type: ContentType::from_file_name(file_name),
      data: codec::encode(raw),
      size: raw.len() as u64,
      date: Utc::now(),
    }
  }
}
