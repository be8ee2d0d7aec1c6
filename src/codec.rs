//! Binary <-> text-safe codec for imported documents.
//!
//! Imported files are arbitrary bytes, but the store only holds text. This
//! module maps byte sequences onto a radix-64 alphabet (with `=` padding) and
//! back, byte-for-byte. `decode` is strict: anything that is not valid
//! encoder output is rejected rather than silently truncated.

use crate::error::{CoreError, CoreResult};
use crate::models::{ContentType, ImportedAsset};

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const PAD: u8 = b'=';

/// Input chunk size for encoding. A multiple of the 3-byte group size, so no
/// group ever straddles a chunk boundary.
const ENCODE_CHUNK: usize = 3 * 1024;

/// ---------------------------------------------------------------------------
/// Encoding
/// ---------------------------------------------------------------------------

/// Encode bytes into the text-safe representation. Total: every byte sequence,
/// including the empty one, has an encoding.
pub fn encode(bytes: &[u8]) -> String {
  let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
  for chunk in bytes.chunks(ENCODE_CHUNK) {
    encode_chunk(chunk, &mut out);
  }
  out
}

fn encode_chunk(chunk: &[u8], out: &mut String) {
  for group in chunk.chunks(3) {
    let b0 = group[0] as u32;
    let b1 = group.get(1).copied().unwrap_or(0) as u32;
    let b2 = group.get(2).copied().unwrap_or(0) as u32;
    let n = (b0 << 16) | (b1 << 8) | b2;

    out.push(ALPHABET[(n >> 18) as usize & 0x3f] as char);
    out.push(ALPHABET[(n >> 12) as usize & 0x3f] as char);
    out.push(if group.len() > 1 {
      ALPHABET[(n >> 6) as usize & 0x3f] as char
    } else {
      PAD as char
    });
    out.push(if group.len() > 2 {
      ALPHABET[n as usize & 0x3f] as char
    } else {
      PAD as char
    });
  }
}

/// ---------------------------------------------------------------------------
/// Decoding
/// ---------------------------------------------------------------------------

fn symbol_value(c: u8) -> Option<u32> {
  match c {
    b'A'..=b'Z' => Some((c - b'A') as u32),
    b'a'..=b'z' => Some((c - b'a') as u32 + 26),
    b'0'..=b'9' => Some((c - b'0') as u32 + 52),
    b'+' => Some(62),
    b'/' => Some(63),
    _ => None,
  }
}

/// Decode text produced by [`encode`] back into the exact original bytes.
///
/// Fails with [`CoreError::Encoding`] on any malformed input: length not a
/// multiple of four, symbols outside the alphabet, or padding anywhere but
/// the tail of the final group.
pub fn decode(text: &str) -> CoreResult<Vec<u8>> {
  let bytes = text.as_bytes();
  if bytes.is_empty() {
    return Ok(Vec::new());
  }
  if bytes.len() % 4 != 0 {
    return Err(CoreError::Encoding(format!(
      "length {} is not a multiple of 4",
      bytes.len()
    )));
  }

  let mut out = Vec::with_capacity(bytes.len() / 4 * 3);
  let last_group = bytes.len() / 4 - 1;

  for (index, group) in bytes.chunks(4).enumerate() {
    let pad = match group {
      [_, _, PAD, PAD] => 2,
      [_, _, _, PAD] => 1,
      _ => 0,
    };
    if pad > 0 && index != last_group {
      return Err(CoreError::Encoding("padding before end of input".to_string()));
    }
    // Padding may only ever be a suffix; the pattern above catches trailing
    // pads, so any `=` still present here is misplaced.
    if group[..4 - pad].contains(&PAD) {
      return Err(CoreError::Encoding("misplaced padding symbol".to_string()));
    }

    let mut n: u32 = 0;
    for &c in &group[..4 - pad] {
      let v = symbol_value(c).ok_or_else(|| {
        CoreError::Encoding(format!("invalid symbol {:?}", c as char))
      })?;
      n = (n << 6) | v;
    }
    n <<= 6 * pad as u32;

    out.push((n >> 16) as u8);
    if pad < 2 {
      out.push((n >> 8) as u8);
    }
    if pad < 1 {
      out.push(n as u8);
    }
  }

  Ok(out)
}

/// ---------------------------------------------------------------------------
/// Openable Document
/// ---------------------------------------------------------------------------

/// An ephemeral, openable view of an imported asset: the recovered bytes plus
/// the classification the host environment needs to display or download them.
/// Nothing is written to durable storage.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenableDocument {
  pub file_name: String,
  pub content_type: ContentType,
  pub bytes: Vec<u8>,
}

impl OpenableDocument {
  /// Reconstruct the original bytes from a stored asset. The content type is
  /// carried through as classification only; it never affects the bytes.
  pub fn from_asset(asset: &ImportedAsset) -> CoreResult<Self> {
    let bytes = decode(&asset.data)?;
    Ok(Self {
      file_name: asset.name.clone(),
      content_type: asset.content_type,
      bytes,
    })
  }
}
