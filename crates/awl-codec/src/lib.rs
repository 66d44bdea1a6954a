//! Text codecs for Awl.
//!
//! Base64 over the standard alphabet with padding. Encoding takes UTF-8
//! text (or raw bytes) and cannot fail; decoding trims surrounding
//! whitespace, then rejects anything the alphabet does not cover.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

pub mod error;

pub use error::{CodecError, CodecResult};

/// Encode text as Base64 over its UTF-8 bytes.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Encode raw bytes as Base64.
pub fn encode_bytes(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode Base64 into raw bytes.
///
/// Surrounding whitespace is trimmed first; whitespace inside the payload
/// is an error, as is missing padding.
pub fn decode(text: &str) -> CodecResult<Vec<u8>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CodecError::Empty);
    }
    Ok(STANDARD.decode(trimmed)?)
}

/// Decode Base64 into UTF-8 text.
pub fn decode_text(text: &str) -> CodecResult<String> {
    Ok(String::from_utf8(decode(text)?)?)
}
