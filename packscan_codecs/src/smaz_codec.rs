//! Out-of-band text codec.
//!
//! Smaz is a dictionary coder tuned for short English strings. It is not a
//! byte-stream codec — it has no framing, no streaming mode, and expands
//! arbitrary binary input — so it lives outside the [`Codec`] registry and
//! the best-fit scan, reachable only through these text-specific functions.
//!
//! [`Codec`]: packscan_core::Codec

use packscan_core::{CodecId, Error, Result};

/// Compress a short text with the smaz dictionary coder.
pub fn compress_text(text: &str) -> Vec<u8> {
    smaz::compress(text.as_bytes())
}

/// Reverse of [`compress_text`].
///
/// Fails with [`Error::CorruptStream`] when `data` is not a valid smaz
/// encoding or decodes to non-UTF-8 bytes.
pub fn decompress_text(data: &[u8]) -> Result<String> {
    let bytes = smaz::decompress(data).map_err(|e| Error::corrupt(CodecId::Smaz, e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::corrupt(CodecId::Smaz, e.to_string()))
}
