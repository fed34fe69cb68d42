#[cfg(feature = "brotli")]
mod brotli_codec;
#[cfg(feature = "bzip2")]
mod bzip2_codec;
mod flate;
mod lz4_codec;
pub mod scan;
pub mod smaz_codec;
#[cfg(feature = "snappy")]
mod snappy;
#[cfg(feature = "xz")]
mod xz;
mod zstd_codec;

#[cfg(feature = "brotli")]
pub use brotli_codec::BrotliCodec;
#[cfg(feature = "bzip2")]
pub use bzip2_codec::Bzip2Codec;
pub use flate::{DeflateCodec, GzipCodec};
pub use lz4_codec::{Lz4BlockCodec, Lz4FramedCodec};
pub use scan::Scanner;
#[cfg(feature = "snappy")]
pub use snappy::SnappyFramedCodec;
#[cfg(feature = "xz")]
pub use xz::{LzmaCodec, XzCodec};
pub use zstd_codec::ZstdCodec;

use std::io::Read;
use std::sync::Arc;

use packscan_core::{Codec, CodecId, Error, Result};

/// Resolve a codec identifier to its implementation at default tuning.
///
/// `None` means the codec is not usable in this build: its backing crate is
/// compiled out (feature off), no implementation is bundled (`Lzo`), or the
/// identifier is not part of the byte-stream interface (`Smaz`). Callers
/// that want a non-default level construct the codec type directly.
pub fn codec_for(id: CodecId) -> Option<Arc<dyn Codec>> {
    match id {
        CodecId::Deflate => Some(Arc::new(DeflateCodec::default())),
        CodecId::Gzip => Some(Arc::new(GzipCodec::default())),
        #[cfg(feature = "bzip2")]
        CodecId::Bzip2 => Some(Arc::new(Bzip2Codec)),
        #[cfg(not(feature = "bzip2"))]
        CodecId::Bzip2 => None,
        #[cfg(feature = "xz")]
        CodecId::Lzma => Some(Arc::new(LzmaCodec)),
        #[cfg(not(feature = "xz"))]
        CodecId::Lzma => None,
        #[cfg(feature = "xz")]
        CodecId::Xz => Some(Arc::new(XzCodec)),
        #[cfg(not(feature = "xz"))]
        CodecId::Xz => None,
        CodecId::Zstd => Some(Arc::new(ZstdCodec::default())),
        CodecId::Lz4Block => Some(Arc::new(Lz4BlockCodec)),
        CodecId::Lz4Framed => Some(Arc::new(Lz4FramedCodec)),
        #[cfg(feature = "snappy")]
        CodecId::SnappyFramed => Some(Arc::new(SnappyFramedCodec)),
        #[cfg(not(feature = "snappy"))]
        CodecId::SnappyFramed => None,
        // No LZO implementation is bundled; the identifier is reserved and
        // always reports unavailable.
        CodecId::Lzo => None,
        #[cfg(feature = "brotli")]
        CodecId::Brotli => Some(Arc::new(BrotliCodec::default())),
        #[cfg(not(feature = "brotli"))]
        CodecId::Brotli => None,
        // Text-only; see the smaz_codec module.
        CodecId::Smaz => None,
    }
}

/// Pure capability probe: whether `id` can transcode in this build.
/// Stable for the lifetime of the process.
pub fn is_available(id: CodecId) -> bool {
    codec_for(id).is_some()
}

/// Compress everything readable from `src` with the codec named by `id`.
///
/// Fails with [`Error::UnavailableCodec`] when the codec is not usable in
/// this build and [`Error::InputReadFailure`] when `src` cannot be read.
pub fn encode(id: CodecId, src: &mut dyn Read) -> Result<Vec<u8>> {
    match codec_for(id) {
        Some(codec) => codec.encode(src),
        None => Err(Error::UnavailableCodec { codec: id }),
    }
}

/// Decompress everything readable from `src` with the codec named by `id`.
///
/// For bytes produced by [`encode`] with the same `id`, returns exactly the
/// original input. Fails with [`Error::CorruptStream`] when `src` is not a
/// valid encoding for that codec.
pub fn decode(id: CodecId, src: &mut dyn Read) -> Result<Vec<u8>> {
    match codec_for(id) {
        Some(codec) => codec.decode(src),
        None => Err(Error::UnavailableCodec { codec: id }),
    }
}
