use std::io;

use thiserror::Error;

use crate::codec::CodecId;

/// Failures surfaced by transcoding and scanning.
///
/// Per-codec unavailability is absorbed by the best-fit scanner and only
/// reaches callers of the single-codec entry points; every other kind
/// propagates so the caller can decide to retry, skip, or abort. A failed
/// post-scan source deletion is deliberately *not* represented here — it is
/// logged as a warning and never escalated.
#[derive(Debug, Error)]
pub enum Error {
    /// The codec's implementation is not compiled into this build.
    /// Recoverable: treat as "this codec is not an option right now".
    #[error("codec {codec} is not available in this build")]
    UnavailableCodec { codec: CodecId },

    /// Decode input is not a valid encoding for the claimed codec.
    ///
    /// Stream decoders interleave source I/O errors with format errors, so
    /// both surface as this variant; see [`Error::InputReadFailure`] for the
    /// encode-side and scanner input contract.
    #[error("input is not a valid {codec} stream")]
    CorruptStream {
        codec: CodecId,
        #[source]
        source: io::Error,
    },

    /// The source stream or file could not be read. Aborts the current
    /// operation — a single transcode, or an entire scan.
    #[error("failed to read input")]
    InputReadFailure(#[source] io::Error),
}

impl Error {
    /// Wrap a decoder-layer failure as a corrupt-stream error for `codec`.
    pub fn corrupt<E>(codec: CodecId, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::CorruptStream {
            codec,
            source: io::Error::new(io::ErrorKind::InvalidData, source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
