use std::fmt;
use std::io::Read;

use serde::Serialize;

use crate::error::Result;

/// Identifier of a bundled compression codec.
///
/// The set is closed: adding a codec means adding a variant here, an entry in
/// [`CodecId::ALL`], and a registry arm in `packscan_codecs`. Identity only —
/// all tuning (levels, window sizes) lives on the codec values themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecId {
    Deflate,
    Gzip,
    Bzip2,
    Lzma,
    Xz,
    Zstd,
    Lz4Block,
    Lz4Framed,
    SnappyFramed,
    Lzo,
    Brotli,
    Smaz,
}

impl CodecId {
    /// Every codec identifier, in the fixed order the best-fit scanner
    /// visits them. Keep this order stable: scan logs and diagnostics rely
    /// on it being reproducible across runs.
    pub const ALL: [CodecId; 12] = [
        CodecId::Deflate,
        CodecId::Gzip,
        CodecId::Bzip2,
        CodecId::Lzma,
        CodecId::Xz,
        CodecId::Zstd,
        CodecId::Lz4Block,
        CodecId::Lz4Framed,
        CodecId::SnappyFramed,
        CodecId::Lzo,
        CodecId::Brotli,
        CodecId::Smaz,
    ];

    /// Stable lowercase name, used for CLI display and scan report keys.
    pub const fn name(&self) -> &'static str {
        match self {
            CodecId::Deflate => "deflate",
            CodecId::Gzip => "gzip",
            CodecId::Bzip2 => "bzip2",
            CodecId::Lzma => "lzma",
            CodecId::Xz => "xz",
            CodecId::Zstd => "zstd",
            CodecId::Lz4Block => "lz4_block",
            CodecId::Lz4Framed => "lz4_framed",
            CodecId::SnappyFramed => "snappy_framed",
            CodecId::Lzo => "lzo",
            CodecId::Brotli => "brotli",
            CodecId::Smaz => "smaz",
        }
    }

    /// Parse a codec name as produced by [`name`](CodecId::name).
    /// Case-insensitive; returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<CodecId> {
        let name = name.to_ascii_lowercase();
        CodecId::ALL.iter().copied().find(|id| id.name() == name)
    }

    /// Whether this codec is exposed through the byte-stream interface.
    ///
    /// `Smaz` is a dictionary coder for short text and is only reachable
    /// through the text-specific functions; the scanner skips it by policy.
    pub const fn is_streaming(&self) -> bool {
        !matches!(self, CodecId::Smaz)
    }
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Core transcoding abstraction.
///
/// Each `Codec` implementation wraps one third-party compression stream and:
/// - Is identified by a stable [`CodecId`].
/// - Holds no state across calls — every `encode`/`decode` is independent,
///   so a single codec value can be shared freely between callers.
/// - Fully drains the input and materializes the complete output in memory.
///   Input is pumped through the underlying codec in fixed-size chunks, but
///   the returned `Vec<u8>` bounds usable input size to available memory.
pub trait Codec: Send + Sync {
    /// Stable identifier for registry lookup and scan reports.
    fn id(&self) -> CodecId;

    /// Human-readable codec name for CLI display.
    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Compress everything readable from `src` and return the complete
    /// compressed byte sequence; never a partial result.
    fn encode(&self, src: &mut dyn Read) -> Result<Vec<u8>>;

    /// Decompress everything readable from `src`.
    ///
    /// For any byte sequence produced by [`encode`](Codec::encode) of the
    /// same codec this returns exactly the original input bytes. Fails with
    /// [`Error::CorruptStream`](crate::Error::CorruptStream) when `src` is
    /// not a valid encoding for this codec.
    fn decode(&self, src: &mut dyn Read) -> Result<Vec<u8>>;
}
