use std::io::Read;

use packscan_core::{Codec, CodecId, Error, Result};

/// Zstandard codec.
///
/// Defaults to level 22, the top of the supported range: the best-fit scan
/// compares smallest achievable outputs, so every codec runs at full effort.
/// Use [`ZstdCodec::new`] for a cheaper level when encode latency matters
/// more than the size measurement.
pub struct ZstdCodec {
    /// Compression level (1 = fast / larger, 22 = slow / smallest).
    pub level: i32,
}

impl Default for ZstdCodec {
    fn default() -> Self {
        Self { level: 22 }
    }
}

impl ZstdCodec {
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl Codec for ZstdCodec {
    fn id(&self) -> CodecId {
        CodecId::Zstd
    }

    fn encode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        zstd::stream::encode_all(src, self.level).map_err(Error::InputReadFailure)
    }

    fn decode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        zstd::decode_all(src).map_err(|e| Error::corrupt(CodecId::Zstd, e))
    }
}
