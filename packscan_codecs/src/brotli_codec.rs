use std::io::Read;

use packscan_core::{Codec, CodecId, Error, Result};

/// Brotli codec.
///
/// Quality 11 with a 22-bit window, the crate's densest setting. Best on
/// text-like inputs where its built-in dictionary pays off.
pub struct BrotliCodec {
    /// Quality (0 = fastest, 11 = smallest output).
    pub quality: u32,
}

const LG_WINDOW_SIZE: u32 = 22;
const BUFFER_SIZE: usize = 4096;

impl Default for BrotliCodec {
    fn default() -> Self {
        Self { quality: 11 }
    }
}

impl BrotliCodec {
    pub fn new(quality: u32) -> Self {
        Self { quality: quality.min(11) }
    }
}

impl Codec for BrotliCodec {
    fn id(&self) -> CodecId {
        CodecId::Brotli
    }

    fn encode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        brotli::CompressorReader::new(src, BUFFER_SIZE, self.quality, LG_WINDOW_SIZE)
            .read_to_end(&mut out)
            .map_err(Error::InputReadFailure)?;
        Ok(out)
    }

    fn decode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        brotli::Decompressor::new(src, BUFFER_SIZE)
            .read_to_end(&mut out)
            .map_err(|e| Error::corrupt(CodecId::Brotli, e))?;
        Ok(out)
    }
}
