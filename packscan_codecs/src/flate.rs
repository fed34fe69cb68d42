use std::io::{self, Read};

use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;

use packscan_core::{Codec, CodecId, Error, Result};

/// Deflate codec over the zlib-wrapped deflate stream.
///
/// The two-byte zlib header and Adler-32 trailer make the stream
/// self-validating on decode, which is what lets corrupt input be detected
/// instead of silently inflating garbage.
pub struct DeflateCodec {
    /// Compression level (0 = store, 9 = smallest output).
    pub level: u32,
}

impl Default for DeflateCodec {
    fn default() -> Self {
        Self { level: 9 }
    }
}

impl DeflateCodec {
    pub fn new(level: u32) -> Self {
        Self { level: level.min(9) }
    }
}

impl Codec for DeflateCodec {
    fn id(&self) -> CodecId {
        CodecId::Deflate
    }

    fn encode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::new(self.level));
        io::copy(src, &mut enc).map_err(Error::InputReadFailure)?;
        enc.finish().map_err(Error::InputReadFailure)
    }

    fn decode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        ZlibDecoder::new(src)
            .read_to_end(&mut out)
            .map_err(|e| Error::corrupt(CodecId::Deflate, e))?;
        Ok(out)
    }
}

/// Gzip codec. Same deflate core as [`DeflateCodec`], framed with the gzip
/// header and CRC-32 trailer.
pub struct GzipCodec {
    pub level: u32,
}

impl Default for GzipCodec {
    fn default() -> Self {
        Self { level: 9 }
    }
}

impl GzipCodec {
    pub fn new(level: u32) -> Self {
        Self { level: level.min(9) }
    }
}

impl Codec for GzipCodec {
    fn id(&self) -> CodecId {
        CodecId::Gzip
    }

    fn encode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut enc = GzEncoder::new(Vec::new(), Compression::new(self.level));
        io::copy(src, &mut enc).map_err(Error::InputReadFailure)?;
        enc.finish().map_err(Error::InputReadFailure)
    }

    fn decode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        GzDecoder::new(src)
            .read_to_end(&mut out)
            .map_err(|e| Error::corrupt(CodecId::Gzip, e))?;
        Ok(out)
    }
}
