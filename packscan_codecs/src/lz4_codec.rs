use std::io::{self, Read};

use lz4_flex::frame::{FrameDecoder, FrameEncoder};
use lz4_flex::{compress_prepend_size, decompress_size_prepended};

use packscan_core::{Codec, CodecId, Error, Result};

/// LZ4 block codec with a little-endian size prefix.
///
/// The block format has no framing of its own, so the whole input is
/// buffered before compressing and the raw length is prepended for decode.
pub struct Lz4BlockCodec;

impl Codec for Lz4BlockCodec {
    fn id(&self) -> CodecId {
        CodecId::Lz4Block
    }

    fn encode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut raw = Vec::new();
        src.read_to_end(&mut raw).map_err(Error::InputReadFailure)?;
        Ok(compress_prepend_size(&raw))
    }

    fn decode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        src.read_to_end(&mut data).map_err(Error::InputReadFailure)?;
        decompress_size_prepended(&data).map_err(|e| Error::corrupt(CodecId::Lz4Block, e))
    }
}

/// LZ4 frame codec — the interoperable `.lz4` container.
pub struct Lz4FramedCodec;

impl Codec for Lz4FramedCodec {
    fn id(&self) -> CodecId {
        CodecId::Lz4Framed
    }

    fn encode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut enc = FrameEncoder::new(Vec::new());
        io::copy(src, &mut enc).map_err(Error::InputReadFailure)?;
        enc.finish()
            .map_err(|e| Error::InputReadFailure(io::Error::new(io::ErrorKind::Other, e)))
    }

    fn decode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        FrameDecoder::new(src)
            .read_to_end(&mut out)
            .map_err(|e| Error::corrupt(CodecId::Lz4Framed, e))?;
        Ok(out)
    }
}
