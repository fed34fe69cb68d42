use std::io::{self, Read};

use xz2::read::XzDecoder;
use xz2::stream::{Check, LzmaOptions, Stream};
use xz2::write::XzEncoder;

use packscan_core::{Codec, CodecId, Error, Result};

/// Preset shared by both containers. 9 trades encode speed for the smallest
/// output, matching the effort the other bundled codecs run at.
const PRESET: u32 = 9;

fn stream_err(e: xz2::stream::Error) -> Error {
    // Raised only for invalid encoder configuration, which a fixed preset
    // rules out; mapped rather than unwrapped to keep the no-panic contract.
    Error::InputReadFailure(io::Error::new(io::ErrorKind::Other, e))
}

/// LZMA codec using the legacy lzma-alone container (`.lzma`).
pub struct LzmaCodec;

impl Codec for LzmaCodec {
    fn id(&self) -> CodecId {
        CodecId::Lzma
    }

    fn encode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let opts = LzmaOptions::new_preset(PRESET).map_err(stream_err)?;
        let stream = Stream::new_lzma_encoder(&opts).map_err(stream_err)?;
        let mut enc = XzEncoder::new_stream(Vec::new(), stream);
        io::copy(src, &mut enc).map_err(Error::InputReadFailure)?;
        enc.finish().map_err(Error::InputReadFailure)
    }

    fn decode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let stream = Stream::new_lzma_decoder(u64::MAX)
            .map_err(|e| Error::corrupt(CodecId::Lzma, e))?;
        let mut out = Vec::new();
        XzDecoder::new_stream(src, stream)
            .read_to_end(&mut out)
            .map_err(|e| Error::corrupt(CodecId::Lzma, e))?;
        Ok(out)
    }
}

/// XZ codec (`.xz` container) with a SHA-256 integrity check per block.
pub struct XzCodec;

impl Codec for XzCodec {
    fn id(&self) -> CodecId {
        CodecId::Xz
    }

    fn encode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let stream = Stream::new_easy_encoder(PRESET, Check::Sha256).map_err(stream_err)?;
        let mut enc = XzEncoder::new_stream(Vec::new(), stream);
        io::copy(src, &mut enc).map_err(Error::InputReadFailure)?;
        enc.finish().map_err(Error::InputReadFailure)
    }

    fn decode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        XzDecoder::new(src)
            .read_to_end(&mut out)
            .map_err(|e| Error::corrupt(CodecId::Xz, e))?;
        Ok(out)
    }
}
