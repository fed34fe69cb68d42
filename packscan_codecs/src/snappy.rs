use std::io::{self, Read};

use snap::read::FrameDecoder;
use snap::write::FrameEncoder;

use packscan_core::{Codec, CodecId, Error, Result};

/// Snappy codec using the framed format.
///
/// Snappy has no effort knob; the frame format adds per-chunk CRCs, which is
/// what makes corrupt input detectable on decode.
pub struct SnappyFramedCodec;

impl Codec for SnappyFramedCodec {
    fn id(&self) -> CodecId {
        CodecId::SnappyFramed
    }

    fn encode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut enc = FrameEncoder::new(Vec::new());
        io::copy(src, &mut enc).map_err(Error::InputReadFailure)?;
        enc.into_inner()
            .map_err(|e| Error::InputReadFailure(io::Error::new(io::ErrorKind::Other, e.to_string())))
    }

    fn decode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        FrameDecoder::new(src)
            .read_to_end(&mut out)
            .map_err(|e| Error::corrupt(CodecId::SnappyFramed, e))?;
        Ok(out)
    }
}
