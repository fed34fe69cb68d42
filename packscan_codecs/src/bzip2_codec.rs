use std::io::{self, Read};

use bzip2::read::BzDecoder;
use bzip2::write::BzEncoder;
use bzip2::Compression;

use packscan_core::{Codec, CodecId, Error, Result};

/// Bzip2 codec at the largest block size (`-9`).
///
/// Slowest of the bundled codecs by a wide margin, but often wins on large
/// text inputs, which is exactly what the best-fit scan exists to discover.
pub struct Bzip2Codec;

impl Codec for Bzip2Codec {
    fn id(&self) -> CodecId {
        CodecId::Bzip2
    }

    fn encode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut enc = BzEncoder::new(Vec::new(), Compression::best());
        io::copy(src, &mut enc).map_err(Error::InputReadFailure)?;
        enc.finish().map_err(Error::InputReadFailure)
    }

    fn decode(&self, src: &mut dyn Read) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        BzDecoder::new(src)
            .read_to_end(&mut out)
            .map_err(|e| Error::corrupt(CodecId::Bzip2, e))?;
        Ok(out)
    }
}
