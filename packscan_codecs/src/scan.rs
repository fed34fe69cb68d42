//! Exhaustive best-fit scanning: run every usable codec over one input and
//! report each codec's compressed size, so the caller can pick the smallest.

use std::fs::{self, File};
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use tracing::{debug, warn};

use packscan_core::{CodecId, Error, Result, ScanReport};

use crate::codec_for;

/// Best-fit scanner.
///
/// Codecs are attempted in [`CodecId::ALL`] order, each over a fresh read of
/// the input, and the absolute compressed length is recorded per codec.
/// Unavailable codecs are omitted silently — that is the established policy,
/// not an error — and the text-only codec is out of scope for byte-stream
/// scans. Only a failure to read the input itself aborts a scan.
///
/// ```no_run
/// use packscan_codecs::Scanner;
///
/// let report = Scanner::new().scan_bytes(b"some lovely data")?;
/// if let Some((codec, len)) = report.best() {
///     println!("{codec} wins at {len} bytes");
/// }
/// # Ok::<(), packscan_core::Error>(())
/// ```
pub struct Scanner {
    codecs: Vec<CodecId>,
    delete_source: bool,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Scanner over the full codec set.
    pub fn new() -> Self {
        Self {
            codecs: CodecId::ALL.to_vec(),
            delete_source: false,
        }
    }

    /// Scanner over a chosen subset, visited in the order given.
    pub fn with_codecs(codecs: &[CodecId]) -> Self {
        Self {
            codecs: codecs.to_vec(),
            delete_source: false,
        }
    }

    /// Remove the source file after [`scan_file`](Scanner::scan_file)
    /// returns, whether the scan succeeded or failed.
    ///
    /// Off by default: deleting the input is a destructive side effect that
    /// callers must opt into, for the measure-a-temporary-file workflow
    /// where the file is discarded once its best codec is known. A deletion
    /// failure is logged as a warning and never escalated to an error.
    pub fn delete_source_after_scan(mut self, yes: bool) -> Self {
        self.delete_source = yes;
        self
    }

    /// Scan an in-memory byte sequence.
    pub fn scan_bytes(&self, data: &[u8]) -> Result<ScanReport> {
        self.run(|| Ok(Cursor::new(data)))
    }

    /// Scan a string's UTF-8 bytes.
    pub fn scan_str(&self, text: &str) -> Result<ScanReport> {
        self.scan_bytes(text.as_bytes())
    }

    /// Scan the contents of a file.
    ///
    /// Each codec reads the file through its own handle. When
    /// [`delete_source_after_scan`](Scanner::delete_source_after_scan) is
    /// set, the file is removed after the scan completes — on the failure
    /// path too.
    pub fn scan_file(&self, path: impl AsRef<Path>) -> Result<ScanReport> {
        let path = path.as_ref();
        let result = self.run(|| {
            let file = File::open(path).map_err(Error::InputReadFailure)?;
            Ok(BufReader::new(file))
        });
        if self.delete_source {
            if let Err(e) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %e, "failed to delete scanned source file");
            }
        }
        result
    }

    /// Drive the scan loop, opening a fresh input reader per codec.
    fn run<R, F>(&self, open: F) -> Result<ScanReport>
    where
        R: Read,
        F: Fn() -> Result<R>,
    {
        let mut report = ScanReport::new();
        for &id in &self.codecs {
            if !id.is_streaming() {
                debug!(codec = %id, "skipping non-streaming codec");
                continue;
            }
            let Some(codec) = codec_for(id) else {
                debug!(codec = %id, "skipping unavailable codec");
                continue;
            };
            let mut src = open()?;
            match codec.encode(&mut src) {
                Ok(compressed) => {
                    report.insert(id, compressed.len() as u64);
                }
                Err(Error::UnavailableCodec { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(report)
    }
}
