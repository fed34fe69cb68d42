use std::collections::BTreeMap;

use serde::Serialize;

use crate::codec::CodecId;

/// Result of a best-fit scan: one entry per codec that produced output.
///
/// The recorded metric is the absolute compressed length in bytes — never a
/// savings delta. Entries are unique per codec and the container is
/// order-independent; the scanner's visiting order is what makes repeated
/// scans reproducible, not this map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScanReport {
    sizes: BTreeMap<CodecId, u64>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `compressed_len` for `codec`, replacing any earlier entry.
    pub fn insert(&mut self, codec: CodecId, compressed_len: u64) {
        self.sizes.insert(codec, compressed_len);
    }

    /// Compressed length recorded for `codec`, if it was scanned.
    pub fn get(&self, codec: CodecId) -> Option<u64> {
        self.sizes.get(&codec).copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CodecId, u64)> + '_ {
        self.sizes.iter().map(|(&id, &len)| (id, len))
    }

    /// The codec that produced the smallest output, with its size.
    ///
    /// Ties go to the codec that comes first in the [`CodecId`] enumeration
    /// order. `None` when the scan produced no entries.
    pub fn best(&self) -> Option<(CodecId, u64)> {
        let mut best: Option<(CodecId, u64)> = None;
        for (id, len) in self.iter() {
            match best {
                Some((_, smallest)) if smallest <= len => {}
                _ => best = Some((id, len)),
            }
        }
        best
    }
}
