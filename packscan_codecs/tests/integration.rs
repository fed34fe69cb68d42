//! Integration tests for the codec registry and the best-fit scanner.
//!
//! Everything here runs under any feature combination: round-trip coverage
//! iterates the codecs actually available in the build, and the scan tests
//! assert completeness relative to that same set.

use std::io::Cursor;

use packscan_codecs::{decode, encode, is_available, smaz_codec, Scanner};
use packscan_core::{Codec, CodecId, Error};

const TEST_DATA: &[u8] = b"This is some lovely data to compress";

/// Generate `len` deterministic bytes using a simple LCG.
fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (rng >> 56) as u8
        })
        .collect()
}

/// Generate `len` highly compressible bytes (repeating pattern).
fn compressible_bytes(len: usize) -> Vec<u8> {
    let pattern = b"the quick brown fox jumps over the lazy dog. ";
    (0..len).map(|i| pattern[i % pattern.len()]).collect()
}

/// Streaming codecs usable in this build.
fn available_streaming() -> Vec<CodecId> {
    CodecId::ALL
        .iter()
        .copied()
        .filter(|id| id.is_streaming() && is_available(*id))
        .collect()
}

fn roundtrip(id: CodecId, data: &[u8]) -> Vec<u8> {
    let compressed = encode(id, &mut Cursor::new(data)).unwrap();
    decode(id, &mut Cursor::new(&compressed)).unwrap()
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("packscan_test_{}.dat", name))
}

// ── round-trip law ─────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_short_ascii() {
    for id in available_streaming() {
        assert_eq!(
            roundtrip(id, TEST_DATA),
            TEST_DATA,
            "{id} should round-trip the short ASCII input byte-exactly"
        );
    }
}

#[test]
fn test_roundtrip_empty_input() {
    for id in available_streaming() {
        assert!(
            roundtrip(id, b"").is_empty(),
            "{id} should round-trip empty input to empty output"
        );
    }
}

/// Inputs larger than the internal copy buffer, so every stream codec has to
/// pump multiple chunks through the underlying encoder.
#[test]
fn test_roundtrip_multi_chunk_compressible() {
    let data = compressible_bytes(64 * 1024 + 777);
    for id in available_streaming() {
        let compressed = encode(id, &mut Cursor::new(&data)).unwrap();
        assert!(
            compressed.len() < data.len(),
            "{id} should shrink highly compressible input: {} vs {}",
            compressed.len(),
            data.len()
        );
        let raw = decode(id, &mut Cursor::new(&compressed)).unwrap();
        assert_eq!(raw, data, "{id} multi-chunk round-trip mismatch");
    }
}

#[test]
fn test_roundtrip_random_bytes() {
    let data = pseudo_random_bytes(16 * 1024, 0xDEAD_BEEF);
    for id in available_streaming() {
        assert_eq!(roundtrip(id, &data), data, "{id} random-data round-trip mismatch");
    }
}

#[test]
fn test_roundtrip_with_custom_levels() {
    use packscan_codecs::{DeflateCodec, ZstdCodec};

    for codec in [&DeflateCodec::new(1) as &dyn Codec, &ZstdCodec::new(3)] {
        let compressed = codec.encode(&mut Cursor::new(TEST_DATA)).unwrap();
        let raw = codec.decode(&mut Cursor::new(&compressed)).unwrap();
        assert_eq!(raw, TEST_DATA);
    }
}

// ── availability policy ────────────────────────────────────────────────────

#[test]
fn test_reserved_and_text_codecs_are_unavailable() {
    assert!(!is_available(CodecId::Lzo));
    assert!(!is_available(CodecId::Smaz));

    let err = encode(CodecId::Lzo, &mut Cursor::new(TEST_DATA)).unwrap_err();
    assert!(matches!(err, Error::UnavailableCodec { codec: CodecId::Lzo }));

    let err = decode(CodecId::Smaz, &mut Cursor::new(TEST_DATA)).unwrap_err();
    assert!(matches!(err, Error::UnavailableCodec { codec: CodecId::Smaz }));
}

#[test]
fn test_is_available_is_idempotent() {
    for id in CodecId::ALL {
        assert_eq!(is_available(id), is_available(id));
    }
}

// ── corrupt input ──────────────────────────────────────────────────────────

#[test]
fn test_corrupt_stream_is_detected() {
    let garbage = b"definitely not a compressed stream";
    for id in [CodecId::Gzip, CodecId::Zstd] {
        let err = decode(id, &mut Cursor::new(garbage)).unwrap_err();
        assert!(
            matches!(err, Error::CorruptStream { codec, .. } if codec == id),
            "{id} should reject garbage input with CorruptStream, got {err:?}"
        );
    }
}

// ── best-fit scanning ──────────────────────────────────────────────────────

#[test]
fn test_scan_subset_returns_one_entry_per_codec() {
    let ids = [CodecId::Deflate, CodecId::Gzip, CodecId::Zstd];
    let report = Scanner::with_codecs(&ids).scan_bytes(TEST_DATA).unwrap();

    assert_eq!(report.len(), 3);
    for id in ids {
        let len = report.get(id).unwrap_or_else(|| panic!("missing entry for {id}"));
        assert!(len > 0, "{id} recorded an empty output");
    }
}

#[test]
fn test_scan_completeness_matches_availability() {
    let report = Scanner::new().scan_bytes(TEST_DATA).unwrap();

    assert_eq!(report.len(), available_streaming().len());
    assert_eq!(report.get(CodecId::Lzo), None);
    assert_eq!(report.get(CodecId::Smaz), None);
}

#[test]
fn test_scan_is_deterministic() {
    let data = compressible_bytes(8 * 1024);
    let first = Scanner::new().scan_bytes(&data).unwrap();
    let second = Scanner::new().scan_bytes(&data).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_scan_best_beats_raw_size_on_compressible_input() {
    let data = compressible_bytes(8 * 1024);
    let report = Scanner::new().scan_bytes(&data).unwrap();
    let (codec, len) = report.best().expect("at least one codec is always built in");
    assert!(
        len < data.len() as u64,
        "best codec {codec} should beat the raw size: {len} vs {}",
        data.len()
    );
}

#[test]
fn test_scan_str_matches_scan_bytes() {
    let text = "This is some lovely data to compress";
    let scanner = Scanner::with_codecs(&[CodecId::Deflate, CodecId::Gzip, CodecId::Zstd]);
    assert_eq!(
        scanner.scan_str(text).unwrap(),
        scanner.scan_bytes(text.as_bytes()).unwrap()
    );
}

// ── file-backed scans and the deletion contract ────────────────────────────

#[test]
fn test_scan_file_keeps_source_by_default() {
    let path = temp_path("keep_source");
    std::fs::write(&path, compressible_bytes(4 * 1024)).unwrap();

    let report = Scanner::new().scan_file(&path).unwrap();
    assert!(!report.is_empty());
    assert!(path.exists(), "default scan must not touch the source file");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_scan_file_deletes_source_when_opted_in() {
    let path = temp_path("delete_source");
    std::fs::write(&path, compressible_bytes(4 * 1024)).unwrap();

    let report = Scanner::new()
        .delete_source_after_scan(true)
        .scan_file(&path)
        .unwrap();
    assert!(!report.is_empty());
    assert!(
        !path.exists(),
        "opted-in deletion must remove the source once the scan returns"
    );
}

#[test]
fn test_scan_file_matches_scan_bytes() {
    let data = compressible_bytes(4 * 1024);
    let path = temp_path("matches_bytes");
    std::fs::write(&path, &data).unwrap();

    let scanner = Scanner::with_codecs(&[CodecId::Deflate, CodecId::Gzip, CodecId::Zstd]);
    let from_file = scanner.scan_file(&path).unwrap();
    let from_bytes = scanner.scan_bytes(&data).unwrap();
    assert_eq!(from_file, from_bytes);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_scan_unreadable_file_aborts_with_input_read_failure() {
    let path = temp_path("never_created");
    let err = Scanner::new()
        .delete_source_after_scan(true)
        .scan_file(&path)
        .unwrap_err();
    assert!(matches!(err, Error::InputReadFailure(_)));
}

// ── out-of-band text codec ─────────────────────────────────────────────────

#[test]
fn test_smaz_text_roundtrip() {
    let text = "This is some lovely data to compress";
    let compressed = smaz_codec::compress_text(text);
    assert!(
        compressed.len() < text.len(),
        "smaz should shrink short English text: {} vs {}",
        compressed.len(),
        text.len()
    );
    assert_eq!(smaz_codec::decompress_text(&compressed).unwrap(), text);
}
