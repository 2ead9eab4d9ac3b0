//! Reading config files into text.
//!
//! WireGuard configs are plain UTF-8 in practice, but files exported from
//! Windows tools sometimes carry a BOM (UTF-8 or UTF-16). The BOM decides the
//! encoding when present; otherwise the bytes must be valid UTF-8. Key
//! material is never passed through with replacement characters.

use crate::error::{Result, WgError};
use encoding_rs::{Encoding, UTF_8};
use std::path::Path;

/// Read a whole file and decode it to a `String`.
///
/// The file handle is opened, drained and closed before this returns. Any I/O
/// failure, and any byte sequence that does not decode, becomes
/// [`WgError::FileAccess`] carrying the offending path.
pub fn read_text_file(path: &Path) -> Result<String> {
    std::fs::read(path)
        .and_then(|bytes| decode_text(&bytes))
        .map_err(|source| WgError::FileAccess { path: path.to_path_buf(), source })
}

fn decode_text(bytes: &[u8]) -> std::io::Result<String> {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    let body = &bytes[bom_len..];

    // UTF-8 fast path: no copy through the decoder
    if encoding == UTF_8 {
        if let Ok(text) = std::str::from_utf8(body) {
            return Ok(text.to_string());
        }
    }

    let (decoded, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("stream did not contain valid {}", encoding.name()),
        ));
    }
    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_plain_utf8() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("a.conf");
        fs::write(&path, "[Peer]\nPublicKey = xyz\n").expect("write");

        assert_eq!(read_text_file(&path).expect("read"), "[Peer]\nPublicKey = xyz\n");
    }

    #[test]
    fn test_strips_utf8_bom() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bom.conf");
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"[Interface]\n");
        fs::write(&path, bytes).expect("write");

        assert_eq!(read_text_file(&path).expect("read"), "[Interface]\n");
    }

    #[test]
    fn test_decodes_utf16_le_with_bom() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("wide.conf");
        let mut bytes = vec![0xff, 0xfe];
        for unit in "[Peer]".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        fs::write(&path, bytes).expect("write");

        assert_eq!(read_text_file(&path).expect("read"), "[Peer]");
    }

    #[test]
    fn test_invalid_utf8_is_file_access_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.conf");
        fs::write(&path, b"[Peer]\nPublicKey = A\xffB\n").expect("write");

        match read_text_file(&path) {
            Err(WgError::FileAccess { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("expected FileAccess error, got {other:?}"),
        }
    }

    #[test]
    fn test_unpaired_utf16_surrogate_is_file_access_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("wide.conf");
        // BOM, 'A', then a lone high surrogate
        fs::write(&path, [0xff, 0xfe, b'A', 0x00, 0x00, 0xd8]).expect("write");

        assert!(matches!(read_text_file(&path), Err(WgError::FileAccess { .. })));
    }

    #[test]
    fn test_missing_file_is_file_access_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("nope.conf");

        match read_text_file(&path) {
            Err(WgError::FileAccess { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected FileAccess error, got {other:?}"),
        }
    }
}
