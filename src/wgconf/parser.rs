//! Line-oriented parser for WireGuard `[Section]` / `key = value` files.
//!
//! This is deliberately not an INI parser: WireGuard allows `[Peer]` to repeat
//! and has no notion of defaults or interpolation. Parsing never fails; lines
//! that do not fit the format are dropped.

use std::path::Path;

use super::document::{ConfigDocument, Entries};
use crate::error::Result;
use crate::utils::read_text_file;

/// Parse config text into a [`ConfigDocument`].
///
/// Rules:
/// - every line is trimmed; blank lines and `#` comments are skipped
/// - `[Name]` opens a section called `Name`
/// - inside a section, `key = value` is split on the first `=`, both sides trimmed
/// - lines without `=`, and anything before the first header, are ignored
/// - a section that ends up with no entries is not recorded
/// - an empty header `[]` closes the current section without opening one
pub fn parse_document(text: &str) -> ConfigDocument {
    let mut doc = ConfigDocument::default();
    let mut current: Option<(String, Entries)> = None;

    for raw in text.split('\n') {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = section_header(line) {
            flush(&mut doc, current.take());
            // `[]` closes the open section; its lines are dropped until the next header
            current = (!name.is_empty()).then(|| (name.to_string(), Entries::new()));
            continue;
        }

        match (&mut current, line.split_once('=')) {
            (Some((_, entries)), Some((key, value))) => entries.insert(key.trim(), value.trim()),
            (Some((name, _)), None) => {
                tracing::debug!("dropping line without '=' in [{}]: {}", name, line);
            }
            (None, _) => tracing::debug!("dropping line outside any section: {}", line),
        }
    }

    flush(&mut doc, current);
    doc
}

/// Read and parse one config file.
pub fn parse_file(path: &Path) -> Result<ConfigDocument> {
    let text = read_text_file(path)?;
    let doc = parse_document(&text);
    tracing::debug!("parsed {} section(s) from {}", doc.sections().len(), path.display());
    Ok(doc)
}

fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

fn flush(doc: &mut ConfigDocument, section: Option<(String, Entries)>) {
    if let Some((name, entries)) = section {
        if !entries.is_empty() {
            doc.set_section(name, entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wgconf::document::{INTERFACE, PEER};

    #[test]
    fn test_parses_interface_and_peer() {
        let doc = parse_document(
            "[Interface]\nPrivateKey = ABC\nAddress = 10.0.0.2/32\n\n[Peer]\nPublicKey = XYZ\nEndpoint = vpn.example.net:51820\n",
        );

        let iface: Vec<_> = doc.interface().expect("interface").iter().collect();
        assert_eq!(iface, vec![("PrivateKey", "ABC"), ("Address", "10.0.0.2/32")]);
        assert_eq!(doc.peer().and_then(|p| p.get("Endpoint")), Some("vpn.example.net:51820"));
    }

    #[test]
    fn test_splits_on_first_equals_only() {
        let doc = parse_document("[Peer]\nPublicKey = abc+def/ghi=\nPresharedKey=  k==  \n");
        let peer = doc.peer().expect("peer");
        assert_eq!(peer.get("PublicKey"), Some("abc+def/ghi="));
        assert_eq!(peer.get("PresharedKey"), Some("k=="));
    }

    #[test]
    fn test_skips_comments_blanks_and_malformed_lines() {
        let doc = parse_document(
            "# header comment\n[Interface]\n  # indented comment\nnot a pair\n\nDNS = 1.1.1.1\n",
        );
        let iface: Vec<_> = doc.interface().expect("interface").iter().collect();
        assert_eq!(iface, vec![("DNS", "1.1.1.1")]);
    }

    #[test]
    fn test_content_before_first_header_is_discarded() {
        let doc = parse_document("Stray = value\n[Peer]\nPublicKey = k\n");
        assert_eq!(doc.sections().len(), 1);
        assert_eq!(doc.peer().and_then(|p| p.get("Stray")), None);
    }

    #[test]
    fn test_section_without_entries_is_not_recorded() {
        let doc = parse_document("[Interface]\nPrivateKey = a\n[Peer]\n# only a comment\n\n");
        assert!(doc.interface().is_some());
        assert!(doc.peer().is_none());
    }

    #[test]
    fn test_last_duplicate_peer_wins() {
        let doc = parse_document("[Peer]\nPublicKey = one\n[Peer]\nPublicKey = two\n");
        assert_eq!(doc.sections().len(), 1);
        assert_eq!(doc.peer().and_then(|p| p.get("PublicKey")), Some("two"));
    }

    #[test]
    fn test_empty_header_drops_following_lines() {
        let doc = parse_document("[Peer]\nPublicKey = a\n[]\nEndpoint = x:1\n[Interface]\nAddress = b\n");
        let names: Vec<_> = doc.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![PEER, INTERFACE]);
        assert_eq!(doc.peer().and_then(|p| p.get("Endpoint")), None);
        assert_eq!(doc.section(""), None);
    }

    #[test]
    fn test_handles_crlf_line_endings() {
        let doc = parse_document("[Interface]\r\nAddress = fd00::2/128\r\n");
        assert_eq!(doc.section(INTERFACE).and_then(|s| s.get("Address")), Some("fd00::2/128"));
    }

    #[test]
    fn test_custom_section_names_are_kept() {
        let doc = parse_document("[Custom]\nk = v\n[Peer]\nPublicKey = p\n");
        let names: Vec<_> = doc.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Custom", PEER]);
    }

    #[test]
    fn test_empty_input_yields_empty_document() {
        assert!(parse_document("").is_empty());
        assert!(parse_document("\n\n# nothing\n").is_empty());
    }
}
