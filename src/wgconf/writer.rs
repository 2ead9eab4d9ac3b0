//! Combining parsed documents and serializing the result.

use std::fmt::Write as _;
use std::path::Path;

use super::document::{ConfigDocument, Entries, INTERFACE, PEER};
use crate::error::{Result, WgError};

/// One Interface block (from the first document only) plus one Peer block
/// per document that had a Peer section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedResult {
    interface: Option<Entries>,
    peers: Vec<Entries>,
    documents: usize,
}

impl MergedResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the next document (in discovery order) into the result.
    pub fn push(&mut self, doc: &ConfigDocument) {
        if self.documents == 0 {
            self.interface = doc.interface().cloned();
        } else if doc.interface().is_some() {
            tracing::debug!("ignoring [Interface] of document #{}", self.documents + 1);
        }

        if let Some(peer) = doc.peer() {
            self.peers.push(peer.clone());
        }
        self.documents += 1;
    }

    pub fn interface(&self) -> Option<&Entries> {
        self.interface.as_ref()
    }

    pub fn peers(&self) -> &[Entries] {
        &self.peers
    }

    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Render as WireGuard config text. Each block ends with a blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(iface) = &self.interface {
            write_block(&mut out, INTERFACE, iface);
        }
        for peer in &self.peers {
            write_block(&mut out, PEER, peer);
        }
        out
    }

    /// Write the rendered text to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render())
            .map_err(|source| WgError::WriteOutput { path: path.to_path_buf(), source })
    }
}

impl<'a> FromIterator<&'a ConfigDocument> for MergedResult {
    fn from_iter<I: IntoIterator<Item = &'a ConfigDocument>>(iter: I) -> Self {
        let mut merged = MergedResult::new();
        for doc in iter {
            merged.push(doc);
        }
        merged
    }
}

fn write_block(out: &mut String, header: &str, entries: &Entries) {
    let _ = writeln!(out, "[{header}]");
    for (key, value) in entries.iter() {
        let _ = writeln!(out, "{key} = {value}");
    }
    out.push('\n');
}
