//! WireGuard config parsing and merging
//!
//! A WireGuard file is a sequence of `[Section]` headers each followed by
//! `key = value` lines. Merging keeps the `[Interface]` of the first file and
//! collects one `[Peer]` from every file.

pub mod document;
pub mod merge;
pub mod parser;
pub mod writer;

pub use document::{ConfigDocument, Entries, Section};
pub use merge::{merge_directory, merge_files, MergeOptions, MergeOutcome, MergeSummary};
pub use parser::{parse_document, parse_file};
pub use writer::MergedResult;
