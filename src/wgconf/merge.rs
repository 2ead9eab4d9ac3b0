//! Directory-level merge: discover, parse, combine, write.

use std::path::{Path, PathBuf};

use super::parser::parse_file;
use super::writer::MergedResult;
use crate::error::Result;
use crate::scan::{ConfigScanner, DEFAULT_PATTERN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub pattern: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("configs"),
            output: PathBuf::from("merged_wg.conf"),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub files: usize,
    pub interfaces: usize,
    pub peers: usize,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Nothing matched; the output path was not touched.
    NoInputs,
    Merged(MergeSummary),
}

/// Merge every matching file in `opts.input_dir` into `opts.output`.
///
/// Files are processed one at a time in file-name order.
pub fn merge_directory(opts: &MergeOptions) -> Result<MergeOutcome> {
    let files = ConfigScanner::new(&opts.input_dir)
        .pattern(opts.pattern.clone())
        .exclude(&opts.output)
        .scan()?;

    if files.is_empty() {
        return Ok(MergeOutcome::NoInputs);
    }

    merge_files(&files, &opts.output).map(MergeOutcome::Merged)
}

/// Merge an already-discovered, ordered list of files into `output`.
///
/// The first file that cannot be read aborts the merge before anything is
/// written.
pub fn merge_files(files: &[PathBuf], output: &Path) -> Result<MergeSummary> {
    let mut merged = MergedResult::new();
    for path in files {
        let doc = parse_file(path)?;
        if doc.peer().is_none() {
            tracing::debug!("{} has no [Peer] section", path.display());
        }
        merged.push(&doc);
    }

    merged.write_to(output)?;
    tracing::debug!("wrote {}", output.display());

    Ok(MergeSummary {
        files: files.len(),
        interfaces: usize::from(merged.interface().is_some()),
        peers: merged.peers().len(),
        output: output.to_path_buf(),
    })
}
