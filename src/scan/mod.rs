//! Input file discovery

use crate::error::{Result, WgError};
use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFAULT_PATTERN: &str = "*.conf";

/// Lists the config files directly inside one directory.
///
/// Only regular files whose name matches the pattern are returned, sorted by
/// file name so that "first file" has a stable meaning across platforms.
pub struct ConfigScanner {
    dir: PathBuf,
    pattern: String,
    exclude: Option<PathBuf>,
}

impl ConfigScanner {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), pattern: DEFAULT_PATTERN.to_string(), exclude: None }
    }

    /// Set the file-name glob (default `*.conf`)
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Never return this path, even if it matches.
    pub fn exclude(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude = Some(path.into());
        self
    }

    fn matcher(&self) -> Result<GlobMatcher> {
        Glob::new(&self.pattern)
            .map(|g| g.compile_matcher())
            .map_err(|source| WgError::InvalidPattern { pattern: self.pattern.clone(), source })
    }

    /// Discover matching files. A missing directory yields an empty list.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let matcher = self.matcher()?;
        let include_hidden = self.pattern.starts_with('.');

        if !self.dir.is_dir() {
            tracing::debug!("input directory {} does not exist", self.dir.display());
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| WgError::Discovery {
                path: self.dir.clone(),
                message: e.to_string(),
            })?;

            // Symlinked configs are followed; directories are not descended into.
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            // Shell-style globbing: `*` never matches a leading dot
            let name = entry.file_name();
            if !include_hidden && name.to_string_lossy().starts_with('.') {
                continue;
            }
            if !matcher.is_match(Path::new(name)) {
                continue;
            }
            if let Some(excluded) = &self.exclude {
                if crate::utils::same_location(path, excluded) {
                    tracing::debug!("skipping output file {}", path.display());
                    continue;
                }
            }
            files.push(path.to_path_buf());
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        tracing::debug!("found {} config file(s) in {}", files.len(), self.dir.display());
        Ok(files)
    }
}
