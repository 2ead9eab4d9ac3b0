//! Settings file schema

use serde::Deserialize;
use std::path::PathBuf;

use crate::dns::{DEFAULT_HOSTNAME, DEFAULT_TIMEOUT};
use crate::wgconf::MergeOptions;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub merge: MergeSettings,
    pub resolve: ResolveSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeSettings {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub pattern: String,
}

impl Default for MergeSettings {
    fn default() -> Self {
        let MergeOptions { input_dir, output, pattern } = MergeOptions::default();
        Self { input_dir, output, pattern }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolveSettings {
    pub hostname: String,
    pub timeout_secs: u64,
}

impl Default for ResolveSettings {
    fn default() -> Self {
        Self { hostname: DEFAULT_HOSTNAME.to_string(), timeout_secs: DEFAULT_TIMEOUT.as_secs() }
    }
}
