//! Settings loading and merging
//!
//! Handles the optional `wg-kit.toml` / `wg-kit.yml` file and CLI flags with
//! precedence CLI > File > Defaults.

pub mod loader;
pub mod merge;
pub mod settings;

pub use loader::load_settings;
pub use merge::{merge_options, resolve_target, CliOverrides};
pub use settings::{MergeSettings, ResolveSettings, Settings};
