//! Layering CLI flags over the settings file

use std::path::PathBuf;
use std::time::Duration;

use super::settings::Settings;
use crate::wgconf::MergeOptions;

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub input_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub pattern: Option<String>,
    pub hostname: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub fn merge_options(settings: &Settings, cli: &CliOverrides) -> MergeOptions {
    MergeOptions {
        input_dir: cli.input_dir.clone().unwrap_or_else(|| settings.merge.input_dir.clone()),
        output: cli.output.clone().unwrap_or_else(|| settings.merge.output.clone()),
        pattern: cli.pattern.clone().unwrap_or_else(|| settings.merge.pattern.clone()),
    }
}

/// Hostname and timeout for the AAAA lookup.
pub fn resolve_target(settings: &Settings, cli: &CliOverrides) -> (String, Duration) {
    let hostname = cli.hostname.clone().unwrap_or_else(|| settings.resolve.hostname.clone());
    let secs = cli.timeout_secs.unwrap_or(settings.resolve.timeout_secs);
    (hostname, Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let opts = merge_options(&Settings::default(), &CliOverrides::default());
        assert_eq!(opts, MergeOptions::default());

        let (host, timeout) = resolve_target(&Settings::default(), &CliOverrides::default());
        assert_eq!(host, "free-unlimited.hideservers.net");
        assert_eq!(timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_cli_beats_file_beats_default() {
        let mut settings = Settings::default();
        settings.merge.input_dir = PathBuf::from("from-file");
        settings.merge.output = PathBuf::from("file.conf");
        settings.resolve.timeout_secs = 9;

        let cli = CliOverrides {
            output: Some(PathBuf::from("cli.conf")),
            hostname: Some("vpn.example.net".into()),
            ..CliOverrides::default()
        };

        let opts = merge_options(&settings, &cli);
        assert_eq!(opts.input_dir, PathBuf::from("from-file"));
        assert_eq!(opts.output, PathBuf::from("cli.conf"));
        assert_eq!(opts.pattern, "*.conf");

        let (host, timeout) = resolve_target(&settings, &cli);
        assert_eq!(host, "vpn.example.net");
        assert_eq!(timeout, Duration::from_secs(9));
    }
}
