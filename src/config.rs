use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "ecattrs.toml";

/// Top-level ecattrs configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EcattrsConfig {
    /// Text of the `institution` global attribute.
    #[serde(default)]
    pub institution: Option<String>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// History handling.
    #[serde(default)]
    pub history: HistoryToml,

    /// Variable naming.
    #[serde(default)]
    pub variables: VariablesToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryToml {
    /// Append to the existing `history` instead of replacing it.
    #[serde(default = "default_true")]
    pub append: bool,
}

impl Default for HistoryToml {
    fn default() -> Self {
        Self { append: true }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self { pretty: true }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariablesToml {
    /// Name of the threshold coordinate variable.
    #[serde(default = "default_threshold_var")]
    pub threshold: String,
}

impl Default for VariablesToml {
    fn default() -> Self {
        Self {
            threshold: default_threshold_var(),
        }
    }
}

fn default_threshold_var() -> String {
    "threshold".to_string()
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG`] is read if
/// present and built-in defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<EcattrsConfig> {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG);
            if !fallback.exists() {
                debug!("no config file, using defaults");
                return Ok(EcattrsConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    parse(&toml_str).with_context(|| format!("failed to parse TOML config: {}", path.display()))
}

fn parse(toml_str: &str) -> Result<EcattrsConfig> {
    Ok(toml::from_str(toml_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse("").unwrap();
        assert!(config.institution.is_none());
        assert!(config.output.pretty);
        assert!(config.history.append);
        assert_eq!(config.variables.threshold, "threshold");
    }

    #[test]
    fn history_append_can_be_disabled() {
        let config = parse("[history]\nappend = false\n").unwrap();
        assert!(!config.history.append);
    }

    #[test]
    fn full_config() {
        let config = parse(
            r#"
            institution = "Climate impact portal (http://climate4impact.eu)"

            [output]
            pretty = false

            [history]
            append = false

            [variables]
            threshold = "thresh"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.institution.as_deref(),
            Some("Climate impact portal (http://climate4impact.eu)")
        );
        assert!(!config.output.pretty);
        assert!(!config.history.append);
        assert_eq!(config.variables.threshold, "thresh");
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(parse("institute = \"typo\"").is_err());
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "institution = \"KNMI\"\n").unwrap();
        let config = load(Some(path.as_path())).unwrap();
        assert_eq!(config.institution.as_deref(), Some("KNMI"));
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        let err = load(Some(absent.as_path())).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
