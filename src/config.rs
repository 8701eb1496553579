use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// A daily series stored as TOML.
///
/// ```toml
/// first_day = "2013-06-02"
/// values = [2.0, 3.0, 4.0, 5.0, 6.0]
///
/// [resize]
/// first_day = "2013-06-01"
/// last_day = "2013-06-07"
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesConfig {
    /// ISO-8601 date of the first value.
    pub first_day: String,

    /// One value per consecutive day.
    pub values: Vec<f64>,

    /// Default resize window.
    #[serde(default)]
    pub resize: ResizeToml,

    /// Output formatting.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ResizeToml {
    #[serde(default)]
    pub first_day: Option<String>,
    #[serde(default)]
    pub last_day: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    3
}

/// Reads and parses a series file.
pub fn load(path: &Path) -> Result<SeriesConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read series file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse series TOML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_series_uses_defaults() {
        let cfg: SeriesConfig =
            toml::from_str("first_day = \"2013-06-02\"\nvalues = [1.0, 2.0]\n").unwrap();
        assert_eq!(cfg.first_day, "2013-06-02");
        assert_eq!(cfg.values, vec![1.0, 2.0]);
        assert!(cfg.resize.first_day.is_none());
        assert!(cfg.resize.last_day.is_none());
        assert_eq!(cfg.output.precision, 3);
    }

    #[test]
    fn resize_and_output_tables() {
        let cfg: SeriesConfig = toml::from_str(
            r#"
            first_day = "2013-06-02"
            values = [2.0, 3.0]

            [resize]
            last_day = "2013-06-07"

            [output]
            precision = 1
            "#,
        )
        .unwrap();
        assert_eq!(cfg.resize.first_day, None);
        assert_eq!(cfg.resize.last_day.as_deref(), Some("2013-06-07"));
        assert_eq!(cfg.output.precision, 1);
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<SeriesConfig, _> =
            toml::from_str("first_day = \"2013-06-02\"\nvalues = []\nstart = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("series.toml");
        std::fs::write(&path, "first_day = \"2013-06-02\"\nvalues = [4.0]\n").unwrap();
        let cfg = load(&path).unwrap();
        assert_eq!(cfg.values, vec![4.0]);
    }

    #[test]
    fn load_missing_file_has_context() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read series file"));
    }
}
