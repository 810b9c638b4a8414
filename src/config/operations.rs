//! Config loading and validation.

use super::defaults::MIN_REPORT_CHARS;
use super::model::Config;
use crate::error::{ReportError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ReportError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ReportError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                ReportError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - table paths and `output_path` must be non-empty
    /// - `max_groups` must be positive
    /// - `max_report_chars` must be at least `MIN_REPORT_CHARS`
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("stations_csv", &self.stations_csv),
            ("types_csv", &self.types_csv),
            ("lines_csv", &self.lines_csv),
            ("sst_csv", &self.sst_csv),
            ("output_path", &self.output_path),
        ] {
            if value.trim().is_empty() {
                return Err(ReportError::UserError(format!(
                    "config validation failed: {} must be non-empty",
                    name
                )));
            }
        }

        if self.max_groups == 0 {
            return Err(ReportError::UserError(
                "config validation failed: max_groups must be greater than 0".to_string(),
            ));
        }

        if self.max_report_chars < MIN_REPORT_CHARS {
            return Err(ReportError::UserError(format!(
                "config validation failed: max_report_chars must be at least {}",
                MIN_REPORT_CHARS
            )));
        }

        Ok(())
    }
}
