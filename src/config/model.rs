//! Config struct definition and default implementation.

use super::defaults::*;
use serde::{Deserialize, Serialize};

/// Configuration for a report run.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Input tables (repository-relative)
    // =========================================================================
    /// Stations table (`station_cd`, `station_name`, `station_name_r`, `line_cd`).
    #[serde(default = "default_stations_csv")]
    pub stations_csv: String,

    /// Train types table (`type_cd`, `type_name`, `type_name_r`).
    #[serde(default = "default_types_csv")]
    pub types_csv: String,

    /// Lines table (`line_cd`, `line_name`).
    #[serde(default = "default_lines_csv")]
    pub lines_csv: String,

    /// Station/station-type table (`type_cd`, `line_group_cd`, `station_cd`, `pass`).
    #[serde(default = "default_sst_csv")]
    pub sst_csv: String,

    // =========================================================================
    // Report settings
    // =========================================================================
    /// Where the Markdown report is written.
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Maximum number of groups rendered.
    #[serde(default = "default_max_groups")]
    pub max_groups: usize,

    /// Maximum report length in characters.
    #[serde(default = "default_max_report_chars")]
    pub max_report_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stations_csv: default_stations_csv(),
            types_csv: default_types_csv(),
            lines_csv: default_lines_csv(),
            sst_csv: default_sst_csv(),
            output_path: default_output_path(),
            max_groups: default_max_groups(),
            max_report_chars: default_max_report_chars(),
        }
    }
}
