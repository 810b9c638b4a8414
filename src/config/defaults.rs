//! Default values used by the Config struct.

/// Smallest accepted `max_report_chars`; leaves room for the heading,
/// tallies, legend and truncation notice.
pub const MIN_REPORT_CHARS: usize = 1_000;

pub fn default_stations_csv() -> String {
    "data/3!stations.csv".to_string()
}

pub fn default_types_csv() -> String {
    "data/4!types.csv".to_string()
}

pub fn default_lines_csv() -> String {
    "data/2!lines.csv".to_string()
}

pub fn default_sst_csv() -> String {
    "data/5!station_station_types.csv".to_string()
}

pub fn default_output_path() -> String {
    "sst_diff_report.md".to_string()
}

pub fn default_max_groups() -> usize {
    20
}

pub fn default_max_report_chars() -> usize {
    65_000
}
