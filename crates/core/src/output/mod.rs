mod json;
mod yaml;

pub use json::to_json;
pub use yaml::to_yaml;

use crate::models::ScanReport;
use chrono::{DateTime, Utc};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Summary,
}

impl OutputFormat {
    /// Artifact file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Summary => "txt",
        }
    }
}

/// Format a scan report according to the specified format.
///
/// Json and Yaml serialize only the structure tree; the summary is a
/// human-readable digest of the stats and metadata.
pub fn format_output(report: &ScanReport, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => to_json(&report.structure),
        OutputFormat::Yaml => to_yaml(&report.structure),
        OutputFormat::Summary => Ok(format_summary(report)),
    }
}

/// Generate a human-readable summary
pub fn format_summary(report: &ScanReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Folder Structure Summary\n\
         ========================\n\
         Root: {}\n\n",
        report.root.display()
    ));

    output.push_str(&format!(
        "Files Visited: {}\n\
         - At root: {}\n\
         Folders: {} deep, {} flat\n\n",
        report.stats.files_seen,
        report.stats.root_files,
        report.stats.deep_folders,
        report.stats.flat_folders,
    ));

    output.push_str(&format!(
        "Scan Duration: {}ms ({:.2} files/sec)\n\
         Timestamp: {}\n\
         Tool Version: {}\n",
        report.metadata.scan_duration_ms,
        report.metadata.files_per_second,
        report.metadata.timestamp,
        report.metadata.tool_version
    ));

    output
}

/// Compact UTC timestamp used in artifact file names (`YYYYMMDD_HHMMSS`)
pub fn timestamp_slug(moment: DateTime<Utc>) -> String {
    moment.format("%Y%m%d_%H%M%S").to_string()
}

/// Default artifact file name: `<folder>_<timestamp>.<ext>`
pub fn artifact_file_name(folder_name: &str, moment: DateTime<Utc>, format: OutputFormat) -> String {
    format!(
        "{}_{}.{}",
        folder_name,
        timestamp_slug(moment),
        format.extension()
    )
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}
