//! Report exports built from a completed [`CalculationResult`](crate::calculator::CalculationResult)
//!
//! Exporters only read the result; a failed export never alters it.

mod format;
mod csv_export;
mod summary;

pub use format::{currency, grouped, whole_hours};
pub use csv_export::{
    default_file_stem, metric_rows, save_metrics_csv, save_projection_csv, write_metrics_csv,
    write_projection_csv, MetricRow,
};
pub use summary::{save_report, write_report};

use serde::{Deserialize, Serialize};

/// Presentation settings handed to the report writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Named in the report footer; omitted when unset
    #[serde(default)]
    pub organization: Option<String>,
}

fn default_title() -> String {
    "Endpoint Management ROI Report".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            organization: None,
        }
    }
}
