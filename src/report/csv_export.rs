//! CSV exports: formatted metric list and raw projection table

use super::format::{currency, grouped};
use crate::calculator::CalculationResult;
use crate::edition::Edition;
use crate::error::Result;
use crate::inputs::CalculatorInputs;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One `Metric,Value` line of the metrics export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricRow {
    #[serde(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl MetricRow {
    fn new(metric: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProjectionRow {
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "Manual Cost")]
    manual_cost: f64,
    #[serde(rename = "Automated Cost")]
    automated_cost: f64,
    #[serde(rename = "Cumulative Savings")]
    cumulative_savings: f64,
}

/// File stem used for exports of an edition, e.g. `endpoint_roi_uem_edition`
pub fn default_file_stem(edition: Edition) -> String {
    format!("endpoint_roi_{}_edition", edition.name().to_lowercase())
}

/// Ordered metric rows: inputs, effort, benefits, ROI, then bonus features
pub fn metric_rows(inputs: &CalculatorInputs, result: &CalculationResult) -> Vec<MetricRow> {
    let mut rows = vec![
        MetricRow::new("Number of Devices", inputs.devices.to_string()),
        MetricRow::new("Number of Applications", inputs.applications.to_string()),
        MetricRow::new("Updates per Application", inputs.updates_per_app_per_year.to_string()),
        MetricRow::new("Hours per Update (Manual)", inputs.hours_per_update_manual.to_string()),
        MetricRow::new("Technician Hourly Rate", currency(inputs.technician_hourly_rate)),
        MetricRow::new("Selected Edition", inputs.edition.name()),
        MetricRow::new("Automation Efficiency", format!("{}%", inputs.automation_efficiency_percent)),
        MetricRow::new("Annual License Cost", currency(result.license_cost)),
        MetricRow::new("Implementation Cost", currency(inputs.implementation_cost)),
        MetricRow::new("Total Manual Hours", grouped(result.manual_hours, 2)),
        MetricRow::new("Total Automated Hours", grouped(result.automated_hours, 2)),
        MetricRow::new("Hours Saved", grouped(result.hours_saved(), 2)),
        MetricRow::new("Total Manual Cost", currency(result.manual_cost)),
        MetricRow::new("Total Automated Cost", currency(result.automated_cost)),
        MetricRow::new("Direct Labor Savings", currency(result.labor_savings)),
        MetricRow::new("Compliance Reporting Savings", currency(result.compliance_savings)),
        MetricRow::new("Bandwidth Cost Savings", currency(result.bandwidth_savings_adjusted)),
        MetricRow::new("Security Incident Reduction Value", currency(result.security_incident_value)),
        MetricRow::new("Downtime Cost Savings", currency(result.downtime_cost_saved)),
        MetricRow::new("Total Annual Savings", currency(result.adjusted_annual_savings)),
        MetricRow::new("First Year ROI", format!("{:.2}", result.first_year_roi)),
        MetricRow::new("Subsequent Years ROI", format!("{:.2}", result.subsequent_year_roi)),
        MetricRow::new("Payback Period (Months)", format!("{:.2}", result.payback)),
    ];

    rows.extend(
        result
            .bonus_feature_values
            .iter()
            .map(|bonus| MetricRow::new(format!("{} Value", bonus.feature), currency(bonus.value))),
    );
    rows
}

/// Write the metric list with a `Metric,Value` header
pub fn write_metrics_csv<W: Write>(writer: W, inputs: &CalculatorInputs, result: &CalculationResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in metric_rows(inputs, result) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_metrics_csv(path: impl AsRef<Path>, inputs: &CalculatorInputs, result: &CalculationResult) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_metrics_csv(file, inputs, result)
}

/// Write the five-year projection as plain numbers for charting
pub fn write_projection_csv<W: Write>(writer: W, result: &CalculationResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for year in &result.five_year_projection {
        csv_writer.serialize(ProjectionRow {
            year: year.year,
            manual_cost: year.manual_cost,
            automated_cost: year.automated_cost,
            cumulative_savings: year.cumulative_savings,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_projection_csv(path: impl AsRef<Path>, result: &CalculationResult) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_projection_csv(file, result)
}
