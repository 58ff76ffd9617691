//! Compute the ROI of one edition for one organization
//!
//! Inputs come from edition defaults, then an optional JSON file, then flags.
//! Prints a console summary and optionally writes CSV, report and JSON files.

use anyhow::{Context, Result};
use clap::Parser;
use endpoint_roi::report::{self, currency, whole_hours};
use endpoint_roi::{try_compute_roi, CalculationResult, CalculatorInputs, Edition, InputOverrides, ReportConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "roi_calc", about = "Endpoint-management ROI calculator")]
struct Args {
    /// JSON file with (possibly partial) calculator inputs
    #[arg(long)]
    inputs: Option<PathBuf>,

    /// Product edition (Free, Professional, Enterprise, UEM, Security)
    #[arg(long)]
    edition: Option<Edition>,

    #[arg(long)]
    devices: Option<u32>,

    #[arg(long)]
    applications: Option<u32>,

    #[arg(long)]
    updates_per_app: Option<u32>,

    #[arg(long)]
    hours_per_update: Option<f64>,

    #[arg(long)]
    hourly_rate: Option<f64>,

    /// Reduction in manual effort from automation, 50-99 (%)
    #[arg(long)]
    automation_efficiency: Option<f64>,

    /// Custom annual license cost replacing list pricing
    #[arg(long)]
    license_cost: Option<f64>,

    #[arg(long)]
    implementation_cost: Option<f64>,

    /// Security incident reduction (%)
    #[arg(long)]
    security_reduction: Option<f64>,

    /// Downtime reduction (%)
    #[arg(long)]
    downtime_reduction: Option<f64>,

    #[arg(long)]
    compliance_hours: Option<f64>,

    #[arg(long)]
    bandwidth_savings: Option<f64>,

    /// Write the metrics CSV (default endpoint_roi_<edition>_edition.csv)
    #[arg(long, value_name = "PATH")]
    csv: Option<Option<PathBuf>>,

    /// Write the five-year projection CSV (default endpoint_roi_<edition>_edition_projection.csv)
    #[arg(long, value_name = "PATH")]
    projection_csv: Option<Option<PathBuf>>,

    /// Write the text report (default endpoint_roi_<edition>_edition.txt)
    #[arg(long, value_name = "PATH")]
    report: Option<Option<PathBuf>>,

    /// Organization named in the report footer
    #[arg(long)]
    organization: Option<String>,

    /// Save the resolved inputs as JSON for later runs
    #[arg(long)]
    save_inputs: Option<PathBuf>,

    /// Print the full result as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

impl Args {
    fn overrides(&self) -> InputOverrides {
        InputOverrides {
            devices: self.devices,
            applications: self.applications,
            updates_per_app_per_year: self.updates_per_app,
            hours_per_update_manual: self.hours_per_update,
            technician_hourly_rate: self.hourly_rate,
            automation_efficiency_percent: self.automation_efficiency,
            edition: self.edition,
            license_cost_override: self.license_cost,
            implementation_cost: self.implementation_cost,
            security_incident_reduction_percent: self.security_reduction,
            downtime_reduction_percent: self.downtime_reduction,
            compliance_hours_saved_annual: self.compliance_hours,
            bandwidth_savings_annual: self.bandwidth_savings,
            theme: None,
        }
    }
}

/// Explicit path, or the edition's default file name with `suffix`
fn export_path(requested: &Option<PathBuf>, edition: Edition, suffix: &str) -> PathBuf {
    requested
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}{suffix}", report::default_file_stem(edition))))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let file_overrides = match &args.inputs {
        Some(path) => {
            log::info!("Loading inputs from {}", path.display());
            InputOverrides::load_json(path)
                .with_context(|| format!("Failed to load inputs file {}", path.display()))?
        }
        None => InputOverrides::default(),
    };
    let inputs = file_overrides.merge(args.overrides()).resolve();

    let result = try_compute_roi(&inputs).context("Invalid calculator inputs")?;
    for warning in &result.warnings {
        eprintln!("Warning: {warning}");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&inputs, &result);
    }

    if let Some(path) = &args.save_inputs {
        inputs
            .save_json(path)
            .with_context(|| format!("Failed to save inputs to {}", path.display()))?;
        log::info!("Inputs saved to {}", path.display());
    }

    // Exports run after the result is complete; a failure here leaves it intact
    if let Some(requested) = &args.csv {
        let path = &export_path(requested, inputs.edition, ".csv");
        report::save_metrics_csv(path, &inputs, &result)
            .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
        println!("Metrics written to {}", path.display());
    }
    if let Some(requested) = &args.projection_csv {
        let path = &export_path(requested, inputs.edition, "_projection.csv");
        report::save_projection_csv(path, &result)
            .with_context(|| format!("Failed to write projection to {}", path.display()))?;
        println!("Projection written to {}", path.display());
    }
    if let Some(requested) = &args.report {
        let path = &export_path(requested, inputs.edition, ".txt");
        let config = ReportConfig {
            organization: args.organization.clone(),
            ..ReportConfig::default()
        };
        let today = chrono::Local::now().date_naive();
        report::save_report(path, &config, &inputs, &result, today)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn print_summary(inputs: &CalculatorInputs, result: &CalculationResult) {
    let catalog = inputs.edition.catalog();

    println!("{} Edition: {}", inputs.edition, catalog.description);
    println!("  Best for: {}", catalog.best_for);
    println!();
    println!("Annual license cost:      {}", currency(result.license_cost));
    println!("Implementation cost:      {}", currency(inputs.implementation_cost));
    println!();
    println!("Manual effort:            {} ({})", whole_hours(result.manual_hours), currency(result.manual_cost));
    println!("Automated effort:         {} ({})", whole_hours(result.automated_hours), currency(result.automated_cost));
    println!("Direct labor savings:     {}", currency(result.labor_savings));
    println!();
    println!("Annual savings:           {}", currency(result.adjusted_annual_savings));
    println!("First year ROI:           {:.1}", result.first_year_roi);
    println!("Subsequent years ROI:     {:.1}", result.subsequent_year_roi);
    match result.payback.months() {
        Some(months) => println!("Payback period:           {months:.1} months"),
        None => println!("Payback period:           {}", result.payback),
    }

    if !result.bonus_feature_values.is_empty() {
        println!();
        println!("{} Edition benefits:", inputs.edition);
        for bonus in &result.bonus_feature_values {
            println!("  - {}: {}", bonus.feature, currency(bonus.value));
        }
    }

    println!();
    println!("{:<6} {:>18} {:>18} {:>20}", "Year", "Manual", "Automated", "Cumulative");
    for year in &result.five_year_projection {
        println!(
            "{:<6} {:>18} {:>18} {:>20}",
            year.year,
            currency(year.manual_cost),
            currency(year.automated_cost),
            currency(year.cumulative_savings)
        );
    }

    println!();
    println!("{:<38} {:<32} {:<40} {}", "Metric", "Manual Process", "Endpoint Central", "Impact");
    println!(
        "{:<38} {:<32} {:<40} {}",
        "Total Annual Hours Required",
        whole_hours(result.manual_hours),
        whole_hours(result.automated_hours),
        format!("{} saved", whole_hours(result.hours_saved()))
    );
    println!(
        "{:<38} {:<32} {:<40} {}",
        "Annual Labor Cost",
        currency(result.manual_cost),
        currency(result.automated_cost),
        format!("{} saved", currency(result.labor_savings))
    );
    for row in catalog.comparisons {
        println!("{:<38} {:<32} {:<40} {}", row.metric, row.manual, row.edition, row.impact);
    }

    println!();
    println!("Strategic recommendations:");
    for (i, rec) in catalog.recommendations.iter().enumerate() {
        println!("  {}. {}: {}", i + 1, rec.heading, rec.detail);
    }
}
