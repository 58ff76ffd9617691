//! Sectioned plain-text ROI report

use super::format::{currency, whole_hours};
use super::ReportConfig;
use crate::calculator::CalculationResult;
use crate::error::Result;
use crate::inputs::CalculatorInputs;
use chrono::{Datelike, NaiveDate};
use std::io::Write;
use std::path::Path;

const RULE_WIDTH: usize = 72;

/// Write the full report: inputs, key results, comparisons, benefits,
/// edition features, projection and conclusion
pub fn write_report<W: Write>(
    mut w: W,
    config: &ReportConfig,
    inputs: &CalculatorInputs,
    result: &CalculationResult,
    generated_on: NaiveDate,
) -> Result<()> {
    let edition = result.edition;

    writeln!(w, "{}", config.title)?;
    writeln!(w, "Report for {edition} Edition")?;
    writeln!(w, "Generated {}", generated_on.format("%B %-d, %Y"))?;
    writeln!(w, "{}", "=".repeat(RULE_WIDTH))?;

    for warning in &result.warnings {
        writeln!(w)?;
        writeln!(w, "WARNING: {warning}")?;
    }

    section(&mut w, "Input Parameters")?;
    table(
        &mut w,
        &[
            ("Number of Devices", inputs.devices.to_string()),
            ("Number of Applications", inputs.applications.to_string()),
            ("Updates per Application", inputs.updates_per_app_per_year.to_string()),
            ("Hours per Update (Manual)", inputs.hours_per_update_manual.to_string()),
            ("Technician Hourly Rate", currency(inputs.technician_hourly_rate)),
            ("Automation Efficiency", format!("{}%", inputs.automation_efficiency_percent)),
            ("Annual License Cost", currency(result.license_cost)),
            ("Implementation Cost", currency(inputs.implementation_cost)),
        ],
    )?;

    let payback = match result.payback.months() {
        Some(months) => format!("{months:.1} months"),
        None => result.payback.to_string(),
    };
    section(&mut w, "Key Results")?;
    table(
        &mut w,
        &[
            ("Annual Savings", currency(result.adjusted_annual_savings)),
            ("First Year ROI", format!("{:.1}", result.first_year_roi)),
            ("Subsequent Years ROI", format!("{:.1}", result.subsequent_year_roi)),
            ("Payback Period", payback),
        ],
    )?;

    section(&mut w, "Time and Cost Comparison")?;
    table(
        &mut w,
        &[
            ("Total Manual Hours", whole_hours(result.manual_hours)),
            ("Total Automated Hours", whole_hours(result.automated_hours)),
            ("Hours Saved", whole_hours(result.hours_saved())),
            ("Manual Process Cost", currency(result.manual_cost)),
            ("Automated Process Cost", currency(result.automated_cost)),
            ("Direct Labor Savings", currency(result.labor_savings)),
        ],
    )?;

    section(&mut w, "Benefits Breakdown")?;
    let benefits: Vec<(String, String)> = result
        .benefit_breakdown()
        .into_iter()
        .map(|(label, value)| (label, currency(value)))
        .collect();
    table(&mut w, &benefits)?;

    if !result.bonus_feature_values.is_empty() {
        section(&mut w, &format!("{edition} Edition Specific Features"))?;
        let features: Vec<(&str, String)> = result
            .bonus_feature_values
            .iter()
            .map(|bonus| (bonus.feature.name(), currency(bonus.value)))
            .collect();
        table(&mut w, &features)?;
    }

    section(&mut w, "5-Year Projection Summary")?;
    writeln!(
        w,
        "{:<8} {:>18} {:>18} {:>20}",
        "Year", "Manual Cost", "Automated Cost", "Cumulative Savings"
    )?;
    for year in &result.five_year_projection {
        writeln!(
            w,
            "{:<8} {:>18} {:>18} {:>20}",
            format!("Year {}", year.year),
            currency(year.manual_cost),
            currency(year.automated_cost),
            currency(year.cumulative_savings)
        )?;
    }

    section(&mut w, "Conclusion")?;
    writeln!(w, "{}", edition.catalog().conclusion)?;

    writeln!(w)?;
    writeln!(w, "{}", "-".repeat(RULE_WIDTH))?;
    match &config.organization {
        Some(org) => {
            writeln!(
                w,
                "© {} {} | This report is for informational purposes only.",
                generated_on.year(),
                org
            )?;
            writeln!(w, "Contact {org} for a detailed assessment tailored to your specific environment.")?;
        }
        None => writeln!(w, "This report is for informational purposes only.")?,
    }
    w.flush()?;
    Ok(())
}

pub fn save_report(
    path: impl AsRef<Path>,
    config: &ReportConfig,
    inputs: &CalculatorInputs,
    result: &CalculationResult,
    generated_on: NaiveDate,
) -> Result<()> {
    let file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_report(file, config, inputs, result, generated_on)
}

fn section<W: Write>(w: &mut W, title: &str) -> Result<()> {
    writeln!(w)?;
    writeln!(w, "{title}")?;
    writeln!(w, "{}", "-".repeat(title.chars().count()))?;
    Ok(())
}

/// Two aligned columns, label column sized to the longest label
fn table<W: Write, L: AsRef<str>>(w: &mut W, rows: &[(L, String)]) -> Result<()> {
    let width = rows
        .iter()
        .map(|(label, _)| label.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in rows {
        writeln!(w, "  {:<width$}  {}", label.as_ref(), value)?;
    }
    Ok(())
}
