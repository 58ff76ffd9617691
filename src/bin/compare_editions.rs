//! Compare all editions side by side for one organization
//!
//! Organizational inputs (fleet, workload, rates) are shared; benefit inputs
//! follow each edition's defaults unless set explicitly. License costs are
//! always list prices.

use anyhow::{Context, Result};
use clap::Parser;
use endpoint_roi::report::currency;
use endpoint_roi::{try_compute_roi, CalculationResult, Edition, InputOverrides};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "compare_editions", about = "Side-by-side ROI for every edition")]
struct Args {
    /// JSON file with (possibly partial) calculator inputs; its edition is ignored
    #[arg(long)]
    inputs: Option<PathBuf>,

    #[arg(long)]
    devices: Option<u32>,

    #[arg(long)]
    applications: Option<u32>,

    #[arg(long)]
    hourly_rate: Option<f64>,

    #[arg(long)]
    implementation_cost: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut overrides = match &args.inputs {
        Some(path) => {
            InputOverrides::load_json(path)
                .with_context(|| format!("Failed to load inputs file {}", path.display()))?
        }
        None => InputOverrides::default(),
    };
    overrides = overrides.merge(InputOverrides {
        devices: args.devices,
        applications: args.applications,
        technician_hourly_rate: args.hourly_rate,
        implementation_cost: args.implementation_cost,
        ..Default::default()
    });
    if let Some(cost) = overrides.license_cost_override {
        log::warn!("Ignoring license cost override {cost} from inputs file; comparing list prices");
        println!("Note: license cost override ignored; every edition uses list pricing");
    }

    println!(
        "{:<14} {:>14} {:>16} {:>14} {:>14} {:>10} {:>18}",
        "Edition", "License", "Annual Savings", "Year 1 ROI", "Year 2+ ROI", "Payback", "5-Year Net"
    );

    for result in edition_results(&overrides)? {
        let edition = result.edition;
        let payback = match result.payback.months() {
            Some(months) => format!("{months:.1} mo"),
            None => result.payback.to_string(),
        };
        let five_year_net = result
            .five_year_projection
            .last()
            .map(|year| currency(year.cumulative_savings))
            .unwrap_or_default();

        println!(
            "{:<14} {:>14} {:>16} {:>14} {:>14} {:>10} {:>18}",
            edition.name(),
            currency(result.license_cost),
            currency(result.adjusted_annual_savings),
            format!("{:.1}", result.first_year_roi),
            format!("{:.1}", result.subsequent_year_roi),
            payback,
            five_year_net,
        );

        for warning in &result.warnings {
            println!("  ! {warning}");
        }
    }

    Ok(())
}

/// One result per edition, each priced from its own list price
fn edition_results(overrides: &InputOverrides) -> Result<Vec<CalculationResult>> {
    let list_priced = InputOverrides {
        license_cost_override: None,
        ..overrides.clone()
    };
    Edition::ALL
        .into_iter()
        .map(|edition| {
            let inputs = list_priced.resolve_for(edition);
            try_compute_roi(&inputs).with_context(|| format!("Invalid inputs for {edition} Edition"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_override_is_not_shared_across_editions() {
        let overrides = InputOverrides {
            devices: Some(200),
            license_cost_override: Some(999.0),
            ..Default::default()
        };
        let results = edition_results(&overrides).unwrap();

        assert_eq!(results.len(), Edition::ALL.len());
        assert_eq!(results[0].edition, Edition::Free);
        assert_eq!(results[0].license_cost, 0.0);
        for pair in results.windows(2) {
            assert!(pair[1].license_cost > pair[0].license_cost);
        }
        assert!(results.iter().all(|r| r.license_cost != 999.0));
    }
}
