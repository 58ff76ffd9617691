//! ROI calculation pipeline
//!
//! inputs → pricing → labor → benefits → ROI/projection → [`CalculationResult`]

mod pricing;
mod labor;
mod benefits;
mod roi;

pub use pricing::{resolve_license_cost, tiered_price, CalculationWarning, LicenseQuote};
pub use labor::LaborSummary;
pub use benefits::{aggregate, BenefitInputs, BenefitSummary, BonusFeatureValue, INCIDENT_PRONE_SHARE};
pub use roi::{project_years, Payback, ProjectionYear, RoiPercent, RoiSummary, PROJECTION_YEARS};

use crate::edition::Edition;
use crate::error::Result;
use crate::inputs::CalculatorInputs;
use serde::Serialize;

/// Everything derived from one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub edition: Edition,

    // Costs
    pub license_cost: f64,
    pub total_first_year_cost: f64,
    pub subsequent_year_cost: f64,

    // Labor
    pub total_updates: u64,
    pub manual_hours: f64,
    pub automated_hours: f64,
    pub manual_cost: f64,
    pub automated_cost: f64,
    pub labor_savings: f64,

    // Secondary benefits
    pub compliance_savings: f64,
    pub bandwidth_savings_adjusted: f64,
    pub security_incident_value: f64,
    pub downtime_hours_saved: f64,
    pub downtime_cost_saved: f64,
    pub bonus_feature_values: Vec<BonusFeatureValue>,

    pub total_annual_savings: f64,
    /// Total annual savings after the edition value multiplier
    pub adjusted_annual_savings: f64,

    pub first_year_roi: RoiPercent,
    pub subsequent_year_roi: RoiPercent,
    pub payback: Payback,

    pub five_year_projection: Vec<ProjectionYear>,

    /// Non-fatal conditions, such as a fleet too large for the edition
    pub warnings: Vec<CalculationWarning>,
}

impl CalculationResult {
    pub fn hours_saved(&self) -> f64 {
        self.manual_hours - self.automated_hours
    }

    /// Annual cost of the automated process including the license
    pub fn automated_cost_with_license(&self) -> f64 {
        self.automated_cost + self.license_cost
    }

    /// Named benefit line items followed by the edition's bonus features
    pub fn benefit_breakdown(&self) -> Vec<(String, f64)> {
        let mut items = vec![
            ("Direct Labor Savings".to_string(), self.labor_savings),
            ("Compliance Reporting Savings".to_string(), self.compliance_savings),
            ("Bandwidth Cost Savings".to_string(), self.bandwidth_savings_adjusted),
            ("Security Incident Reduction Value".to_string(), self.security_incident_value),
            ("Downtime Cost Savings".to_string(), self.downtime_cost_saved),
        ];
        items.extend(self.bonus_feature_values.iter().map(|bonus| {
            (format!("{} ({} Edition)", bonus.feature, self.edition), bonus.value)
        }));
        items
    }

    pub fn bonus_feature_names(&self) -> Vec<&'static str> {
        self.bonus_feature_values.iter().map(|b| b.feature.name()).collect()
    }
}

/// Compute the full ROI result.
///
/// Pure and total over validated inputs; callers are expected to have run
/// [`CalculatorInputs::validate`] (or use [`try_compute_roi`]).
pub fn compute_roi(inputs: &CalculatorInputs) -> CalculationResult {
    let profile = inputs.edition.profile();

    let quote = resolve_license_cost(inputs.edition, inputs.devices, inputs.license_cost_override);
    log::debug!(
        "License cost for {} devices on {} Edition: {:.2}{}",
        inputs.devices,
        inputs.edition,
        quote.annual_cost,
        if quote.overridden { " (override)" } else { "" }
    );

    let labor = LaborSummary::calculate(
        inputs.applications,
        inputs.updates_per_app_per_year,
        inputs.hours_per_update_manual,
        inputs.technician_hourly_rate,
        inputs.automation_efficiency_percent,
    );
    log::debug!(
        "Labor: {:.2} manual hours, {:.2} automated hours, savings {:.2}",
        labor.manual_hours,
        labor.automated_hours,
        labor.labor_savings
    );

    let benefits = aggregate(
        &labor,
        profile,
        &BenefitInputs {
            devices: inputs.devices,
            hourly_rate: inputs.technician_hourly_rate,
            security_reduction_percent: inputs.security_incident_reduction_percent,
            downtime_reduction_percent: inputs.downtime_reduction_percent,
            compliance_hours_saved: inputs.compliance_hours_saved_annual,
            bandwidth_savings: inputs.bandwidth_savings_annual,
        },
    );

    let roi = RoiSummary::calculate(benefits.adjusted_annual_savings, quote.annual_cost, inputs.implementation_cost);
    let five_year_projection = project_years(
        labor.manual_cost,
        labor.automated_cost,
        quote.annual_cost,
        inputs.implementation_cost,
        benefits.adjusted_annual_savings,
    );
    log::debug!(
        "ROI: first year {}, subsequent {}, payback {}",
        roi.first_year_roi,
        roi.subsequent_year_roi,
        roi.payback
    );

    CalculationResult {
        edition: inputs.edition,
        license_cost: quote.annual_cost,
        total_first_year_cost: roi.total_first_year_cost,
        subsequent_year_cost: roi.subsequent_year_cost,
        total_updates: labor.total_updates,
        manual_hours: labor.manual_hours,
        automated_hours: labor.automated_hours,
        manual_cost: labor.manual_cost,
        automated_cost: labor.automated_cost,
        labor_savings: labor.labor_savings,
        compliance_savings: benefits.compliance_savings,
        bandwidth_savings_adjusted: benefits.bandwidth_savings_adjusted,
        security_incident_value: benefits.security_incident_value,
        downtime_hours_saved: benefits.downtime_hours_saved,
        downtime_cost_saved: benefits.downtime_cost_saved,
        bonus_feature_values: benefits.bonus_feature_values,
        total_annual_savings: benefits.total_annual_savings,
        adjusted_annual_savings: benefits.adjusted_annual_savings,
        first_year_roi: roi.first_year_roi,
        subsequent_year_roi: roi.subsequent_year_roi,
        payback: roi.payback,
        five_year_projection,
        warnings: quote.warning.into_iter().collect(),
    }
}

/// Validate the inputs, then compute
pub fn try_compute_roi(inputs: &CalculatorInputs) -> Result<CalculationResult> {
    inputs.validate()?;
    Ok(compute_roi(inputs))
}
