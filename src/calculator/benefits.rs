//! Secondary benefits, edition bonus features and the edition value multiplier

use super::labor::LaborSummary;
use crate::edition::{BonusContext, BonusFeature, EditionProfile};
use serde::Serialize;

/// Share of the fleet assumed to suffer a security incident each year
pub const INCIDENT_PRONE_SHARE: f64 = 0.05;

/// Value attributed to one bonus feature
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BonusFeatureValue {
    pub feature: BonusFeature,
    pub value: f64,
}

/// Inputs for the aggregator that do not come from earlier stages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenefitInputs {
    pub devices: u32,
    pub hourly_rate: f64,
    pub security_reduction_percent: f64,
    pub downtime_reduction_percent: f64,
    pub compliance_hours_saved: f64,
    pub bandwidth_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitSummary {
    pub compliance_savings: f64,
    pub bandwidth_savings_adjusted: f64,
    pub security_incident_value: f64,
    pub downtime_hours_saved: f64,
    pub downtime_cost_saved: f64,
    /// Strictly positive bonus values, in the edition's feature order
    pub bonus_feature_values: Vec<BonusFeatureValue>,
    pub total_annual_savings: f64,
    pub adjusted_annual_savings: f64,
}

/// Combine labor savings with the edition-weighted secondary benefits
pub fn aggregate(labor: &LaborSummary, profile: &EditionProfile, inputs: &BenefitInputs) -> BenefitSummary {
    let devices = f64::from(inputs.devices);

    let security_incident_value = (inputs.security_reduction_percent / 100.0)
        * (devices * INCIDENT_PRONE_SHARE)
        * profile.avg_incident_cost;

    let downtime = profile.downtime;
    let downtime_hours_saved = (inputs.downtime_reduction_percent / 100.0) * devices * downtime.hours_per_device;
    let downtime_cost_saved = downtime_hours_saved * inputs.hourly_rate * downtime.efficiency_factor;

    let bandwidth_savings_adjusted = inputs.bandwidth_savings * profile.bandwidth_multiplier;
    let compliance_savings = inputs.compliance_hours_saved * inputs.hourly_rate;

    let total_annual_savings = labor.labor_savings
        + compliance_savings
        + bandwidth_savings_adjusted
        + security_incident_value
        + downtime_cost_saved;

    let ctx = BonusContext {
        devices: inputs.devices,
        labor_savings: labor.labor_savings,
        downtime_cost_saved,
        security_incident_value,
    };
    let bonus_feature_values: Vec<BonusFeatureValue> = profile
        .bonus_features
        .iter()
        .map(|&feature| BonusFeatureValue { feature, value: feature.value(&ctx) })
        .filter(|bonus| bonus.value > 0.0)
        .collect();

    let adjusted_annual_savings = total_annual_savings * profile.value_multiplier;

    log::debug!(
        "{} benefits: total {:.2}, adjusted {:.2}, {} bonus features",
        profile.edition,
        total_annual_savings,
        adjusted_annual_savings,
        bonus_feature_values.len()
    );

    BenefitSummary {
        compliance_savings,
        bandwidth_savings_adjusted,
        security_incident_value,
        downtime_hours_saved,
        downtime_cost_saved,
        bonus_feature_values,
        total_annual_savings,
        adjusted_annual_savings,
    }
}
