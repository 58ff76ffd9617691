//! Calculator inputs, edition-derived defaults, validation and JSON state files
//!
//! Input files are partial: any field left out falls back to the default for
//! the selected edition. A file written by [`CalculatorInputs::save_json`]
//! carries every field and reloads through [`InputOverrides::load_json`] to
//! the same inputs.

use crate::edition::Edition;
use crate::error::{Result, RoiError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Security incident reduction never defaults above this (%)
const DEFAULT_SECURITY_REDUCTION_CAP: f64 = 60.0;
/// Downtime reduction never defaults above this (%)
const DEFAULT_DOWNTIME_REDUCTION_CAP: f64 = 40.0;

/// Valid range for automation efficiency (%)
pub const AUTOMATION_EFFICIENCY_RANGE: (f64, f64) = (50.0, 99.0);

/// Organizational parameters for one ROI calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    /// Endpoints under management
    pub devices: u32,

    /// Applications kept up to date
    pub applications: u32,

    pub updates_per_app_per_year: u32,

    /// Technician hours to apply one update by hand
    pub hours_per_update_manual: f64,

    pub technician_hourly_rate: f64,

    /// Reduction in manual effort from automation (50 to 99)
    pub automation_efficiency_percent: f64,

    pub edition: Edition,

    /// Negotiated annual license cost replacing the list-price computation
    #[serde(default)]
    pub license_cost_override: Option<f64>,

    /// One-time implementation, training and rollout cost
    pub implementation_cost: f64,

    pub security_incident_reduction_percent: f64,

    pub downtime_reduction_percent: f64,

    pub compliance_hours_saved_annual: f64,

    /// Annual bandwidth savings before the edition multiplier
    pub bandwidth_savings_annual: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self::for_edition(Edition::Uem)
    }
}

impl CalculatorInputs {
    /// Baseline scenario with benefit inputs seeded from the edition's defaults
    pub fn for_edition(edition: Edition) -> Self {
        let defaults = edition.profile().benefit_defaults;
        Self {
            devices: 3000,
            applications: 1500,
            updates_per_app_per_year: 4,
            hours_per_update_manual: 4.0,
            technician_hourly_rate: 50.0,
            automation_efficiency_percent: 90.0,
            edition,
            license_cost_override: None,
            implementation_cost: 20_000.0,
            security_incident_reduction_percent: defaults
                .security_reduction_max
                .min(DEFAULT_SECURITY_REDUCTION_CAP),
            downtime_reduction_percent: defaults
                .downtime_reduction_max
                .min(DEFAULT_DOWNTIME_REDUCTION_CAP),
            compliance_hours_saved_annual: defaults.compliance_hours,
            bandwidth_savings_annual: 5_000.0,
        }
    }

    /// Check every field against its documented domain.
    ///
    /// Returns the first violation found, in field order.
    pub fn validate(&self) -> Result<()> {
        if self.devices == 0 {
            return Err(RoiError::invalid("devices", "must be at least 1"));
        }
        if self.applications == 0 {
            return Err(RoiError::invalid("applications", "must be at least 1"));
        }
        if self.updates_per_app_per_year == 0 {
            return Err(RoiError::invalid("updates_per_app_per_year", "must be at least 1"));
        }
        require_positive("hours_per_update_manual", self.hours_per_update_manual)?;
        require_positive("technician_hourly_rate", self.technician_hourly_rate)?;

        let (min_eff, max_eff) = AUTOMATION_EFFICIENCY_RANGE;
        require_range(
            "automation_efficiency_percent",
            self.automation_efficiency_percent,
            min_eff,
            max_eff,
        )?;

        if let Some(cost) = self.license_cost_override {
            require_non_negative("license_cost_override", cost)?;
        }
        require_non_negative("implementation_cost", self.implementation_cost)?;
        require_range(
            "security_incident_reduction_percent",
            self.security_incident_reduction_percent,
            0.0,
            100.0,
        )?;
        require_range("downtime_reduction_percent", self.downtime_reduction_percent, 0.0, 100.0)?;
        require_non_negative("compliance_hours_saved_annual", self.compliance_hours_saved_annual)?;
        require_non_negative("bandwidth_savings_annual", self.bandwidth_savings_annual)?;
        Ok(())
    }

    /// Write every field as pretty-printed JSON
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RoiError::invalid(field, format!("must be a finite number, got {value}")))
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(RoiError::invalid(field, format!("must be greater than 0, got {value}")))
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(RoiError::invalid(field, format!("must not be negative, got {value}")))
    }
}

fn require_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    require_finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RoiError::invalid(field, format!("must be between {min} and {max}, got {value}")))
    }
}

/// Sparse set of input values layered over edition defaults.
///
/// Used both for JSON input files and for command-line flags. Unknown keys
/// are rejected; the short key names of the browser calculator's saved
/// state are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputOverrides {
    pub devices: Option<u32>,
    pub applications: Option<u32>,
    #[serde(alias = "updates_per_app")]
    pub updates_per_app_per_year: Option<u32>,
    #[serde(alias = "hours_per_update")]
    pub hours_per_update_manual: Option<f64>,
    #[serde(alias = "hourly_rate")]
    pub technician_hourly_rate: Option<f64>,
    #[serde(alias = "automation_efficiency")]
    pub automation_efficiency_percent: Option<f64>,
    pub edition: Option<Edition>,
    pub license_cost_override: Option<f64>,
    pub implementation_cost: Option<f64>,
    #[serde(alias = "security_benefit")]
    pub security_incident_reduction_percent: Option<f64>,
    #[serde(alias = "downtime_reduction")]
    pub downtime_reduction_percent: Option<f64>,
    #[serde(alias = "compliance_time_saved")]
    pub compliance_hours_saved_annual: Option<f64>,
    #[serde(alias = "bandwidth_savings")]
    pub bandwidth_savings_annual: Option<f64>,
    /// Colour theme kept by saved browser state; no effect on the calculation
    #[serde(skip_serializing)]
    pub theme: Option<String>,
}

impl InputOverrides {
    /// Load a (possibly partial) JSON input file
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Layer `other` on top of `self`; values set in `other` win
    pub fn merge(self, other: InputOverrides) -> InputOverrides {
        InputOverrides {
            devices: other.devices.or(self.devices),
            applications: other.applications.or(self.applications),
            updates_per_app_per_year: other.updates_per_app_per_year.or(self.updates_per_app_per_year),
            hours_per_update_manual: other.hours_per_update_manual.or(self.hours_per_update_manual),
            technician_hourly_rate: other.technician_hourly_rate.or(self.technician_hourly_rate),
            automation_efficiency_percent: other
                .automation_efficiency_percent
                .or(self.automation_efficiency_percent),
            edition: other.edition.or(self.edition),
            license_cost_override: other.license_cost_override.or(self.license_cost_override),
            implementation_cost: other.implementation_cost.or(self.implementation_cost),
            security_incident_reduction_percent: other
                .security_incident_reduction_percent
                .or(self.security_incident_reduction_percent),
            downtime_reduction_percent: other
                .downtime_reduction_percent
                .or(self.downtime_reduction_percent),
            compliance_hours_saved_annual: other
                .compliance_hours_saved_annual
                .or(self.compliance_hours_saved_annual),
            bandwidth_savings_annual: other.bandwidth_savings_annual.or(self.bandwidth_savings_annual),
            theme: other.theme.or(self.theme),
        }
    }

    /// Fill gaps from the defaults of the chosen edition (UEM when unset)
    pub fn resolve(&self) -> CalculatorInputs {
        self.resolve_for(self.edition.unwrap_or(Edition::Uem))
    }

    /// Fill gaps from the defaults of `edition`, ignoring any edition set here
    pub fn resolve_for(&self, edition: Edition) -> CalculatorInputs {
        let base = CalculatorInputs::for_edition(edition);
        CalculatorInputs {
            devices: self.devices.unwrap_or(base.devices),
            applications: self.applications.unwrap_or(base.applications),
            updates_per_app_per_year: self
                .updates_per_app_per_year
                .unwrap_or(base.updates_per_app_per_year),
            hours_per_update_manual: self
                .hours_per_update_manual
                .unwrap_or(base.hours_per_update_manual),
            technician_hourly_rate: self
                .technician_hourly_rate
                .unwrap_or(base.technician_hourly_rate),
            automation_efficiency_percent: self
                .automation_efficiency_percent
                .unwrap_or(base.automation_efficiency_percent),
            edition,
            license_cost_override: self.license_cost_override,
            implementation_cost: self.implementation_cost.unwrap_or(base.implementation_cost),
            security_incident_reduction_percent: self
                .security_incident_reduction_percent
                .unwrap_or(base.security_incident_reduction_percent),
            downtime_reduction_percent: self
                .downtime_reduction_percent
                .unwrap_or(base.downtime_reduction_percent),
            compliance_hours_saved_annual: self
                .compliance_hours_saved_annual
                .unwrap_or(base.compliance_hours_saved_annual),
            bandwidth_savings_annual: self
                .bandwidth_savings_annual
                .unwrap_or(base.bandwidth_savings_annual),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario() {
        let inputs = CalculatorInputs::default();
        assert_eq!(inputs.devices, 3000);
        assert_eq!(inputs.applications, 1500);
        assert_eq!(inputs.edition, Edition::Uem);
        assert_eq!(inputs.license_cost_override, None);
        assert_eq!(inputs.implementation_cost, 20_000.0);
        // UEM maxima are 75% / 60%, capped to 60% / 40%
        assert_eq!(inputs.security_incident_reduction_percent, 60.0);
        assert_eq!(inputs.downtime_reduction_percent, 40.0);
        assert_eq!(inputs.compliance_hours_saved_annual, 250.0);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_edition_defaults_respect_lower_maxima() {
        let free = CalculatorInputs::for_edition(Edition::Free);
        assert_eq!(free.security_incident_reduction_percent, 30.0);
        assert_eq!(free.downtime_reduction_percent, 20.0);
        assert_eq!(free.compliance_hours_saved_annual, 100.0);

        let pro = CalculatorInputs::for_edition(Edition::Professional);
        assert_eq!(pro.security_incident_reduction_percent, 50.0);
        assert_eq!(pro.downtime_reduction_percent, 35.0);

        let sec = CalculatorInputs::for_edition(Edition::Security);
        assert_eq!(sec.security_incident_reduction_percent, 60.0);
        assert_eq!(sec.downtime_reduction_percent, 40.0);
        assert_eq!(sec.compliance_hours_saved_annual, 300.0);
    }

    #[test]
    fn test_validation_rejects_out_of_domain_values() {
        let cases: Vec<(&str, CalculatorInputs)> = vec![
            ("devices", CalculatorInputs { devices: 0, ..Default::default() }),
            ("applications", CalculatorInputs { applications: 0, ..Default::default() }),
            (
                "updates_per_app_per_year",
                CalculatorInputs { updates_per_app_per_year: 0, ..Default::default() },
            ),
            (
                "hours_per_update_manual",
                CalculatorInputs { hours_per_update_manual: 0.0, ..Default::default() },
            ),
            (
                "technician_hourly_rate",
                CalculatorInputs { technician_hourly_rate: f64::NAN, ..Default::default() },
            ),
            (
                "automation_efficiency_percent",
                CalculatorInputs { automation_efficiency_percent: 49.9, ..Default::default() },
            ),
            (
                "automation_efficiency_percent",
                CalculatorInputs { automation_efficiency_percent: 100.0, ..Default::default() },
            ),
            (
                "license_cost_override",
                CalculatorInputs { license_cost_override: Some(-1.0), ..Default::default() },
            ),
            (
                "implementation_cost",
                CalculatorInputs { implementation_cost: -0.01, ..Default::default() },
            ),
            (
                "security_incident_reduction_percent",
                CalculatorInputs { security_incident_reduction_percent: 101.0, ..Default::default() },
            ),
            (
                "downtime_reduction_percent",
                CalculatorInputs { downtime_reduction_percent: -5.0, ..Default::default() },
            ),
            (
                "bandwidth_savings_annual",
                CalculatorInputs { bandwidth_savings_annual: f64::INFINITY, ..Default::default() },
            ),
        ];

        for (expected_field, inputs) in cases {
            match inputs.validate() {
                Err(RoiError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected {expected_field} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_boundary_values_are_accepted() {
        let inputs = CalculatorInputs {
            devices: 1,
            applications: 1,
            updates_per_app_per_year: 1,
            automation_efficiency_percent: 99.0,
            license_cost_override: Some(0.0),
            implementation_cost: 0.0,
            security_incident_reduction_percent: 100.0,
            downtime_reduction_percent: 0.0,
            compliance_hours_saved_annual: 0.0,
            bandwidth_savings_annual: 0.0,
            ..Default::default()
        };
        assert!(inputs.validate().is_ok());

        let low = CalculatorInputs { automation_efficiency_percent: 50.0, ..Default::default() };
        assert!(low.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_edition_defaults() {
        let json = r#"{ "edition": "Free", "devices": 40 }"#;
        let inputs = InputOverrides::from_json_reader(json.as_bytes()).unwrap().resolve();

        assert_eq!(inputs.edition, Edition::Free);
        assert_eq!(inputs.devices, 40);
        assert_eq!(inputs.applications, 1500);
        assert_eq!(inputs.security_incident_reduction_percent, 30.0);
        assert_eq!(inputs.compliance_hours_saved_annual, 100.0);
    }

    #[test]
    fn test_full_state_reloads_unchanged() {
        let inputs = CalculatorInputs {
            devices: 420,
            edition: Edition::Enterprise,
            license_cost_override: Some(12_000.0),
            ..CalculatorInputs::for_edition(Edition::Enterprise)
        };
        let json = serde_json::to_string(&inputs).unwrap();
        let reloaded = InputOverrides::from_json_reader(json.as_bytes()).unwrap().resolve();
        assert_eq!(reloaded, inputs);
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let result = InputOverrides::from_json_reader("{ devices: ".as_bytes());
        assert!(matches!(result, Err(RoiError::Json(_))));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let json = r#"{ "edition": "Professional", "device": 40, "technician_rate": 80.0 }"#;
        let result = InputOverrides::from_json_reader(json.as_bytes());
        match result {
            Err(RoiError::Json(err)) => assert!(err.to_string().contains("unknown field"), "{err}"),
            other => panic!("expected unknown field error, got {other:?}"),
        }
    }

    #[test]
    fn test_saved_browser_state_keys_are_accepted() {
        let json = r#"{
            "devices": 40,
            "applications": 120,
            "updates_per_app": 6,
            "hours_per_update": 2.5,
            "hourly_rate": 80.0,
            "automation_efficiency": 85,
            "edition": "Professional",
            "implementation_cost": 7500,
            "security_benefit": 10,
            "compliance_time_saved": 90,
            "downtime_reduction": 15,
            "bandwidth_savings": 1200,
            "theme": "Dark"
        }"#;
        let inputs = InputOverrides::from_json_reader(json.as_bytes()).unwrap().resolve();

        assert_eq!(inputs.edition, Edition::Professional);
        assert_eq!(inputs.devices, 40);
        assert_eq!(inputs.updates_per_app_per_year, 6);
        assert_eq!(inputs.hours_per_update_manual, 2.5);
        assert_eq!(inputs.technician_hourly_rate, 80.0);
        assert_eq!(inputs.automation_efficiency_percent, 85.0);
        assert_eq!(inputs.implementation_cost, 7_500.0);
        assert_eq!(inputs.security_incident_reduction_percent, 10.0);
        assert_eq!(inputs.compliance_hours_saved_annual, 90.0);
        assert_eq!(inputs.downtime_reduction_percent, 15.0);
        assert_eq!(inputs.bandwidth_savings_annual, 1_200.0);
    }

    #[test]
    fn test_load_json_from_file() {
        let path = std::env::temp_dir().join(format!("endpoint_roi_inputs_{}.json", std::process::id()));
        let inputs = CalculatorInputs {
            devices: 75,
            ..CalculatorInputs::for_edition(Edition::Security)
        };
        inputs.save_json(&path).unwrap();
        let reloaded = InputOverrides::load_json(&path).unwrap().resolve();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(reloaded, inputs);
    }

    #[test]
    fn test_merge_prefers_later_values() {
        let file = InputOverrides {
            devices: Some(100),
            edition: Some(Edition::Professional),
            implementation_cost: Some(5_000.0),
            ..Default::default()
        };
        let flags = InputOverrides {
            devices: Some(250),
            ..Default::default()
        };

        let merged = file.merge(flags);
        assert_eq!(merged.devices, Some(250));
        assert_eq!(merged.edition, Some(Edition::Professional));
        assert_eq!(merged.implementation_cost, Some(5_000.0));

        let inputs = merged.resolve();
        assert_eq!(inputs.devices, 250);
        assert_eq!(inputs.security_incident_reduction_percent, 50.0);
    }

    #[test]
    fn test_resolve_for_ignores_override_edition() {
        let overrides = InputOverrides {
            edition: Some(Edition::Free),
            devices: Some(75),
            ..Default::default()
        };
        let inputs = overrides.resolve_for(Edition::Security);
        assert_eq!(inputs.edition, Edition::Security);
        assert_eq!(inputs.devices, 75);
        assert_eq!(inputs.compliance_hours_saved_annual, 300.0);
    }
}
