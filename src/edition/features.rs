//! Edition-exclusive bonus features and their value formulas

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantities already computed by the pipeline that bonus formulas draw on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusContext {
    pub devices: u32,
    pub labor_savings: f64,
    pub downtime_cost_saved: f64,
    pub security_incident_value: f64,
}

/// A feature whose annual value is reported on top of the core benefits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusFeature {
    ApplicationDeploymentAutomation,
    RemoteTroubleshooting,
    SelfServicePortal,
    UsbDeviceManagement,
    OsDeployment,
    MobileDeviceManagement,
    VulnerabilityRemediation,
    EndpointPrivilegeManagement,
    RansomwareProtection,
}

impl BonusFeature {
    pub fn name(self) -> &'static str {
        match self {
            BonusFeature::ApplicationDeploymentAutomation => "Application Deployment Automation",
            BonusFeature::RemoteTroubleshooting => "Remote Troubleshooting",
            BonusFeature::SelfServicePortal => "Self-Service Portal",
            BonusFeature::UsbDeviceManagement => "USB Device Management",
            BonusFeature::OsDeployment => "OS Deployment",
            BonusFeature::MobileDeviceManagement => "Mobile Device Management",
            BonusFeature::VulnerabilityRemediation => "Vulnerability Remediation",
            BonusFeature::EndpointPrivilegeManagement => "Endpoint Privilege Management",
            BonusFeature::RansomwareProtection => "Ransomware Protection",
        }
    }

    /// Annual value of the feature
    pub fn value(self, ctx: &BonusContext) -> f64 {
        let devices = f64::from(ctx.devices);
        match self {
            BonusFeature::ApplicationDeploymentAutomation => ctx.labor_savings * 0.1,
            BonusFeature::RemoteTroubleshooting => ctx.downtime_cost_saved * 0.2,
            BonusFeature::SelfServicePortal => devices * 5.0,
            BonusFeature::UsbDeviceManagement => devices * 2.0,
            BonusFeature::OsDeployment => devices * 10.0,
            BonusFeature::MobileDeviceManagement => devices * 8.0,
            BonusFeature::VulnerabilityRemediation => ctx.security_incident_value * 0.3,
            BonusFeature::EndpointPrivilegeManagement => devices * 15.0,
            BonusFeature::RansomwareProtection => devices * 25.0,
        }
    }
}

impl fmt::Display for BonusFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
