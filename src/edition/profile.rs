//! Edition pricing and benefit parameters, plus the volume discount schedule

use super::{BonusFeature, Edition};

/// Devices covered by one base-price license block
pub const BASE_BLOCK_DEVICES: u32 = 50;

/// One step of the per-device volume discount schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountTier {
    /// Cumulative device count this tier extends to (None = unbounded)
    pub upper_bound: Option<u32>,
    /// Multiplier applied to the per-device base rate
    pub discount_factor: f64,
}

/// Discount tiers for devices beyond the first base block, in walk order
pub const VOLUME_DISCOUNT_TIERS: [DiscountTier; 4] = [
    DiscountTier { upper_bound: Some(100), discount_factor: 0.9 },
    DiscountTier { upper_bound: Some(500), discount_factor: 0.8 },
    DiscountTier { upper_bound: Some(1000), discount_factor: 0.7 },
    DiscountTier { upper_bound: None, discount_factor: 0.6 },
];

/// How an edition is licensed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditionPricing {
    /// No charge, but only valid up to `device_limit` endpoints
    Free { device_limit: u32 },
    /// Annual list price for the first base block of devices
    Paid { base_price: f64 },
}

/// Downtime baseline used by the benefit aggregator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DowntimeParams {
    /// Annual downtime hours per device before automation
    pub hours_per_device: f64,
    /// Productivity multiplier on recovered technician hours
    pub efficiency_factor: f64,
}

/// Starting values for the benefit inputs when an edition is selected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenefitDefaults {
    /// Highest plausible security incident reduction (%)
    pub security_reduction_max: f64,
    /// Highest plausible downtime reduction (%)
    pub downtime_reduction_max: f64,
    /// Compliance reporting hours saved per year
    pub compliance_hours: f64,
}

/// Static per-edition parameters
#[derive(Debug, Clone, PartialEq)]
pub struct EditionProfile {
    pub edition: Edition,
    pub pricing: EditionPricing,
    /// Average cost of one security incident
    pub avg_incident_cost: f64,
    pub downtime: DowntimeParams,
    /// Multiplier on user-supplied bandwidth savings
    pub bandwidth_multiplier: f64,
    /// Strategic value multiplier applied to total annual savings
    pub value_multiplier: f64,
    pub benefit_defaults: BenefitDefaults,
    pub bonus_features: &'static [BonusFeature],
}

impl EditionProfile {
    /// Base list price, or None for the free edition
    pub fn base_price(&self) -> Option<f64> {
        match self.pricing {
            EditionPricing::Paid { base_price } => Some(base_price),
            EditionPricing::Free { .. } => None,
        }
    }
}

const PROFESSIONAL_FEATURES: &[BonusFeature] = &[
    BonusFeature::ApplicationDeploymentAutomation,
    BonusFeature::RemoteTroubleshooting,
];

const ENTERPRISE_FEATURES: &[BonusFeature] = &[
    BonusFeature::ApplicationDeploymentAutomation,
    BonusFeature::RemoteTroubleshooting,
    BonusFeature::SelfServicePortal,
    BonusFeature::UsbDeviceManagement,
];

const UEM_FEATURES: &[BonusFeature] = &[
    BonusFeature::ApplicationDeploymentAutomation,
    BonusFeature::RemoteTroubleshooting,
    BonusFeature::SelfServicePortal,
    BonusFeature::UsbDeviceManagement,
    BonusFeature::OsDeployment,
    BonusFeature::MobileDeviceManagement,
];

const SECURITY_FEATURES: &[BonusFeature] = &[
    BonusFeature::ApplicationDeploymentAutomation,
    BonusFeature::RemoteTroubleshooting,
    BonusFeature::SelfServicePortal,
    BonusFeature::UsbDeviceManagement,
    BonusFeature::OsDeployment,
    BonusFeature::MobileDeviceManagement,
    BonusFeature::VulnerabilityRemediation,
    BonusFeature::EndpointPrivilegeManagement,
    BonusFeature::RansomwareProtection,
];

// Standard downtime baseline, shared by Free and Professional
const STANDARD_DOWNTIME: DowntimeParams = DowntimeParams {
    hours_per_device: 2.0,
    efficiency_factor: 1.5,
};

// Cross-platform editions recover more downtime per device
const UNIFIED_DOWNTIME: DowntimeParams = DowntimeParams {
    hours_per_device: 2.5,
    efficiency_factor: 1.8,
};

static FREE: EditionProfile = EditionProfile {
    edition: Edition::Free,
    pricing: EditionPricing::Free { device_limit: BASE_BLOCK_DEVICES },
    avg_incident_cost: 5000.0,
    downtime: STANDARD_DOWNTIME,
    bandwidth_multiplier: 1.0,
    value_multiplier: 1.0,
    benefit_defaults: BenefitDefaults {
        security_reduction_max: 30.0,
        downtime_reduction_max: 20.0,
        compliance_hours: 100.0,
    },
    bonus_features: &[],
};

static PROFESSIONAL: EditionProfile = EditionProfile {
    edition: Edition::Professional,
    pricing: EditionPricing::Paid { base_price: 795.0 },
    avg_incident_cost: 5000.0,
    downtime: STANDARD_DOWNTIME,
    bandwidth_multiplier: 1.0,
    value_multiplier: 1.05,
    benefit_defaults: BenefitDefaults {
        security_reduction_max: 50.0,
        downtime_reduction_max: 35.0,
        compliance_hours: 150.0,
    },
    bonus_features: PROFESSIONAL_FEATURES,
};

static ENTERPRISE: EditionProfile = EditionProfile {
    edition: Edition::Enterprise,
    pricing: EditionPricing::Paid { base_price: 945.0 },
    avg_incident_cost: 6000.0,
    downtime: DowntimeParams {
        hours_per_device: 2.2,
        efficiency_factor: 1.5,
    },
    bandwidth_multiplier: 1.0,
    value_multiplier: 1.10,
    benefit_defaults: BenefitDefaults {
        security_reduction_max: 65.0,
        downtime_reduction_max: 50.0,
        compliance_hours: 200.0,
    },
    bonus_features: ENTERPRISE_FEATURES,
};

static UEM: EditionProfile = EditionProfile {
    edition: Edition::Uem,
    pricing: EditionPricing::Paid { base_price: 1095.0 },
    avg_incident_cost: 6000.0,
    downtime: UNIFIED_DOWNTIME,
    bandwidth_multiplier: 1.2,
    value_multiplier: 1.15,
    benefit_defaults: BenefitDefaults {
        security_reduction_max: 75.0,
        downtime_reduction_max: 60.0,
        compliance_hours: 250.0,
    },
    bonus_features: UEM_FEATURES,
};

static SECURITY: EditionProfile = EditionProfile {
    edition: Edition::Security,
    pricing: EditionPricing::Paid { base_price: 1695.0 },
    avg_incident_cost: 7500.0,
    downtime: UNIFIED_DOWNTIME,
    bandwidth_multiplier: 1.2,
    value_multiplier: 1.25,
    benefit_defaults: BenefitDefaults {
        security_reduction_max: 90.0,
        downtime_reduction_max: 70.0,
        compliance_hours: 300.0,
    },
    bonus_features: SECURITY_FEATURES,
};

pub(super) fn lookup(edition: Edition) -> &'static EditionProfile {
    match edition {
        Edition::Free => &FREE,
        Edition::Professional => &PROFESSIONAL,
        Edition::Enterprise => &ENTERPRISE,
        Edition::Uem => &UEM,
        Edition::Security => &SECURITY,
    }
}
