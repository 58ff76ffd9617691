//! Annual license pricing with per-device volume discounts

use crate::edition::{DiscountTier, Edition, EditionPricing, BASE_BLOCK_DEVICES, VOLUME_DISCOUNT_TIERS};
use serde::Serialize;

/// Non-fatal conditions raised while pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalculationWarning {
    /// The edition does not scale to the requested fleet; cost is forced to 0
    CapacityExceeded {
        edition: Edition,
        device_limit: u32,
        devices: u32,
    },
}

impl std::fmt::Display for CalculationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculationWarning::CapacityExceeded { edition, device_limit, devices } => write!(
                f,
                "{edition} Edition is limited to {device_limit} endpoints ({devices} requested); \
                 select a paid edition for larger deployments"
            ),
        }
    }
}

/// Resolved license cost plus any pricing warning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LicenseQuote {
    pub annual_cost: f64,
    /// True when the cost came from a caller-supplied override
    pub overridden: bool,
    pub warning: Option<CalculationWarning>,
}

/// Resolve the annual license cost for an edition and fleet size
pub fn resolve_license_cost(edition: Edition, devices: u32, cost_override: Option<f64>) -> LicenseQuote {
    let profile = edition.profile();

    // Capacity is a property of the edition, reported even when overridden
    let warning = match profile.pricing {
        EditionPricing::Free { device_limit } if devices > device_limit => {
            log::warn!(
                "{} Edition is limited to {} endpoints, {} requested; license cost forced to 0",
                edition,
                device_limit,
                devices
            );
            Some(CalculationWarning::CapacityExceeded { edition, device_limit, devices })
        }
        _ => None,
    };

    if let Some(annual_cost) = cost_override {
        log::debug!("Using license cost override {:.2} for {} Edition", annual_cost, edition);
        return LicenseQuote { annual_cost, overridden: true, warning };
    }

    let annual_cost = match profile.pricing {
        EditionPricing::Free { .. } => 0.0,
        EditionPricing::Paid { base_price } => tiered_price(base_price, devices, &VOLUME_DISCOUNT_TIERS),
    };

    LicenseQuote { annual_cost, overridden: false, warning }
}

/// Base price covers the first block; each device beyond it is charged the
/// per-device base rate scaled by the discount of the tier it falls in.
pub fn tiered_price(base_price: f64, devices: u32, tiers: &[DiscountTier]) -> f64 {
    if devices <= BASE_BLOCK_DEVICES {
        return base_price;
    }

    let per_device_rate = base_price / f64::from(BASE_BLOCK_DEVICES);
    let mut accounted = BASE_BLOCK_DEVICES;
    let mut additional = 0.0;

    for tier in tiers {
        if accounted >= devices {
            break;
        }
        let tier_end = tier.upper_bound.map_or(devices, |bound| bound.min(devices));
        if tier_end > accounted {
            let devices_in_tier = tier_end - accounted;
            additional += f64::from(devices_in_tier) * per_device_rate * tier.discount_factor;
            accounted = tier_end;
        }
    }

    base_price + additional
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_base_price_up_to_threshold() {
        for edition in [Edition::Professional, Edition::Enterprise, Edition::Uem, Edition::Security] {
            let base = edition.profile().base_price().unwrap();
            for devices in [1, 25, 50] {
                let quote = resolve_license_cost(edition, devices, None);
                assert_eq!(quote.annual_cost, base);
                assert!(quote.warning.is_none());
            }
        }
        assert_eq!(resolve_license_cost(Edition::Professional, 50, None).annual_cost, 795.0);
    }

    #[test]
    fn test_first_device_past_threshold() {
        // 795 / 50 * 0.9 = 14.31
        let quote = resolve_license_cost(Edition::Professional, 51, None);
        assert_abs_diff_eq!(quote.annual_cost, 809.31, epsilon = 1e-9);
    }

    #[test]
    fn test_all_tiers_engaged() {
        // UEM at 3000 devices, per-device rate 21.90:
        // 50 * 19.71 + 400 * 17.52 + 500 * 15.33 + 2000 * 13.14 = 41,938.50
        let quote = resolve_license_cost(Edition::Uem, 3000, None);
        assert_abs_diff_eq!(quote.annual_cost, 1095.0 + 41_938.5, epsilon = 1e-6);
    }

    #[test]
    fn test_tier_boundaries() {
        let rate = 945.0 / 50.0;
        let at_100 = resolve_license_cost(Edition::Enterprise, 100, None).annual_cost;
        assert_abs_diff_eq!(at_100, 945.0 + 50.0 * rate * 0.9, epsilon = 1e-9);

        let at_101 = resolve_license_cost(Edition::Enterprise, 101, None).annual_cost;
        assert_abs_diff_eq!(at_101 - at_100, rate * 0.8, epsilon = 1e-9);

        let at_499 = resolve_license_cost(Edition::Enterprise, 499, None).annual_cost;
        let at_500 = resolve_license_cost(Edition::Enterprise, 500, None).annual_cost;
        let at_501 = resolve_license_cost(Edition::Enterprise, 501, None).annual_cost;
        assert_abs_diff_eq!(at_500 - at_499, rate * 0.8, epsilon = 1e-9);
        assert_abs_diff_eq!(at_501 - at_500, rate * 0.7, epsilon = 1e-9);

        let at_1001 = resolve_license_cost(Edition::Enterprise, 1001, None).annual_cost;
        let at_1000 = resolve_license_cost(Edition::Enterprise, 1000, None).annual_cost;
        assert_abs_diff_eq!(at_1001 - at_1000, rate * 0.6, epsilon = 1e-9);
    }

    #[test]
    fn test_monotonic_and_below_linear() {
        for edition in [Edition::Professional, Edition::Security] {
            let base = edition.profile().base_price().unwrap();
            let mut previous = base;
            for devices in 51..=2500u32 {
                let cost = resolve_license_cost(edition, devices, None).annual_cost;
                assert!(cost >= previous, "{edition} not monotonic at {devices}");
                assert!(cost < base / 50.0 * f64::from(devices), "{edition} not discounted at {devices}");
                previous = cost;
            }
        }
    }

    #[test]
    fn test_free_edition_is_always_zero() {
        let small = resolve_license_cost(Edition::Free, 50, None);
        assert_eq!(small.annual_cost, 0.0);
        assert!(small.warning.is_none());

        let large = resolve_license_cost(Edition::Free, 3000, None);
        assert_eq!(large.annual_cost, 0.0);
        assert_eq!(
            large.warning,
            Some(CalculationWarning::CapacityExceeded {
                edition: Edition::Free,
                device_limit: 50,
                devices: 3000,
            })
        );
    }

    #[test]
    fn test_override_skips_tiering() {
        let quote = resolve_license_cost(Edition::Security, 5000, Some(12_345.0));
        assert_eq!(quote.annual_cost, 12_345.0);
        assert!(quote.overridden);

        let zero = resolve_license_cost(Edition::Professional, 10, Some(0.0));
        assert_eq!(zero.annual_cost, 0.0);
    }

    #[test]
    fn test_override_keeps_capacity_warning() {
        let quote = resolve_license_cost(Edition::Free, 80, Some(500.0));
        assert_eq!(quote.annual_cost, 500.0);
        assert!(quote.warning.is_some());
    }

    #[test]
    fn test_warning_message() {
        let warning = CalculationWarning::CapacityExceeded {
            edition: Edition::Free,
            device_limit: 50,
            devices: 60,
        };
        assert!(warning.to_string().starts_with("Free Edition is limited to 50 endpoints"));
    }
}
