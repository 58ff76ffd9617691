//! ROI, payback and the five-year cash-flow projection

use serde::Serialize;
use std::fmt;

/// Years covered by the projection
pub const PROJECTION_YEARS: u32 = 5;

/// Return on investment as a percentage of cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "percent")]
pub enum RoiPercent {
    Bounded(f64),
    /// Cost base is zero, so any savings are an unbounded return
    Unbounded,
}

impl RoiPercent {
    /// `(savings - cost) / cost * 100`, unbounded when cost is not positive
    pub fn from_savings(savings: f64, cost: f64) -> Self {
        if cost > 0.0 {
            RoiPercent::Bounded((savings - cost) / cost * 100.0)
        } else {
            RoiPercent::Unbounded
        }
    }

    pub fn bounded(self) -> Option<f64> {
        match self {
            RoiPercent::Bounded(value) => Some(value),
            RoiPercent::Unbounded => None,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, RoiPercent::Unbounded)
    }
}

impl fmt::Display for RoiPercent {
    /// Honors the formatter precision, e.g. `{:.1}` gives `12.3%`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoiPercent::Bounded(value) => match f.precision() {
                Some(precision) => write!(f, "{value:.precision$}%"),
                None => write!(f, "{value:.2}%"),
            },
            RoiPercent::Unbounded => f.write_str("∞"),
        }
    }
}

/// Time to recover the first-year outlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "months")]
pub enum Payback {
    Months(f64),
    /// Nothing to pay back: first-year cost is zero
    NoUpfrontCost,
    /// Annual savings do not exceed the first-year cost
    SavingsBelowCost,
}

impl Payback {
    pub fn calculate(adjusted_annual_savings: f64, total_first_year_cost: f64) -> Self {
        if total_first_year_cost <= 0.0 {
            Payback::NoUpfrontCost
        } else if adjusted_annual_savings > total_first_year_cost {
            Payback::Months(total_first_year_cost / adjusted_annual_savings * 12.0)
        } else {
            Payback::SavingsBelowCost
        }
    }

    pub fn months(self) -> Option<f64> {
        match self {
            Payback::Months(months) => Some(months),
            _ => None,
        }
    }

    pub fn is_applicable(self) -> bool {
        matches!(self, Payback::Months(_))
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payback::Months(months) => match f.precision() {
                Some(precision) => write!(f, "{months:.precision$}"),
                None => write!(f, "{months:.2}"),
            },
            Payback::NoUpfrontCost | Payback::SavingsBelowCost => f.write_str("N/A"),
        }
    }
}

/// One year of the projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionYear {
    pub year: u32,
    pub manual_cost: f64,
    /// Automated labor plus license (and implementation in year 1)
    pub automated_cost: f64,
    /// Net savings accumulated through the end of this year
    pub cumulative_savings: f64,
}

/// ROI figures derived from adjusted savings and costs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiSummary {
    pub total_first_year_cost: f64,
    pub subsequent_year_cost: f64,
    pub first_year_roi: RoiPercent,
    pub subsequent_year_roi: RoiPercent,
    pub payback: Payback,
}

impl RoiSummary {
    pub fn calculate(adjusted_annual_savings: f64, license_cost: f64, implementation_cost: f64) -> Self {
        let total_first_year_cost = license_cost + implementation_cost;
        let subsequent_year_cost = license_cost;

        Self {
            total_first_year_cost,
            subsequent_year_cost,
            first_year_roi: RoiPercent::from_savings(adjusted_annual_savings, total_first_year_cost),
            subsequent_year_roi: RoiPercent::from_savings(adjusted_annual_savings, subsequent_year_cost),
            payback: Payback::calculate(adjusted_annual_savings, total_first_year_cost),
        }
    }
}

/// Project costs and cumulative savings over [`PROJECTION_YEARS`] years.
///
/// Manual cost is held flat (no inflation). Implementation is charged in
/// year 1 only; license every year.
pub fn project_years(
    manual_cost: f64,
    automated_cost: f64,
    license_cost: f64,
    implementation_cost: f64,
    adjusted_annual_savings: f64,
) -> Vec<ProjectionYear> {
    let first_year_cost = license_cost + implementation_cost;
    let mut cumulative = 0.0;

    (1..=PROJECTION_YEARS)
        .map(|year| {
            let (outlay, year_cost) = if year == 1 {
                (automated_cost + first_year_cost, first_year_cost)
            } else {
                (automated_cost + license_cost, license_cost)
            };
            cumulative += adjusted_annual_savings - year_cost;
            ProjectionYear {
                year,
                manual_cost,
                automated_cost: outlay,
                cumulative_savings: cumulative,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_roi_percentages() {
        let summary = RoiSummary::calculate(30_000.0, 5_000.0, 5_000.0);
        assert_eq!(summary.total_first_year_cost, 10_000.0);
        assert_eq!(summary.subsequent_year_cost, 5_000.0);
        assert_eq!(summary.first_year_roi, RoiPercent::Bounded(200.0));
        assert_eq!(summary.subsequent_year_roi, RoiPercent::Bounded(500.0));
        assert_relative_eq!(summary.payback.months().unwrap(), 4.0, max_relative = 1e-12);
    }

    #[test]
    fn test_negative_roi_is_bounded() {
        let roi = RoiPercent::from_savings(500.0, 1_000.0);
        assert_eq!(roi, RoiPercent::Bounded(-50.0));
        assert_eq!(Payback::calculate(500.0, 1_000.0), Payback::SavingsBelowCost);
    }

    #[test]
    fn test_zero_cost_is_unbounded() {
        let summary = RoiSummary::calculate(0.0, 0.0, 0.0);
        assert!(summary.first_year_roi.is_unbounded());
        assert!(summary.subsequent_year_roi.is_unbounded());
        assert_eq!(summary.payback, Payback::NoUpfrontCost);
        assert!(!summary.payback.is_applicable());
    }

    #[test]
    fn test_only_subsequent_can_be_unbounded() {
        // Override to zero license with a paid implementation
        let summary = RoiSummary::calculate(50_000.0, 0.0, 20_000.0);
        assert_eq!(summary.first_year_roi, RoiPercent::Bounded(150.0));
        assert!(summary.subsequent_year_roi.is_unbounded());
        assert_relative_eq!(summary.payback.months().unwrap(), 4.8, max_relative = 1e-12);
    }

    #[test]
    fn test_savings_equal_to_cost_has_no_payback() {
        assert_eq!(Payback::calculate(10_000.0, 10_000.0), Payback::SavingsBelowCost);
    }

    #[test]
    fn test_display() {
        assert_eq!(RoiPercent::Bounded(12.346).to_string(), "12.35%");
        assert_eq!(format!("{:.1}", RoiPercent::Bounded(12.346)), "12.3%");
        assert_eq!(RoiPercent::Unbounded.to_string(), "∞");
        assert_eq!(Payback::Months(3.456).to_string(), "3.46");
        assert_eq!(format!("{:.1}", Payback::Months(3.456)), "3.5");
        assert_eq!(Payback::NoUpfrontCost.to_string(), "N/A");
        assert_eq!(Payback::SavingsBelowCost.to_string(), "N/A");
    }

    #[test]
    fn test_projection_shape_and_costs() {
        let projection = project_years(100_000.0, 10_000.0, 4_000.0, 20_000.0, 90_000.0);

        assert_eq!(projection.len(), 5);
        assert_eq!(projection.iter().map(|p| p.year).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert!(projection.iter().all(|p| p.manual_cost == 100_000.0));
        assert_eq!(projection[0].automated_cost, 34_000.0);
        assert!(projection[1..].iter().all(|p| p.automated_cost == 14_000.0));
    }

    #[test]
    fn test_projection_cumulative_savings() {
        let projection = project_years(100_000.0, 10_000.0, 4_000.0, 20_000.0, 90_000.0);

        // Year 1: 90,000 - 24,000; then +86,000 per year
        assert_relative_eq!(projection[0].cumulative_savings, 66_000.0);
        assert_relative_eq!(projection[1].cumulative_savings, 152_000.0);
        assert_relative_eq!(projection[4].cumulative_savings, 66_000.0 + 4.0 * 86_000.0);
    }

    #[test]
    fn test_projection_can_stay_negative() {
        let projection = project_years(1_000.0, 100.0, 5_000.0, 10_000.0, 2_000.0);
        assert_relative_eq!(projection[0].cumulative_savings, -13_000.0);
        assert_relative_eq!(projection[4].cumulative_savings, -13_000.0 - 4.0 * 3_000.0);
    }
}
