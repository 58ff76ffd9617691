//! Manual vs. automated update effort

use serde::Serialize;

/// Annual update workload with and without automation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaborSummary {
    pub total_updates: u64,
    pub manual_hours: f64,
    pub manual_cost: f64,
    pub automated_hours: f64,
    pub automated_cost: f64,
    pub labor_savings: f64,
}

impl LaborSummary {
    /// # Arguments
    /// * `applications` - Applications kept up to date
    /// * `updates_per_app` - Updates per application per year
    /// * `hours_per_update` - Manual hours for one update
    /// * `hourly_rate` - Technician cost per hour
    /// * `efficiency_percent` - Effort removed by automation (e.g., 90 = 90%)
    pub fn calculate(
        applications: u32,
        updates_per_app: u32,
        hours_per_update: f64,
        hourly_rate: f64,
        efficiency_percent: f64,
    ) -> Self {
        let total_updates = u64::from(applications) * u64::from(updates_per_app);
        let manual_hours = total_updates as f64 * hours_per_update;
        let manual_cost = manual_hours * hourly_rate;

        // Share of manual effort still required after automation
        let automation_factor = 1.0 - efficiency_percent / 100.0;
        let automated_hours = manual_hours * automation_factor;
        let automated_cost = automated_hours * hourly_rate;

        Self {
            total_updates,
            manual_hours,
            manual_cost,
            automated_hours,
            automated_cost,
            labor_savings: manual_cost - automated_cost,
        }
    }

    pub fn hours_saved(&self) -> f64 {
        self.manual_hours - self.automated_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_workload() {
        let labor = LaborSummary::calculate(1500, 4, 4.0, 50.0, 90.0);

        assert_eq!(labor.total_updates, 6000);
        assert_eq!(labor.manual_hours, 24_000.0);
        assert_eq!(labor.manual_cost, 1_200_000.0);
        assert_relative_eq!(labor.automated_hours, 2_400.0, max_relative = 1e-12);
        assert_relative_eq!(labor.automated_cost, 120_000.0, max_relative = 1e-12);
        assert_relative_eq!(labor.labor_savings, 1_080_000.0, max_relative = 1e-12);
        assert_relative_eq!(labor.hours_saved(), 21_600.0, max_relative = 1e-12);
    }

    #[test]
    fn test_max_efficiency_leaves_one_percent() {
        let labor = LaborSummary::calculate(37, 12, 1.5, 72.5, 99.0);
        assert_relative_eq!(labor.automated_hours, 0.01 * labor.manual_hours, max_relative = 1e-9);
    }

    #[test]
    fn test_savings_is_exact_difference() {
        let labor = LaborSummary::calculate(321, 7, 2.3, 61.7, 73.0);
        assert_eq!(labor.labor_savings, labor.manual_cost - labor.automated_cost);
        assert!(labor.labor_savings >= 0.0);
    }
}
