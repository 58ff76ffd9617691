//! Endpoint ROI
//!
//! Return-on-investment projection for adopting an endpoint-management
//! product. Given fleet size, update workload, technician cost, automation
//! efficiency and a product edition, the engine prices the license, compares
//! manual and automated effort, aggregates edition-weighted benefits and
//! derives ROI, payback and a five-year projection.
//!
//! ```
//! use endpoint_roi::{compute_roi, CalculatorInputs, Edition};
//!
//! let inputs = CalculatorInputs {
//!     devices: 51,
//!     ..CalculatorInputs::for_edition(Edition::Professional)
//! };
//! let result = compute_roi(&inputs);
//! assert!((result.license_cost - 809.31).abs() < 1e-9);
//! ```

pub mod error;
pub mod edition;
pub mod inputs;
pub mod calculator;
pub mod report;

pub use error::{Result, RoiError};
pub use edition::Edition;
pub use inputs::{CalculatorInputs, InputOverrides};
pub use calculator::{
    compute_roi, try_compute_roi, CalculationResult, CalculationWarning, Payback, ProjectionYear,
    RoiPercent,
};
pub use report::ReportConfig;
