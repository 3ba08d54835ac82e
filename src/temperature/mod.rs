//! Temperature module
//!
//! Unit conversion, fever detection and patient status reports.

pub mod analyzer;
pub mod report;
pub mod units;

pub use analyzer::{
    fever_threshold, AnalysisOptions, PatientStatus, TemperatureAnalyzer, BABY_FEVER_THRESHOLD,
    HIGH_FEVER_THRESHOLD, LOW_FEVER_THRESHOLD,
};
pub use report::{ReportFormat, StatusReport};
pub use units::TemperatureUnit;
