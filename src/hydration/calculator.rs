//! Hydration calculator
//!
//! Computes BMI and the daily water need from body mass, height and activity.

use serde::{Deserialize, Serialize};

use super::activity::ActivityLevel;
use crate::error::{HealthError, HealthResult};

/// Water need per kilogram of body mass, in milliliters
pub const HYDRATION_NEED_ML_PER_KG: f64 = 30.0;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;

/// Input for a hydration calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationRequest {
    /// Body mass in kilograms
    pub body_mass: f64,
    /// Height in meters
    pub height: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

/// Result of a hydration calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HydrationResult {
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "hydration_L")]
    pub hydration_liters: f64,
}

impl HydrationRequest {
    pub fn new(body_mass: f64, height: f64, activity_level: ActivityLevel) -> Self {
        Self {
            body_mass,
            height,
            activity_level,
        }
    }

    /// Validate the request and compute BMI and daily hydration
    pub fn calculate(&self) -> HealthResult<HydrationResult> {
        if !(self.body_mass > 0.0) {
            return Err(HealthError::invalid("Weight must be positive"));
        }
        if !(self.height > 0.0) {
            return Err(HealthError::invalid("Height must be positive"));
        }

        let bmi = self.body_mass / self.height.powi(2);
        let base = HYDRATION_NEED_ML_PER_KG * self.body_mass / ML_PER_LITER;
        let daily_liters = base * self.activity_level.factor();

        Ok(HydrationResult {
            bmi: round_to(bmi, 2),
            hydration_liters: round_to(daily_liters, 2),
        })
    }
}

/// Round a value to the given number of decimal places
///
/// Rounds the exact binary value, so 2.025 (stored as 2.02499...) becomes
/// 2.02 and exact ties go to the even digit.
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Compute hydration needs for a patient
///
/// # Arguments
/// * `body_mass` - Body mass in kilograms
/// * `height` - Height in meters
/// * `activity_level` - "low", "mid" or "high" (case-insensitive)
///
/// The activity level is checked before the body measurements.
pub fn calculate_hydration_needs(
    body_mass: f64,
    height: f64,
    activity_level: &str,
) -> HealthResult<HydrationResult> {
    let level = ActivityLevel::parse(activity_level)?;
    HydrationRequest::new(body_mass, height, level).calculate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.3456, 2), 2.35);
        assert_eq!(round_to(24.221453, 2), 24.22);
        assert_eq!(round_to(2.0, 2), 2.0);
        assert_eq!(round_to(2.025, 2), 2.02);
        assert_eq!(round_to(20.125, 2), 20.12);
        assert_eq!(round_to(18.225, 2), 18.23);
    }

    #[test]
    fn test_mid_activity() {
        let result = calculate_hydration_needs(70.0, 1.75, "mid").unwrap();
        assert!((result.bmi - 22.86).abs() < 0.001);
        assert!((result.hydration_liters - 2.1).abs() < 0.001);
    }

    #[test]
    fn test_activity_factors() {
        let low = calculate_hydration_needs(70.0, 1.75, "low").unwrap();
        let high = calculate_hydration_needs(70.0, 1.75, " HIGH ").unwrap();
        assert!((low.hydration_liters - 1.89).abs() < 0.001);
        assert!((high.hydration_liters - 2.52).abs() < 0.001);
        assert!((low.bmi - high.bmi).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hydration_rounds_stored_value() {
        // 30 * 67.5 / 1000 is stored just below 2.025
        let mid = calculate_hydration_needs(67.5, 1.75, "mid").unwrap();
        assert_eq!(mid.hydration_liters, 2.02);
        let low = calculate_hydration_needs(75.0, 1.75, "low").unwrap();
        assert_eq!(low.hydration_liters, 2.02);
        let tiny = calculate_hydration_needs(0.5, 1.75, "mid").unwrap();
        assert_eq!(tiny.hydration_liters, 0.01);
        let other = calculate_hydration_needs(52.5, 1.75, "mid").unwrap();
        assert_eq!(other.hydration_liters, 1.57);
    }

    #[test]
    fn test_bmi_rounds_ties_to_even() {
        // 80.5 / 4 is exactly 20.125
        let result = calculate_hydration_needs(80.5, 2.0, "mid").unwrap();
        assert_eq!(result.bmi, 20.12);
        let result = calculate_hydration_needs(72.9, 2.0, "mid").unwrap();
        assert_eq!(result.bmi, 18.23);
    }

    #[test]
    fn test_rejects_non_positive_mass() {
        for mass in [0.0, -5.0] {
            let err = calculate_hydration_needs(mass, 1.75, "mid").unwrap_err();
            assert!(matches!(err, HealthError::InvalidArgument(ref m) if m == "Weight must be positive"));
        }
    }

    #[test]
    fn test_rejects_non_positive_height() {
        let err = calculate_hydration_needs(70.0, 0.0, "mid").unwrap_err();
        assert!(matches!(err, HealthError::InvalidArgument(ref m) if m == "Height must be positive"));
    }

    #[test]
    fn test_level_checked_before_measurements() {
        let err = calculate_hydration_needs(-1.0, 0.0, "extreme").unwrap_err();
        assert!(err.to_string().contains("Invalid hydration level"));
    }

    #[test]
    fn test_request_defaults_to_mid() {
        let request: HydrationRequest =
            serde_json::from_str(r#"{"body_mass": 80.0, "height": 1.8}"#).unwrap();
        assert_eq!(request.activity_level, ActivityLevel::Mid);
        let result = request.calculate().unwrap();
        assert!((result.hydration_liters - 2.4).abs() < 0.001);
    }

    #[test]
    fn test_result_serializes_with_original_keys() {
        let result = calculate_hydration_needs(70.0, 1.75, "mid").unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert!(json.get("BMI").is_some());
        assert!(json.get("hydration_L").is_some());
    }
}
