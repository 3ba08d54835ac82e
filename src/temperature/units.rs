//! Temperature units and realistic reading bounds

use serde::{Deserialize, Serialize};

use crate::error::{HealthError, HealthResult};

/// Minimum valid Celsius reading
pub const MIN_CELSIUS: f64 = -50.0;
/// Maximum valid Celsius reading
pub const MAX_CELSIUS: f64 = 150.0;
/// Minimum valid Fahrenheit reading
pub const MIN_FAHRENHEIT: f64 = -58.0;
/// Maximum valid Fahrenheit reading
pub const MAX_FAHRENHEIT: f64 = 302.0;

/// Temperature scale of a reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }

    /// Parse a unit symbol or name
    pub fn parse(s: &str) -> HealthResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(HealthError::invalid(format!("unsupported unit: {}", s))),
        }
    }

    /// Inclusive range of readings considered realistic in this unit
    pub fn realistic_range(&self) -> (f64, f64) {
        match self {
            TemperatureUnit::Celsius => (MIN_CELSIUS, MAX_CELSIUS),
            TemperatureUnit::Fahrenheit => (MIN_FAHRENHEIT, MAX_FAHRENHEIT),
        }
    }

    pub fn is_realistic(&self, temp: f64) -> bool {
        let (min, max) = self.realistic_range();
        (min..=max).contains(&temp)
    }

    /// Convert a reading in this unit to Celsius without range checks
    pub fn to_celsius(&self, temp: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => temp,
            TemperatureUnit::Fahrenheit => (temp - 32.0) * 5.0 / 9.0,
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(TemperatureUnit::parse("C").unwrap(), TemperatureUnit::Celsius);
        assert_eq!(TemperatureUnit::parse("f").unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!(
            TemperatureUnit::parse(" Fahrenheit ").unwrap(),
            TemperatureUnit::Fahrenheit
        );
    }

    #[test]
    fn test_parse_rejects_unsupported_unit() {
        let err = TemperatureUnit::parse("K").unwrap_err();
        assert!(matches!(err, HealthError::InvalidArgument(_)));
        assert!(err.to_string().contains("unsupported unit"));
    }

    #[test]
    fn test_realistic_bounds_are_inclusive() {
        assert!(TemperatureUnit::Celsius.is_realistic(150.0));
        assert!(TemperatureUnit::Celsius.is_realistic(-50.0));
        assert!(!TemperatureUnit::Celsius.is_realistic(150.1));
        assert!(!TemperatureUnit::Fahrenheit.is_realistic(-58.1));
        assert!(!TemperatureUnit::Celsius.is_realistic(f64::NAN));
    }

    #[test]
    fn test_to_celsius() {
        assert_eq!(TemperatureUnit::Fahrenheit.to_celsius(212.0), 100.0);
        assert_eq!(TemperatureUnit::Fahrenheit.to_celsius(32.0), 0.0);
        assert_eq!(TemperatureUnit::Celsius.to_celsius(37.0), 37.0);
    }
}
