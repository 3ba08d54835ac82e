//! Activity levels
//!
//! Activity level drives the multiplier applied to the base hydration need.

use serde::{Deserialize, Serialize};

use crate::error::{HealthError, HealthResult};

/// Daily activity level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    #[default]
    Mid,
    High,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Mid => "mid",
            ActivityLevel::High => "high",
        }
    }

    /// Parse an activity level, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> HealthResult<Self> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "low" => Ok(ActivityLevel::Low),
            "mid" => Ok(ActivityLevel::Mid),
            "high" => Ok(ActivityLevel::High),
            _ => Err(HealthError::invalid(format!(
                "Invalid hydration level: {}",
                normalized
            ))),
        }
    }

    /// Multiplier applied to the base daily need
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Low => 0.9,
            ActivityLevel::Mid => 1.0,
            ActivityLevel::High => 1.2,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
