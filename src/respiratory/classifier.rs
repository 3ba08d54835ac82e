//! Respiratory classifier
//!
//! Classifies respiratory status from oxygen saturation and respiration rate,
//! and breathing frequency from respiration rate alone.

use serde::{Deserialize, Serialize};

use super::patient::{Patient, MAX_WEIGHT, MIN_WEIGHT};
use crate::error::{HealthError, HealthResult};

/// Oxygen saturation (%) below which the reading is low
pub const LOW_OXYGEN_SATURATION: f64 = 88.0;
/// Breaths per minute above which breathing is fast
pub const MAX_NORMAL_BREATHING_RATE: u32 = 20;
/// Breaths per minute below which breathing is slow
pub const MIN_NORMAL_BREATHING_RATE: u32 = 12;
/// Breaths per minute below which breathing is suspicious
pub const MIN_SLOW_BREATHING_RATE: u32 = 6;

/// Combined respiratory status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RespiratoryStatus {
    #[serde(rename = "LOW O2")]
    LowO2,
    #[serde(rename = "FAST BREATHING")]
    FastBreathing,
    #[serde(rename = "OK")]
    Ok,
}

impl RespiratoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RespiratoryStatus::LowO2 => "LOW O2",
            RespiratoryStatus::FastBreathing => "FAST BREATHING",
            RespiratoryStatus::Ok => "OK",
        }
    }
}

impl std::fmt::Display for RespiratoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Breathing frequency band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreathingFrequency {
    /// Under 6 breaths per minute
    Suspicious,
    /// 6 to 11 breaths per minute
    Slow,
    /// 12 to 20 breaths per minute
    Normal,
    /// Over 20 breaths per minute
    Fast,
}

impl BreathingFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreathingFrequency::Suspicious => "SUSPICIOUS",
            BreathingFrequency::Slow => "SLOW",
            BreathingFrequency::Normal => "NORMAL",
            BreathingFrequency::Fast => "FAST",
        }
    }
}

impl std::fmt::Display for BreathingFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify respiratory status
///
/// Low oxygen takes priority over fast breathing. An implausible weight is
/// reported as a warning but does not stop the classification.
pub fn classify_respiratory_status(
    patient: &Patient,
    respiration_rate: u32,
    oxygen_saturation: f64,
) -> RespiratoryStatus {
    if !patient.has_plausible_weight() {
        tracing::warn!("Suspicious weight for {}: {}", patient.name, patient.weight);
    }

    let status = if oxygen_saturation < LOW_OXYGEN_SATURATION {
        RespiratoryStatus::LowO2
    } else if respiration_rate > MAX_NORMAL_BREATHING_RATE {
        RespiratoryStatus::FastBreathing
    } else {
        RespiratoryStatus::Ok
    };

    tracing::debug!("Processed {}", patient.name);
    status
}

/// Classify breathing frequency
///
/// Rejects patients whose weight is at or below 50kg or above 120kg.
pub fn classify_breathing_frequency(
    patient: &Patient,
    respiration_rate: u32,
) -> HealthResult<BreathingFrequency> {
    // Lower bound is exclusive here, unlike the status check
    if !(patient.weight > MIN_WEIGHT && patient.weight <= MAX_WEIGHT) {
        tracing::warn!("Bad weight for {}: {}", patient.name, patient.weight);
        return Err(HealthError::invalid("Weight is not in range"));
    }

    let frequency = if respiration_rate < MIN_SLOW_BREATHING_RATE {
        BreathingFrequency::Suspicious
    } else if respiration_rate < MIN_NORMAL_BREATHING_RATE {
        BreathingFrequency::Slow
    } else if respiration_rate <= MAX_NORMAL_BREATHING_RATE {
        BreathingFrequency::Normal
    } else {
        BreathingFrequency::Fast
    };

    tracing::debug!("Class result={} for {}", frequency, patient.name);
    Ok(frequency)
}
