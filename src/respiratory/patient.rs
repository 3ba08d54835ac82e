//! Patient model
//!
//! Basic patient information used by the respiratory classifier.

use serde::{Deserialize, Serialize};

/// Minimum plausible body weight in kilograms
pub const MIN_WEIGHT: f64 = 50.0;
/// Maximum plausible body weight in kilograms
pub const MAX_WEIGHT: f64 = 120.0;

/// A patient with basic information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    /// Body weight in kilograms
    pub weight: f64,
    /// Medical condition
    pub condition: Option<String>,
}

impl Patient {
    pub fn new(name: impl Into<String>, weight: f64, condition: Option<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            condition,
        }
    }

    /// Whether the weight lies within the plausible range (NaN is not)
    pub fn has_plausible_weight(&self) -> bool {
        (MIN_WEIGHT..=MAX_WEIGHT).contains(&self.weight)
    }
}
