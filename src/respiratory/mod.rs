//! Respiratory module
//!
//! Oxygen saturation and respiration rate classification.

pub mod classifier;
pub mod patient;

pub use classifier::{
    classify_breathing_frequency, classify_respiratory_status, BreathingFrequency,
    RespiratoryStatus,
};
pub use patient::Patient;
