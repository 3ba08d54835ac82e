//! Hydration module
//!
//! BMI and daily water intake calculations.

pub mod activity;
pub mod calculator;

pub use activity::ActivityLevel;
pub use calculator::{calculate_hydration_needs, HydrationRequest, HydrationResult};
